// crates/domain/src/inventory.rs
use std::collections::{BTreeMap, btree_map};

use silk_data_range_shared_kernel::{CalendarDate, ClassTypeKey};

use crate::direction::SearchDirection;

/// First and last populated day of one partition. `None` means no data file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub oldest: Option<CalendarDate>,
    pub newest: Option<CalendarDate>,
}

impl SearchResult {
    pub fn new(oldest: Option<CalendarDate>, newest: Option<CalendarDate>) -> Self {
        Self { oldest, newest }
    }

    pub fn set(&mut self, direction: SearchDirection, date: Option<CalendarDate>) {
        match direction {
            SearchDirection::Oldest => self.oldest = date,
            SearchDirection::Newest => self.newest = date,
        }
    }

    pub fn get(&self, direction: SearchDirection) -> Option<&CalendarDate> {
        match direction {
            SearchDirection::Oldest => self.oldest.as_ref(),
            SearchDirection::Newest => self.newest.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.oldest.is_none() && self.newest.is_none()
    }
}

/// Every partition that was searched, keyed and iterated in (class, type) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    partitions: BTreeMap<ClassTypeKey, SearchResult>,
}

impl Inventory {
    /// Registers a partition so it is reported even if no date is ever recorded.
    pub fn track(&mut self, key: ClassTypeKey) {
        self.partitions.entry(key).or_default();
    }

    pub fn record(&mut self, key: ClassTypeKey, result: SearchResult) {
        self.partitions.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ClassTypeKey, SearchResult> {
        self.partitions.iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = (&'a ClassTypeKey, &'a SearchResult);
    type IntoIter = btree_map::Iter<'a, ClassTypeKey, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}

impl FromIterator<(ClassTypeKey, SearchResult)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ClassTypeKey, SearchResult)>>(iter: I) -> Self {
        Self { partitions: iter.into_iter().collect() }
    }
}
