// crates/domain/src/direction.rs
use std::{cmp::Ordering, fmt};

use silk_data_range_shared_kernel::value_objects::compare_components;

/// Which end of the date tree a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Walk every level ascending and stop at the first populated day.
    Oldest,
    /// Walk every level descending and stop at the first populated day.
    Newest,
}

impl SearchDirection {
    pub const ALL: [Self; 2] = [Self::Oldest, Self::Newest];

    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Oldest => ordering,
            Self::Newest => ordering.reverse(),
        }
    }

    /// Sorts date-directory names into visiting order for this direction.
    pub fn order(self, names: &mut [String]) {
        names.sort_by(|a, b| self.apply(compare_components(a, b)));
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Oldest => "oldest",
            Self::Newest => "newest",
        }
    }
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
