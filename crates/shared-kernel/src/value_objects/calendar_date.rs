// crates/shared-kernel/src/value_objects/calendar_date.rs
use std::{cmp::Ordering, fmt};

use serde::{Serialize, Serializer};

/// A day identified by the three directory names that lead to it.
///
/// The raw names are kept verbatim so the date can be rendered and turned
/// back into a path exactly as it appears on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: String,
    month: String,
    day: String,
}

impl CalendarDate {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self { year: year.into(), month: month.into(), day: day.into() }
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.year, &other.year)
            .then_with(|| compare_components(&self.month, &other.month))
            .then_with(|| compare_components(&self.day, &other.day))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Orders two date-directory names.
///
/// Names made only of ASCII digits come first and compare by numeric value,
/// so `"9"` sorts before `"10"` even without zero padding; equal values fall
/// back to plain string order (`"01"` before `"1"`). Every other name sorts
/// after all numeric ones, in string order. This is a total order, which
/// `slice::sort_by` requires.
pub fn compare_components(a: &str, b: &str) -> Ordering {
    match (numeric_digits(a), numeric_digits(b)) {
        (Some(da), Some(db)) => da.len().cmp(&db.len()).then_with(|| da.cmp(db)).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

// Digits with leading zeros stripped; `None` unless the whole name is ASCII digits.
fn numeric_digits(name: &str) -> Option<&str> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(name.trim_start_matches('0'))
}
