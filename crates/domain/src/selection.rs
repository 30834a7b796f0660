// crates/domain/src/selection.rs
use std::collections::BTreeSet;

use silk_data_range_shared_kernel::ClassName;

/// How the set of class directories to search was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Directories were filtered against the recognized classes.
    Recognized,
    /// A single class was requested; recognized classes were not consulted.
    SingleClass(ClassName),
}

/// Class directories that will and will not be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSelection {
    pub mode: SelectionMode,
    pub used: BTreeSet<ClassName>,
    pub unused: BTreeSet<ClassName>,
}

impl ClassSelection {
    /// Splits on-disk class directories into recognized and unrecognized.
    pub fn filter(candidates: &BTreeSet<ClassName>, recognized: &BTreeSet<ClassName>) -> Self {
        let (used, unused) = candidates.iter().cloned().partition(|name| recognized.contains(name));
        Self { mode: SelectionMode::Recognized, used, unused }
    }

    pub fn single(class: ClassName) -> Self {
        Self {
            mode: SelectionMode::SingleClass(class.clone()),
            used: BTreeSet::from([class]),
            unused: BTreeSet::new(),
        }
    }
}
