// crates/ports/src/catalog.rs
use std::collections::BTreeSet;

use silk_data_range_shared_kernel::{ClassName, Result};

/// Port for the set of class names the site configuration declares.
pub trait ClassCatalog: Send + Sync {
    fn recognized_classes(&self) -> Result<BTreeSet<ClassName>>;
}
