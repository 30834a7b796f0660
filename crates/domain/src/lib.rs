//! # Domain
//!
//! Pure rules of the data-availability inventory: which file names count as
//! data, which way a search walks, which class directories are in play and
//! how per-partition results are accumulated. Nothing here touches the
//! filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod direction;
pub mod inventory;
pub mod pattern;
pub mod selection;

pub use direction::SearchDirection;
pub use inventory::{Inventory, SearchResult};
pub use pattern::{DEFAULT_DATA_FILE_PATTERN, DataFilePattern};
pub use selection::{ClassSelection, SelectionMode};
