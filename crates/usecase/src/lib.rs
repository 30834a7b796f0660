//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`date_range`]: Oldest/newest populated-day search for one partition
//! - [`discovery`]: Class and type directory enumeration
//! - [`orchestrator`]: Runs the search over every discovered partition
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod date_range;
pub mod discovery;
pub mod orchestrator;

pub use date_range::DateRangeSearch;
pub use discovery::ClassTypeDiscovery;
pub use orchestrator::{BuildInventory, InventoryOutput, InventoryPlan};

#[cfg(test)]
mod test_support;
