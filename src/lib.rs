//! Report, per SiLK class/type, the first and last day with hourly flow files on disk.
//!
//! Data is expected under `<root>/<class>/<type>/<year>/<month>/<day>/`.
//! Only the extremes of each date tree are visited; see
//! [`silk_data_range_usecase::DateRangeSearch`].

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
