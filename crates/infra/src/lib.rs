// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod silk_conf;

pub use filesystem::StdDirectoryLister;
pub use silk_conf::{SILK_CONF_FILE_NAME, SilkConfCatalog};
