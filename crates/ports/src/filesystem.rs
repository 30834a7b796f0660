// crates/ports/src/filesystem.rs
use std::path::Path;

use silk_data_range_shared_kernel::Result;

/// Port for reading one level of a directory tree.
///
/// Both listings return bare entry names in no particular order; callers
/// sort them as needed.
pub trait DirectoryLister: Send + Sync {
    /// Names of the immediate subdirectories of `dir`.
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>>;

    /// Names of the immediate regular files of `dir`.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>>;
}
