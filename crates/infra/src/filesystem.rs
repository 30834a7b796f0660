// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use silk_data_range_ports::filesystem::DirectoryLister;
use silk_data_range_shared_kernel::{InfrastructureError, Result, SilkRangeError};
use tracing::debug;

/// `DirectoryLister` backed by `std::fs`.
///
/// Entry kinds are resolved through `fs::metadata`, so symlinks count as
/// whatever they point at and dangling links are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryLister;

impl StdDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for StdDirectoryLister {
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>> {
        list_entries(dir, EntryKind::Directory)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        list_entries(dir, EntryKind::File)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    fn accepts(self, metadata: &fs::Metadata) -> bool {
        match self {
            Self::Directory => metadata.is_dir(),
            Self::File => metadata.is_file(),
        }
    }
}

fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| listing_error(dir, source))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| listing_error(dir, source))?;
        let path = entry.path();
        let Ok(metadata) = fs::metadata(&path) else {
            debug!(path = %path.display(), "skipping entry without readable metadata");
            continue;
        };
        if !kind.accepts(&metadata) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, dir = %dir.display(), "skipping non UTF-8 entry"),
        }
    }
    Ok(names)
}

fn listing_error(dir: &Path, source: std::io::Error) -> SilkRangeError {
    InfrastructureError::DirectoryListing { path: PathBuf::from(dir), source }.into()
}
