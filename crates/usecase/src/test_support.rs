// crates/usecase/src/test_support.rs
use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use silk_data_range_domain::{DEFAULT_DATA_FILE_PATTERN, DataFilePattern, SearchDirection};
use silk_data_range_ports::{filesystem::DirectoryLister, progress::SearchObserver};
use silk_data_range_shared_kernel::{
    CalendarDate, ClassName, ClassTypeKey, InfrastructureError, Result, SilkRangeError,
};

pub(crate) fn silk_pattern() -> DataFilePattern {
    DataFilePattern::new(DEFAULT_DATA_FILE_PATTERN).unwrap()
}

/// In-memory directory tree that records which directories had their files listed.
#[derive(Default)]
pub(crate) struct MemoryTree {
    dirs: BTreeMap<PathBuf, Vec<String>>,
    files: BTreeMap<PathBuf, Vec<String>>,
    failing: BTreeSet<PathBuf>,
    file_listings: Mutex<Vec<PathBuf>>,
}

impl MemoryTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(mut self, dir: &str) -> Self {
        self.add_dir(Path::new(dir));
        self
    }

    pub(crate) fn with_file(mut self, path: &str) -> Self {
        let path = Path::new(path);
        let parent = path.parent().expect("file path has a parent");
        self.add_dir(parent);
        let name = path.file_name().expect("file path has a name").to_string_lossy().into_owned();
        self.files.entry(parent.to_path_buf()).or_default().push(name);
        self
    }

    pub(crate) fn failing_at(mut self, dir: &str) -> Self {
        self.add_dir(Path::new(dir));
        self.failing.insert(PathBuf::from(dir));
        self
    }

    pub(crate) fn file_listings(&self) -> Vec<PathBuf> {
        self.file_listings.lock().unwrap().clone()
    }

    fn add_dir(&mut self, dir: &Path) {
        let mut current = PathBuf::new();
        for component in dir.components() {
            let parent = current.clone();
            current.push(component);
            self.dirs.entry(current.clone()).or_default();
            if parent.as_os_str().is_empty() {
                continue;
            }
            let name = component.as_os_str().to_string_lossy().into_owned();
            let children = self.dirs.entry(parent).or_default();
            if !children.contains(&name) {
                children.push(name);
            }
        }
    }

    fn check(&self, dir: &Path) -> Result<()> {
        if self.failing.contains(dir) {
            return Err(listing_error(dir, io::ErrorKind::PermissionDenied));
        }
        if !self.dirs.contains_key(dir) {
            return Err(listing_error(dir, io::ErrorKind::NotFound));
        }
        Ok(())
    }
}

fn listing_error(dir: &Path, kind: io::ErrorKind) -> SilkRangeError {
    InfrastructureError::DirectoryListing { path: dir.to_path_buf(), source: io::Error::from(kind) }.into()
}

impl DirectoryLister for MemoryTree {
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>> {
        self.check(dir)?;
        Ok(self.dirs.get(dir).cloned().unwrap_or_default())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        self.check(dir)?;
        self.file_listings.lock().unwrap().push(dir.to_path_buf());
        Ok(self.files.get(dir).cloned().unwrap_or_default())
    }
}

/// Observer that keeps a textual log of every event.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_partition_start(&self, key: &ClassTypeKey) {
        self.events.lock().unwrap().push(format!("start {key}"));
    }

    fn on_date_chosen(&self, key: &ClassTypeKey, direction: SearchDirection, date: &CalendarDate) {
        self.events.lock().unwrap().push(format!("{direction} {key} {date}"));
    }

    fn on_partition_failed(&self, key: &ClassTypeKey, _error: &SilkRangeError) {
        self.events.lock().unwrap().push(format!("failed {key}"));
    }

    fn on_class_skipped(&self, class: &ClassName, _error: &SilkRangeError) {
        self.events.lock().unwrap().push(format!("skipped {class}"));
    }
}
