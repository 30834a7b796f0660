// crates/usecase/src/date_range.rs
use std::path::Path;

use silk_data_range_domain::{DataFilePattern, SearchDirection};
use silk_data_range_ports::{filesystem::DirectoryLister, progress::SearchObserver};
use silk_data_range_shared_kernel::{CalendarDate, ClassTypeKey, Result};
use tracing::{debug, trace};

/// Finds the oldest and newest day of a partition that holds at least one data file.
///
/// The walk descends year → month → day in sorted order and stops at the
/// first day directory containing a file accepted by the pattern. Each level
/// is listed only when the walk reaches it, so a well-populated partition
/// costs three subdirectory listings and one file listing per direction.
pub struct DateRangeSearch<'a> {
    lister: &'a dyn DirectoryLister,
    pattern: &'a DataFilePattern,
    observer: &'a dyn SearchObserver,
}

impl<'a> DateRangeSearch<'a> {
    pub fn new(
        lister: &'a dyn DirectoryLister,
        pattern: &'a DataFilePattern,
        observer: &'a dyn SearchObserver,
    ) -> Self {
        Self { lister, pattern, observer }
    }

    pub fn find_oldest(&self, root: &Path, key: &ClassTypeKey) -> Result<Option<CalendarDate>> {
        self.find(root, key, SearchDirection::Oldest)
    }

    pub fn find_newest(&self, root: &Path, key: &ClassTypeKey) -> Result<Option<CalendarDate>> {
        self.find(root, key, SearchDirection::Newest)
    }

    /// Walks the partition in `direction`. `Ok(None)` means no day holds a data file.
    pub fn find(
        &self,
        root: &Path,
        key: &ClassTypeKey,
        direction: SearchDirection,
    ) -> Result<Option<CalendarDate>> {
        let partition = key.partition_path(root);
        debug!(partition = %partition.display(), %direction, "searching partition");

        for year in self.ordered_subdirectories(&partition, direction)? {
            let year_dir = partition.join(&year);
            for month in self.ordered_subdirectories(&year_dir, direction)? {
                let month_dir = year_dir.join(&month);
                for day in self.ordered_subdirectories(&month_dir, direction)? {
                    let day_dir = month_dir.join(&day);
                    if self.holds_data_file(&day_dir)? {
                        let date = CalendarDate::new(year, month, day);
                        debug!(%key, %direction, %date, "chose date");
                        self.observer.on_date_chosen(key, direction, &date);
                        return Ok(Some(date));
                    }
                }
            }
        }

        debug!(%key, %direction, "no data files found");
        Ok(None)
    }

    fn ordered_subdirectories(&self, dir: &Path, direction: SearchDirection) -> Result<Vec<String>> {
        let mut names = self.lister.list_subdirectories(dir)?;
        direction.order(&mut names);
        Ok(names)
    }

    // Files that do not match are skipped; they never disqualify the day.
    fn holds_data_file(&self, day_dir: &Path) -> Result<bool> {
        let files = self.lister.list_files(day_dir)?;
        let found = files.iter().any(|name| self.pattern.is_match(name));
        if !found && !files.is_empty() {
            trace!(dir = %day_dir.display(), count = files.len(), "no data file among entries");
        }
        Ok(found)
    }
}
