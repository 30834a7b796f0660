// src/presentation/notifier.rs
use std::{
    collections::BTreeSet,
    fmt::Display,
    io::Write,
    path::Path,
    sync::{Mutex, PoisonError},
};

use silk_data_range_domain::{ClassSelection, SearchDirection, SelectionMode};
use silk_data_range_ports::progress::SearchObserver;
use silk_data_range_shared_kernel::{CalendarDate, ClassName, ClassTypeKey, SilkRangeError};

use crate::options::Verbosity;

/// Prints `[INFO]` and `[warn]` lines for a run.
///
/// Informational lines go to `out` unless `info_to_err` is set (JSON
/// reports keep stdout clean); warnings always go to `err`.
pub struct ConsoleNotifier<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
    verbosity: Verbosity,
    info_to_err: bool,
}

impl<O: Write + Send, E: Write + Send> ConsoleNotifier<O, E> {
    pub fn new(out: O, err: E, verbosity: Verbosity, info_to_err: bool) -> Self {
        Self { out: Mutex::new(out), err: Mutex::new(err), verbosity, info_to_err }
    }

    pub fn data_paths(&self, data_dir: &Path, silk_conf: &Path) {
        if self.verbosity.shows_progress() {
            self.info(format_args!("Using {} as the data parent directory", data_dir.display()));
            self.info(format_args!("Using {} as the silk.conf path", silk_conf.display()));
        }
    }

    pub fn class_selection(&self, selection: &ClassSelection) {
        if !self.verbosity.shows_info() {
            return;
        }
        match &selection.mode {
            SelectionMode::Recognized => {
                self.info("Found these directories, not in the silk.conf as class, so not using:");
                self.plain(&join(&selection.unused));
                self.info("Found and using class dirs named:");
                self.plain(&join(&selection.used));
            }
            SelectionMode::SingleClass(class) => {
                self.info("Not looking for classes found in silk.conf due to using silkclass option");
                self.info(format_args!("Only looking for info on silkclass option: {class}"));
            }
        }
    }

    /// Printed even in quiet mode.
    pub fn dry_run_exit(&self) {
        self.info("Exiting due to --dryrun option");
    }

    pub fn warn(&self, message: impl Display) {
        write_line(&self.err, format_args!("[warn] {message}"));
    }

    pub fn into_writers(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.err.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn info(&self, message: impl Display) {
        self.line(format_args!("[INFO] {message}"));
    }

    fn plain(&self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn line(&self, line: std::fmt::Arguments<'_>) {
        if self.info_to_err {
            write_line(&self.err, line);
        } else {
            write_line(&self.out, line);
        }
    }
}

impl<O: Write + Send, E: Write + Send> SearchObserver for ConsoleNotifier<O, E> {
    fn on_partition_start(&self, key: &ClassTypeKey) {
        if self.verbosity.shows_progress() {
            self.info(format_args!(
                "Starting search for oldest & newest data files for class: {}, type: {}",
                key.class, key.type_name
            ));
        }
    }

    fn on_date_chosen(&self, key: &ClassTypeKey, direction: SearchDirection, date: &CalendarDate) {
        if self.verbosity.shows_info() {
            self.info(format_args!("Chose {date} as {direction} date for {} {}", key.class, key.type_name));
        }
    }

    fn on_partition_failed(&self, key: &ClassTypeKey, error: &SilkRangeError) {
        self.warn(format_args!("search of {key} abandoned: {error}"));
    }

    fn on_class_skipped(&self, class: &ClassName, error: &SilkRangeError) {
        self.warn(format_args!("class {class} skipped: {error}"));
    }
}

fn join(names: &BTreeSet<ClassName>) -> String {
    names.iter().map(ClassName::as_str).collect::<Vec<_>>().join(" ")
}

// A closed stdout is not worth aborting a read-only scan over.
fn write_line<W: Write>(sink: &Mutex<W>, line: std::fmt::Arguments<'_>) {
    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(err) = writeln!(sink, "{line}") {
        tracing::debug!(error = %err, "dropping console line");
    }
}
