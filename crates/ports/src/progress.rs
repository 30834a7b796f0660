// crates/ports/src/progress.rs
use silk_data_range_domain::SearchDirection;
use silk_data_range_shared_kernel::{CalendarDate, ClassName, ClassTypeKey, SilkRangeError};

/// Receives progress events while partitions are searched.
pub trait SearchObserver: Send + Sync {
    fn on_partition_start(&self, key: &ClassTypeKey);
    fn on_date_chosen(&self, key: &ClassTypeKey, direction: SearchDirection, date: &CalendarDate);
    fn on_partition_failed(&self, key: &ClassTypeKey, error: &SilkRangeError);
    /// The type directories of `class` could not be listed; none of its partitions are searched.
    fn on_class_skipped(&self, class: &ClassName, error: &SilkRangeError);
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {
    fn on_partition_start(&self, _key: &ClassTypeKey) {}

    fn on_date_chosen(&self, _key: &ClassTypeKey, _direction: SearchDirection, _date: &CalendarDate) {}

    fn on_partition_failed(&self, _key: &ClassTypeKey, _error: &SilkRangeError) {}

    fn on_class_skipped(&self, _class: &ClassName, _error: &SilkRangeError) {}
}
