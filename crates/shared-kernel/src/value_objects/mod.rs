// crates/shared-kernel/src/value_objects/mod.rs
pub mod calendar_date;
pub mod partition;

pub use calendar_date::{CalendarDate, compare_components};
pub use partition::{ClassName, ClassTypeKey, TypeName};
