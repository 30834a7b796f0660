// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, ErrorContext, InfrastructureError, PresentationError, Result,
    SilkRangeError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CalendarDate, ClassName, ClassTypeKey, TypeName};
