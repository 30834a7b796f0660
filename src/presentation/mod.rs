// src/presentation/mod.rs
pub mod notifier;
pub mod report;

pub use notifier::ConsoleNotifier;
pub use report::{REPORT_HEADER, render_report};
