//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory listing for the date tree
//! - [`catalog`]: Source of the recognized class names
//! - [`progress`]: Progress reporting while partitions are searched
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod filesystem;
pub mod progress;
