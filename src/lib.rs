//! timesheet-import - Parse and validate timesheet import files
//!
//! This library turns the line-oriented timesheet import format into time
//! entries, resolving employees and projects against caller-supplied reference
//! data and rejecting malformed files with a fixed error taxonomy.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{Employee, ImportFileError, ParseError, Project, TimeEntry};
pub use crate::core::parser::{ParsedTimesheet, TimesheetParser, parse_timesheet};
