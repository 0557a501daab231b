//! timesheet-import - Validate timesheet import files and merge them into reference data
//!
//! Reads an import file, checks it line by line, and reports either the parsed
//! entries or the first violation found.

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

mod cli;

/// Main entry point for the timesheet-import CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
