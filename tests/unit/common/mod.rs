//! Shared test fixtures and helpers
//!
//! This module provides sample import files, reference data builders and an
//! in-memory reference store.

mod mocks;

pub use mocks::MemoryReferenceStore;

use timesheet_import::core::models::{Employee, Project, ReferenceData};

/// Employee header for ID `123`, name `Jane Doe`
pub const HEADER: &str = "EMP-ID: 123\nEMP-NAME: Jane Doe\n";

/// A valid file with two sections and three entries
pub const TWO_SECTIONS: &str = "\
EMP-ID: 123
EMP-NAME: Jane Doe
TIMESHEETS: 2024-01-01
09:00;12:00;\"Sprint planning\";PRJ1
13:00;17:00;\"Code review\";PRJ2
TIMESHEETS: 2024-01-02
09:00;17:00;\"Implementation\";PRJ1
";

/// Build a file from the standard header plus `body`
pub fn with_header(body: &str) -> String {
    format!("{HEADER}{body}")
}

/// Build a one-section file whose only entry line is `entry`
pub fn single_entry(entry: &str) -> String {
    with_header(&format!("TIMESHEETS: 2024-01-01\n{entry}\n"))
}

/// Reference data with employee `123` and projects `PRJ1`, `PRJ2`
pub fn reference() -> ReferenceData {
    ReferenceData::new(
        vec![Employee::new("123", "Jane Doe"), Employee::new("456", "John Smith")],
        vec![Project::new("PRJ1"), Project::new("PRJ2")],
    )
}
