//! Domain models for timesheet imports
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Employee`] - The person a file books time for
//! - [`Project`] - What the time is booked against
//! - [`TimeEntry`] - One parsed entry line
//! - [`ImportFileError`] - Every way a file can be rejected
//! - [`ReferenceData`] - Employees and projects the caller already knows

mod employee;
mod error;
mod project;
mod reference;
mod time_entry;

pub use employee::{Employee, MAX_EMPLOYEE_ID_LEN, MAX_EMPLOYEE_NAME_LEN};
pub use error::{ErrorCategory, ImportFileError, ParseError};
pub use project::{MAX_PROJECT_CODE_LEN, Project, ProjectHandle, ProjectOrigin};
pub use reference::ReferenceData;
pub use time_entry::{MAX_DESCRIPTION_LEN, TimeEntry};
