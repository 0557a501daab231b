//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`resolver`] - Match the file's employee and projects to reference data

pub mod resolver;

pub use resolver::{EmployeeResolution, ProjectSlot, ProjectTable, resolve_employee};
