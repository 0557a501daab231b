//! Employee model
//!
//! An employee is identified by a short numeric ID. Exactly one employee is
//! declared per import file.

use serde::{Deserialize, Serialize};

/// Maximum length of an employee ID, in characters
pub const MAX_EMPLOYEE_ID_LEN: usize = 5;

/// Maximum length of an employee name, in characters
pub const MAX_EMPLOYEE_NAME_LEN: usize = 100;

/// An employee record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Numeric ID as written in the file (e.g., "00123")
    pub employee_id: String,

    /// Display name
    pub employee_name: String,
}

impl Employee {
    /// Create a new employee
    #[must_use]
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
        }
    }
}
