//! Reference data
//!
//! The employees and projects already known to the caller. A parse reads it;
//! only [`apply_to`](crate::core::parser::ParsedTimesheet::apply_to) writes it.

use serde::{Deserialize, Serialize};

use super::{Employee, Project};

/// Known employees and projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Existing employees
    #[serde(default, rename = "employee")]
    pub employees: Vec<Employee>,

    /// Existing projects
    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
}

impl ReferenceData {
    /// Create reference data from existing collections
    #[must_use]
    pub const fn new(employees: Vec<Employee>, projects: Vec<Project>) -> Self {
        Self {
            employees,
            projects,
        }
    }

    /// Find an employee by ID
    #[must_use]
    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    /// Find a project by code
    #[must_use]
    pub fn project(&self, project_code: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.project_code == project_code)
    }
}
