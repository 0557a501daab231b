//! Entity resolver - reconciles file identities with caller reference data
//!
//! The employee declared in a file is matched against existing employees by
//! ID. Project codes are resolved through a [`ProjectTable`], a per-parse arena
//! seeded from existing projects that creates each unknown code exactly once.
//!
//! Nothing here mutates caller data. A renamed employee is reported through
//! [`EmployeeResolution::Existing`] and applied later by the caller.

use std::collections::HashMap;

use crate::core::models::{
    Employee, ImportFileError, MAX_PROJECT_CODE_LEN, Project, ProjectHandle, ProjectOrigin,
};

/// Outcome of resolving the file's employee against existing records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeResolution {
    /// An existing employee with the same ID was found
    Existing {
        /// Position in the caller's employee slice
        index: usize,
        /// The employee as it should look after the import
        employee: Employee,
        /// Name stored before the import, if the file renamed the employee
        previous_name: Option<String>,
    },
    /// No employee with this ID exists yet
    Created(Employee),
}

impl EmployeeResolution {
    /// The resolved employee
    #[must_use]
    pub const fn employee(&self) -> &Employee {
        match self {
            Self::Existing { employee, .. } | Self::Created(employee) => employee,
        }
    }

    /// Whether the employee has to be inserted by the caller
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Whether the import changes an existing employee's name
    #[must_use]
    pub const fn is_renamed(&self) -> bool {
        matches!(
            self,
            Self::Existing {
                previous_name: Some(_),
                ..
            }
        )
    }
}

/// Resolve an employee by exact ID match
///
/// The first existing employee with a matching ID wins. If its name differs
/// from the file's, the returned employee carries the file's name and the old
/// one is kept in `previous_name`.
#[must_use]
pub fn resolve_employee(
    employee_id: &str,
    employee_name: &str,
    existing: &[Employee],
) -> EmployeeResolution {
    let Some((index, found)) =
        existing.iter().enumerate().find(|(_, e)| e.employee_id == employee_id)
    else {
        log::debug!("Employee {employee_id} not found, creating");
        return EmployeeResolution::Created(Employee::new(employee_id, employee_name));
    };

    let previous_name = (found.employee_name != employee_name).then(|| {
        log::debug!(
            "Employee {employee_id} renamed from {:?} to {employee_name:?}",
            found.employee_name
        );
        found.employee_name.clone()
    });

    EmployeeResolution::Existing {
        index,
        employee: Employee::new(employee_id, employee_name),
        previous_name,
    }
}

/// A project together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSlot {
    /// The project
    pub project: Project,
    /// Seeded from the caller, or created during the parse
    pub origin: ProjectOrigin,
}

/// Per-parse project arena keyed by code
///
/// Every code maps to exactly one [`ProjectHandle`] for the lifetime of the
/// table, which is what makes entries with equal codes share one project.
#[derive(Debug, Clone, Default)]
pub struct ProjectTable {
    slots: Vec<ProjectSlot>,
    by_code: HashMap<String, ProjectHandle>,
}

impl ProjectTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table seeded from existing projects
    ///
    /// When the seed contains the same code twice, the first one wins.
    #[must_use]
    pub fn seeded(existing: &[Project]) -> Self {
        let mut table = Self::new();
        for (index, project) in existing.iter().enumerate() {
            if table.by_code.contains_key(&project.project_code) {
                log::warn!(
                    "Ignoring duplicate existing project code {:?} at index {index}",
                    project.project_code
                );
                continue;
            }
            table.insert(project.clone(), ProjectOrigin::Existing(index));
        }
        table
    }

    /// Validate a project code and find or create its project
    ///
    /// # Errors
    ///
    /// - [`ImportFileError::ProjectQuoted`] if the code starts or ends with `"`
    /// - [`ImportFileError::ProjectTooLong`] if the code exceeds 20 characters
    pub fn resolve(&mut self, code: &str) -> Result<ProjectHandle, ImportFileError> {
        if code.starts_with('"') || code.ends_with('"') {
            return Err(ImportFileError::ProjectQuoted);
        }

        if code.chars().count() > MAX_PROJECT_CODE_LEN {
            return Err(ImportFileError::ProjectTooLong);
        }

        if let Some(&handle) = self.by_code.get(code) {
            return Ok(handle);
        }

        log::debug!("Creating project {code:?}");
        Ok(self.insert(Project::new(code), ProjectOrigin::Created))
    }

    fn insert(&mut self, project: Project, origin: ProjectOrigin) -> ProjectHandle {
        let handle = ProjectHandle(self.slots.len());
        self.by_code.insert(project.project_code.clone(), handle);
        self.slots.push(ProjectSlot { project, origin });
        handle
    }

    /// Look up a project by handle
    ///
    /// # Panics
    ///
    /// Panics if the handle came from a different table
    #[must_use]
    pub fn get(&self, handle: ProjectHandle) -> &Project {
        &self.slot(handle).project
    }

    /// Look up a project and its origin by handle
    ///
    /// # Panics
    ///
    /// Panics if the handle came from a different table
    #[must_use]
    pub fn slot(&self, handle: ProjectHandle) -> &ProjectSlot {
        &self.slots[handle.0]
    }

    /// Look up a handle by project code
    #[must_use]
    pub fn handle_of(&self, code: &str) -> Option<ProjectHandle> {
        self.by_code.get(code).copied()
    }

    /// All slots in handle order
    pub fn iter(&self) -> impl Iterator<Item = (ProjectHandle, &ProjectSlot)> {
        self.slots.iter().enumerate().map(|(i, slot)| (ProjectHandle(i), slot))
    }

    /// Projects created during the parse, in order of first appearance
    pub fn created(&self) -> impl Iterator<Item = &Project> {
        self.slots
            .iter()
            .filter(|slot| slot.origin == ProjectOrigin::Created)
            .map(|slot| &slot.project)
    }

    /// Number of projects in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
