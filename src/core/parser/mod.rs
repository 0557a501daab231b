//! Timesheet import file parser
//!
//! Turns the text of an import file into time entries, resolving the declared
//! employee and every project code against reference data supplied by the
//! caller.
//!
//! ```text
//! EMP-ID: 123
//! EMP-NAME: Jane Doe
//! TIMESHEETS: 2024-01-01
//! 09:00;12:00;"Sprint planning";PRJ1
//! 13:00;17:00;"Code review";PRJ2
//! TIMESHEETS: 2024-01-02
//! 09:00;17:00;"Implementation";PRJ1
//! ```
//!
//! Parsing is a single forward pass that stops at the first violation. Nothing
//! the caller passed in is modified; see [`ParsedTimesheet::apply_to`].
//!
//! # Examples
//!
//! ```
//! use timesheet_import::core::models::{Employee, Project};
//! use timesheet_import::core::parser::TimesheetParser;
//!
//! let employees = vec![Employee::new("123", "Jane")];
//! let projects = vec![Project::new("PRJ1")];
//!
//! let text = "EMP-ID: 123\nEMP-NAME: Jane\nTIMESHEETS: 2024-01-01\n09:00;17:00;\"Worked\";PRJ1";
//! let parsed = TimesheetParser::new(&employees, &projects).parse(text).unwrap();
//!
//! assert_eq!(parsed.entries().len(), 1);
//! assert_eq!(parsed.project(parsed.entries()[0].project).project_code, "PRJ1");
//! assert!(!parsed.employee_resolution().is_created());
//! ```

mod entry;
mod header;
mod lines;
mod section;

use chrono::TimeDelta;

pub use entry::parse_entry;
pub use header::{EmployeeHeader, read_header};
pub use lines::{Line, Lines};
pub use section::parse_section_header;

use crate::core::models::{
    Employee, ImportFileError, ParseError, Project, ProjectHandle, TimeEntry,
};
use crate::core::services::{EmployeeResolution, ProjectTable, resolve_employee};

/// Marker that opens a timesheet section
pub const SECTION_MARKER: &str = "TIMESHEETS:";

/// Reject lines that start or end with whitespace
pub(crate) fn check_whitespace(text: &str) -> Result<(), ImportFileError> {
    if text.starts_with(char::is_whitespace) {
        return Err(ImportFileError::LeadingWhitespace);
    }
    if text.ends_with(char::is_whitespace) {
        return Err(ImportFileError::TrailingWhitespace);
    }
    Ok(())
}

/// Parser bound to one set of reference data
#[derive(Debug, Clone, Copy)]
pub struct TimesheetParser<'a> {
    employees: &'a [Employee],
    projects: &'a [Project],
}

impl<'a> TimesheetParser<'a> {
    /// Create a parser that resolves against existing employees and projects
    #[must_use]
    pub const fn new(employees: &'a [Employee], projects: &'a [Project]) -> Self {
        Self {
            employees,
            projects,
        }
    }

    /// Parse a complete import file
    ///
    /// # Errors
    ///
    /// Returns the first violation found. No partial result is produced.
    pub fn parse(&self, text: &str) -> Result<ParsedTimesheet, ParseError> {
        let result = self.parse_file(text);
        match &result {
            Ok(parsed) => log::debug!(
                "Parsed {} entries for employee {}",
                parsed.entries.len(),
                parsed.employee().employee_id
            ),
            Err(err) => log::debug!(
                "Rejected import at line {}: {}",
                err.line.map_or_else(|| "EOF".to_string(), |n| n.to_string()),
                err.kind.code()
            ),
        }
        result
    }

    fn parse_file(&self, text: &str) -> Result<ParsedTimesheet, ParseError> {
        let mut lines = Lines::new(text);

        let header = read_header(&mut lines)?;
        let employee =
            resolve_employee(&header.employee_id, &header.employee_name, self.employees);
        let mut projects = ProjectTable::seeded(self.projects);

        // read_header guarantees a section line is next
        if let Some(first) = lines.peek()
            && header::split_key_value(first.text).is_err()
        {
            return Err(ImportFileError::InvalidKeyValueFormat.at_line(first.number));
        }

        let mut entries = Vec::new();
        while let Some(section_line) = lines.peek() {
            let date = parse_section_header(section_line.text)
                .map_err(|kind| kind.at_line(section_line.number))?;
            lines.advance();

            if lines.peek().is_none_or(|next| next.is_section_header()) {
                return Err(ImportFileError::EmptyTimesheetSection.at_line(section_line.number));
            }

            let before = entries.len();
            while let Some(line) = lines.peek() {
                if line.is_section_header() {
                    break;
                }
                let entry = parse_entry(line, date, &mut projects)?;
                log::trace!("Line {}: {} - {}", line.number, entry.start_time, entry.end_time);
                entries.push(entry);
                lines.advance();
            }
            log::debug!("Section {date}: {} entries", entries.len() - before);
        }

        Ok(ParsedTimesheet {
            employee,
            projects,
            entries,
        })
    }
}

/// Parse `text` against existing employees and projects
///
/// Shorthand for [`TimesheetParser::parse`].
///
/// # Errors
///
/// Returns the first violation found.
pub fn parse_timesheet(
    text: &str,
    employees: &[Employee],
    projects: &[Project],
) -> Result<ParsedTimesheet, ParseError> {
    TimesheetParser::new(employees, projects).parse(text)
}

/// A successfully parsed import file
#[derive(Debug, Clone)]
pub struct ParsedTimesheet {
    employee: EmployeeResolution,
    projects: ProjectTable,
    entries: Vec<TimeEntry>,
}

/// An entry with its employee and project looked up
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEntry<'a> {
    /// The entry
    pub entry: &'a TimeEntry,
    /// The file's employee
    pub employee: &'a Employee,
    /// The entry's project
    pub project: &'a Project,
}

/// What [`ParsedTimesheet::apply_to`] changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedChanges {
    /// A new employee was appended
    pub employee_created: bool,
    /// An existing employee's name was overwritten
    pub employee_renamed: bool,
    /// Number of projects appended
    pub projects_created: usize,
}

impl AppliedChanges {
    /// Whether anything changed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.employee_created && !self.employee_renamed && self.projects_created == 0
    }
}

impl ParsedTimesheet {
    /// The file's employee, with the name from the file
    #[must_use]
    pub const fn employee(&self) -> &Employee {
        self.employee.employee()
    }

    /// How the employee was resolved
    #[must_use]
    pub const fn employee_resolution(&self) -> &EmployeeResolution {
        &self.employee
    }

    /// Entries in source order
    #[must_use]
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Take ownership of the entries
    #[must_use]
    pub fn into_entries(self) -> Vec<TimeEntry> {
        self.entries
    }

    /// The project behind a handle from [`Self::entries`]
    #[must_use]
    pub fn project(&self, handle: ProjectHandle) -> &Project {
        self.projects.get(handle)
    }

    /// The project table used during the parse
    #[must_use]
    pub const fn projects(&self) -> &ProjectTable {
        &self.projects
    }

    /// Projects first seen in this file
    pub fn created_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.created()
    }

    /// Entries with their employee and project looked up
    pub fn resolved_entries(&self) -> impl Iterator<Item = ResolvedEntry<'_>> {
        self.entries.iter().map(|entry| ResolvedEntry {
            entry,
            employee: self.employee(),
            project: self.project(entry.project),
        })
    }

    /// Total booked time per project, in order of first appearance
    #[must_use]
    pub fn time_by_project(&self) -> Vec<(ProjectHandle, TimeDelta)> {
        let mut totals: Vec<(ProjectHandle, TimeDelta)> = Vec::new();
        for entry in &self.entries {
            match totals.iter_mut().find(|(h, _)| *h == entry.project) {
                Some((_, total)) => *total += entry.duration(),
                None => totals.push((entry.project, entry.duration())),
            }
        }
        totals
    }

    /// Total booked time across all entries
    #[must_use]
    pub fn total_time(&self) -> TimeDelta {
        self.entries.iter().map(TimeEntry::duration).sum()
    }

    /// Write the employee and any new projects into the caller's collections
    ///
    /// The employee is matched by ID: an existing one gets the file's name, a
    /// missing one is appended. Created projects are appended unless a project
    /// with the same code is already present.
    pub fn apply_to(
        &self,
        employees: &mut Vec<Employee>,
        projects: &mut Vec<Project>,
    ) -> AppliedChanges {
        let mut changes = AppliedChanges::default();
        let employee = self.employee();

        match employees.iter_mut().find(|e| e.employee_id == employee.employee_id) {
            Some(existing) if existing.employee_name != employee.employee_name => {
                existing.employee_name.clone_from(&employee.employee_name);
                changes.employee_renamed = true;
            },
            Some(_) => {},
            None => {
                employees.push(employee.clone());
                changes.employee_created = true;
            },
        }

        for project in self.created_projects() {
            if !projects.iter().any(|p| p.project_code == project.project_code) {
                projects.push(project.clone());
                changes.projects_created += 1;
            }
        }

        changes
    }
}
