//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ErrorCategory, ImportFileError, ParseError, ProjectOrigin};
use crate::core::parser::ParsedTimesheet;
use crate::core::services::EmployeeResolution;

/// HTTP status a rejected import maps to at a service boundary
pub const REJECTED_STATUS: u16 = 400;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Rejection body for a failed parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Stable error code (e.g., `INVALID_TIME`)
    pub code: &'static str,
    /// Error group
    pub category: ErrorCategory,
    /// Fixed human-readable message
    pub message: String,
    /// 1-based source line, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Status code for service boundaries (always 400)
    pub status: u16,
}

impl From<&ParseError> for ErrorReport {
    fn from(err: &ParseError) -> Self {
        Self {
            code: err.kind.code(),
            category: err.kind.category(),
            message: err.kind.to_string(),
            line: err.line,
            status: REJECTED_STATUS,
        }
    }
}

impl ErrorReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let location = self.line.map_or_else(String::new, |n| format!(" (line {n})"));
                println!("{} {}{location}", "REJECTED:".red().bold(), self.message);
                println!("  code: {}", self.code);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// How the file's employee was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    /// Matched an existing employee unchanged
    Existing,
    /// Matched an existing employee and changed its name
    Renamed,
    /// No existing employee matched
    Created,
}

/// The employee part of an import result
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeInfo {
    /// Employee ID
    pub id: String,
    /// Name from the file
    pub name: String,
    /// How it was resolved
    pub status: EmployeeStatus,
    /// Name before the import, when renamed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_name: Option<String>,
}

/// One imported entry
#[derive(Debug, Clone, Serialize)]
pub struct EntryInfo {
    /// Source line
    pub line: usize,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    /// Unquoted description
    pub description: String,
    /// Project code
    pub project: String,
}

/// Booked time per project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectTotal {
    /// Project code
    pub code: String,
    /// Total minutes
    pub minutes: i64,
    /// Whether the project is new
    pub created: bool,
}

/// Result of an import
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    /// Source file
    pub file: String,
    /// The file's employee
    pub employee: EmployeeInfo,
    /// Entries in source order
    pub entries: Vec<EntryInfo>,
    /// Totals per project, in order of first appearance
    pub projects: Vec<ProjectTotal>,
    /// Total minutes across all entries
    pub total_minutes: i64,
    /// Reference file that was updated, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

impl ImportResult {
    /// Build a result from a parse
    #[must_use]
    pub fn from_parsed(file: &str, parsed: &ParsedTimesheet) -> Self {
        let employee = parsed.employee();
        let (status, previous_name) = match parsed.employee_resolution() {
            EmployeeResolution::Created(_) => (EmployeeStatus::Created, None),
            EmployeeResolution::Existing {
                previous_name: None, ..
            } => (EmployeeStatus::Existing, None),
            EmployeeResolution::Existing {
                previous_name: Some(old),
                ..
            } => (EmployeeStatus::Renamed, Some(old.clone())),
        };

        let entries = parsed
            .resolved_entries()
            .map(|r| EntryInfo {
                line: r.entry.line,
                date: r.entry.date.format("%Y-%m-%d").to_string(),
                start: r.entry.start_time.format("%H:%M").to_string(),
                end: r.entry.end_time.format("%H:%M").to_string(),
                description: r.entry.description.clone(),
                project: r.project.project_code.clone(),
            })
            .collect();

        let projects = parsed
            .time_by_project()
            .into_iter()
            .map(|(handle, total)| {
                let slot = parsed.projects().slot(handle);
                ProjectTotal {
                    code: slot.project.project_code.clone(),
                    minutes: total.num_minutes(),
                    created: slot.origin == ProjectOrigin::Created,
                }
            })
            .collect();

        Self {
            file: file.to_string(),
            employee: EmployeeInfo {
                id: employee.employee_id.clone(),
                name: employee.employee_name.clone(),
                status,
                previous_name,
            },
            entries,
            projects,
            total_minutes: parsed.total_time().num_minutes(),
            saved_to: None,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let status = match self.employee.status {
            EmployeeStatus::Existing => "existing".normal(),
            EmployeeStatus::Renamed => "renamed".yellow(),
            EmployeeStatus::Created => "new".green(),
        };
        println!("Imported {} entries from {}", self.entries.len(), self.file);
        println!("Employee {} {} [{status}]", self.employee.id, self.employee.name);
        if let Some(old) = &self.employee.previous_name {
            println!("  previously: {old}");
        }
        println!();

        for e in &self.entries {
            println!("  {} {}-{}  {:<20} {}", e.date, e.start, e.end, e.project, e.description);
        }
        println!();

        println!("Projects:");
        for p in &self.projects {
            let marker = if p.created { " (new)".green() } else { "".normal() };
            println!("  {:<20} {}{marker}", p.code, format_minutes(p.minutes));
        }
        println!("Total: {}", format_minutes(self.total_minutes));

        if let Some(path) = &self.saved_to {
            println!("\nReference data saved to {path}");
        }
    }
}

/// Result of a validation-only run
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Source file
    pub file: String,
    /// Whether the file parsed
    pub valid: bool,
    /// Number of entries, when valid
    pub entries: usize,
    /// The rejection, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.error {
                None => {
                    println!("{} {} ({} entries)", "OK:".green().bold(), self.file, self.entries);
                },
                Some(report) => {
                    println!("{}", self.file);
                    report.render(mode);
                },
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// One row of the error taxonomy listing
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyEntry {
    /// Stable error code
    pub code: &'static str,
    /// Error group
    pub category: ErrorCategory,
    /// Fixed message
    pub message: String,
}

/// The full error taxonomy
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyList {
    /// Every error kind
    pub errors: Vec<TaxonomyEntry>,
}

impl TaxonomyList {
    /// List every [`ImportFileError`]
    #[must_use]
    pub fn all() -> Self {
        Self {
            errors: ImportFileError::ALL
                .iter()
                .map(|kind| TaxonomyEntry {
                    code: kind.code(),
                    category: kind.category(),
                    message: kind.to_string(),
                })
                .collect(),
        }
    }

    /// Render the list based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let mut last = None;
                for e in &self.errors {
                    if last != Some(e.category) {
                        println!("{}", e.category.to_string().bold());
                        last = Some(e.category);
                    }
                    println!("  {:<40} {}", e.code, e.message);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Format minutes as `H:MM`
#[must_use]
pub fn format_minutes(minutes: i64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
