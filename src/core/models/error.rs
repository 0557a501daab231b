//! Import file error taxonomy
//!
//! Every way an import file can be rejected is one variant of
//! [`ImportFileError`]. The set is closed and each variant carries a fixed
//! human-readable message that callers surface verbatim.
//!
//! ```
//! use timesheet_import::core::models::{ErrorCategory, ImportFileError};
//!
//! let err = ImportFileError::ProjectQuoted;
//! assert_eq!(err.to_string(), "Project code must not be quoted.");
//! assert_eq!(err.code(), "PROJECT_QUOTED");
//! assert_eq!(err.category(), ErrorCategory::Project);
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// All validation errors an import file can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportFileError {
    /// No `EMP-ID` line before the first section
    #[error("Employee ID is missing.")]
    MissingEmployeeId,
    /// No `EMP-NAME` line before the first section
    #[error("Employee name is missing.")]
    MissingEmployeeName,
    /// `EMP-ID` appeared twice
    #[error("Duplicate employee ID found.")]
    DuplicateEmployeeId,
    /// `EMP-NAME` appeared twice
    #[error("Duplicate employee name found.")]
    DuplicateEmployeeName,
    /// Employee ID longer than 5 characters
    #[error("Employee ID exceeds maximum length of 5 characters.")]
    EmployeeIdTooLong,
    /// Employee name longer than 100 characters
    #[error("Employee name exceeds maximum length of 100 characters.")]
    EmployeeNameTooLong,
    /// Employee ID contains something other than ASCII digits
    #[error("Employee ID must be numeric.")]
    EmployeeIdNotNumeric,

    /// Header line without the `": "` separator
    #[error("Invalid key-value format; missing ': ' separator.")]
    InvalidKeyValueFormat,
    /// Line starts with whitespace
    #[error("Leading whitespace detected in field.")]
    LeadingWhitespace,
    /// Line ends with whitespace
    #[error("Trailing whitespace detected in field.")]
    TrailingWhitespace,
    /// Header key other than `EMP-ID` / `EMP-NAME`
    #[error("Unknown key found in the file.")]
    UnknownKey,
    /// Header value is empty
    #[error("Field value cannot be empty.")]
    EmptyValue,

    /// No `TIMESHEETS:` section in the file
    #[error("No TIMESHEETS section found in the file.")]
    MissingTimesheetSection,
    /// A section header arrived before any employee data
    #[error("TIMESHEETS section appears before employee data.")]
    TimesheetSectionBeforeEmployeeData,
    /// A section without entry lines
    #[error("TIMESHEETS section is empty.")]
    EmptyTimesheetSection,

    /// Section date is not a valid `YYYY-MM-DD` date
    #[error("Invalid date format; expected YYYY-MM-DD.")]
    InvalidDate,

    /// Entry line does not have exactly four fields
    #[error("Incorrect number of fields in time entry; expected 4 fields.")]
    IncorrectFieldCount,
    /// Entry line has an empty or whitespace-only field
    #[error("One or more fields in time entry are empty.")]
    EmptyField,

    /// Start or end time is not a valid `HH:MM` time
    #[error("Invalid time format; expected HH:MM.")]
    InvalidTime,
    /// End time lies before start time
    #[error("End time is before start time.")]
    EndTimeBeforeStartTime,

    /// Description is not wrapped in double quotes
    #[error("Description field must be enclosed in double quotes.")]
    DescriptionNotQuoted,
    /// Description longer than 200 characters
    #[error("Description exceeds maximum length of 200 characters.")]
    DescriptionTooLong,

    /// Project code longer than 20 characters
    #[error("Project code exceeds maximum length of 20 characters.")]
    ProjectTooLong,
    /// Project code wrapped in quotes
    #[error("Project code must not be quoted.")]
    ProjectQuoted,
}

/// Grouping of [`ImportFileError`] kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Employee identification
    Employee,
    /// Header line format
    FieldFormat,
    /// Section structure
    Section,
    /// Section date
    Date,
    /// Entry line structure
    EntryStructure,
    /// Start/end times
    Time,
    /// Entry description
    Description,
    /// Project code
    Project,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Employee => "employee",
            Self::FieldFormat => "field format",
            Self::Section => "section",
            Self::Date => "date",
            Self::EntryStructure => "entry structure",
            Self::Time => "time",
            Self::Description => "description",
            Self::Project => "project",
        };
        write!(f, "{s}")
    }
}

impl ImportFileError {
    /// Every error kind, in taxonomy order
    pub const ALL: [Self; 24] = [
        Self::MissingEmployeeId,
        Self::MissingEmployeeName,
        Self::DuplicateEmployeeId,
        Self::DuplicateEmployeeName,
        Self::EmployeeIdTooLong,
        Self::EmployeeNameTooLong,
        Self::EmployeeIdNotNumeric,
        Self::InvalidKeyValueFormat,
        Self::LeadingWhitespace,
        Self::TrailingWhitespace,
        Self::UnknownKey,
        Self::EmptyValue,
        Self::MissingTimesheetSection,
        Self::TimesheetSectionBeforeEmployeeData,
        Self::EmptyTimesheetSection,
        Self::InvalidDate,
        Self::IncorrectFieldCount,
        Self::EmptyField,
        Self::InvalidTime,
        Self::EndTimeBeforeStartTime,
        Self::DescriptionNotQuoted,
        Self::DescriptionTooLong,
        Self::ProjectTooLong,
        Self::ProjectQuoted,
    ];

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingEmployeeId => "MISSING_EMPLOYEE_ID",
            Self::MissingEmployeeName => "MISSING_EMPLOYEE_NAME",
            Self::DuplicateEmployeeId => "DUPLICATE_EMPLOYEE_ID",
            Self::DuplicateEmployeeName => "DUPLICATE_EMPLOYEE_NAME",
            Self::EmployeeIdTooLong => "EMPLOYEE_ID_TOO_LONG",
            Self::EmployeeNameTooLong => "EMPLOYEE_NAME_TOO_LONG",
            Self::EmployeeIdNotNumeric => "EMPLOYEE_ID_NOT_NUMERIC",
            Self::InvalidKeyValueFormat => "INVALID_KEY_VALUE_FORMAT",
            Self::LeadingWhitespace => "LEADING_WHITESPACE",
            Self::TrailingWhitespace => "TRAILING_WHITESPACE",
            Self::UnknownKey => "UNKNOWN_KEY",
            Self::EmptyValue => "EMPTY_VALUE",
            Self::MissingTimesheetSection => "MISSING_TIMESHEET_SECTION",
            Self::TimesheetSectionBeforeEmployeeData => "TIMESHEET_SECTION_BEFORE_EMPLOYEE_DATA",
            Self::EmptyTimesheetSection => "EMPTY_TIMESHEET_SECTION",
            Self::InvalidDate => "INVALID_DATE",
            Self::IncorrectFieldCount => "INCORRECT_FIELD_COUNT",
            Self::EmptyField => "EMPTY_FIELD",
            Self::InvalidTime => "INVALID_TIME",
            Self::EndTimeBeforeStartTime => "END_TIME_BEFORE_START_TIME",
            Self::DescriptionNotQuoted => "DESCRIPTION_NOT_QUOTED",
            Self::DescriptionTooLong => "DESCRIPTION_TOO_LONG",
            Self::ProjectTooLong => "PROJECT_TOO_LONG",
            Self::ProjectQuoted => "PROJECT_QUOTED",
        }
    }

    /// Which group this error belongs to
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::MissingEmployeeId
            | Self::MissingEmployeeName
            | Self::DuplicateEmployeeId
            | Self::DuplicateEmployeeName
            | Self::EmployeeIdTooLong
            | Self::EmployeeNameTooLong
            | Self::EmployeeIdNotNumeric => ErrorCategory::Employee,
            Self::InvalidKeyValueFormat
            | Self::LeadingWhitespace
            | Self::TrailingWhitespace
            | Self::UnknownKey
            | Self::EmptyValue => ErrorCategory::FieldFormat,
            Self::MissingTimesheetSection
            | Self::TimesheetSectionBeforeEmployeeData
            | Self::EmptyTimesheetSection => ErrorCategory::Section,
            Self::InvalidDate => ErrorCategory::Date,
            Self::IncorrectFieldCount | Self::EmptyField => ErrorCategory::EntryStructure,
            Self::InvalidTime | Self::EndTimeBeforeStartTime => ErrorCategory::Time,
            Self::DescriptionNotQuoted | Self::DescriptionTooLong => ErrorCategory::Description,
            Self::ProjectTooLong | Self::ProjectQuoted => ErrorCategory::Project,
        }
    }

    /// Attach a source line number
    #[must_use]
    pub const fn at_line(self, line: usize) -> ParseError {
        ParseError {
            kind: self,
            line: Some(line),
        }
    }
}

/// A rejected parse: the first violation found, and where
///
/// Displays as the kind's fixed message. The line number is kept separate so
/// the message stays stable for callers that surface it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// What went wrong
    pub kind: ImportFileError,
    /// 1-based source line, `None` when the input ended too early
    pub line: Option<usize>,
}

impl From<ImportFileError> for ParseError {
    fn from(kind: ImportFileError) -> Self {
        Self { kind, line: None }
    }
}
