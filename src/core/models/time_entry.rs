//! Time entry model
//!
//! One parsed entry line: a time span on a section date, booked against a
//! project.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::Serialize;

use super::ProjectHandle;

/// Maximum length of an entry description (quotes excluded)
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A single time entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    /// Date of the enclosing `TIMESHEETS:` section
    pub date: NaiveDate,

    /// Start of the span
    pub start_time: NaiveTime,

    /// End of the span, never before `start_time`
    pub end_time: NaiveTime,

    /// Description with the surrounding quotes removed
    pub description: String,

    /// Project this entry is booked against
    pub project: ProjectHandle,

    /// 1-based line in the source text
    pub line: usize,
}

impl TimeEntry {
    /// Length of the span
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}
