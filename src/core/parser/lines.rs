//! Line splitting and cursor
//!
//! Splits raw text on `\n` or `\r\n` and drops empty lines. Lines holding
//! only whitespace are kept so the later stages can reject them.

/// A non-empty source line and its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based position in the source text
    pub number: usize,
    /// Line content without the line ending
    pub text: &'a str,
}

impl Line<'_> {
    /// Whether this line opens a timesheet section
    #[must_use]
    pub fn is_section_header(&self) -> bool {
        self.text.starts_with(super::SECTION_MARKER)
    }
}

/// Forward-only cursor over the non-empty lines of an import file
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> Lines<'a> {
    /// Split `text` into non-empty lines
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(i, text)| Line { number: i + 1, text })
            .collect();
        Self { lines, pos: 0 }
    }

    /// The line under the cursor
    #[must_use]
    pub fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    /// Move past the current line
    pub fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.lines.len());
    }

    /// Whether all lines have been consumed
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Number of non-empty lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the input had no non-empty lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
