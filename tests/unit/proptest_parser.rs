//! Property-based tests for the parser
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use timesheet_import::core::parser::parse_timesheet;

use crate::common::with_header;

/// A valid entry line: ordered times, a quote-free description, a short code
fn entry_line() -> impl Strategy<Value = (String, String)> {
    (0u32..24, 0u32..60, 0u32..24, 0u32..60, "[a-zA-Z ]{0,30}", "[A-Z][A-Z0-9]{0,7}").prop_map(
        |(h1, m1, h2, m2, description, code)| {
            let (start, end) = if (h1, m1) <= (h2, m2) {
                ((h1, m1), (h2, m2))
            } else {
                ((h2, m2), (h1, m1))
            };
            let line = format!(
                "{:02}:{:02};{:02}:{:02};\"{description}\";{code}",
                start.0, start.1, end.0, end.1
            );
            (line, code)
        },
    )
}

proptest! {
    /// Every valid entry line yields exactly one entry, in source order
    #[test]
    fn valid_entries_are_kept_in_order(lines in prop::collection::vec(entry_line(), 1..20)) {
        let body: String = lines.iter().map(|(l, _)| format!("{l}\n")).collect();
        let text = with_header(&format!("TIMESHEETS: 2024-03-01\n{body}"));

        let parsed = parse_timesheet(&text, &[], &[]).unwrap();
        prop_assert_eq!(parsed.entries().len(), lines.len());

        for (entry, (_, code)) in parsed.entries().iter().zip(&lines) {
            prop_assert_eq!(&parsed.project(entry.project).project_code, code);
            prop_assert!(entry.start_time <= entry.end_time);
        }

        let numbers: Vec<usize> = parsed.entries().iter().map(|e| e.line).collect();
        let expected: Vec<usize> = (4..4 + lines.len()).collect();
        prop_assert_eq!(numbers, expected);
    }

    /// Entries with equal codes share a handle; distinct codes never do
    #[test]
    fn project_handles_follow_codes(lines in prop::collection::vec(entry_line(), 1..20)) {
        let body: String = lines.iter().map(|(l, _)| format!("{l}\n")).collect();
        let text = with_header(&format!("TIMESHEETS: 2024-03-01\n{body}"));
        let parsed = parse_timesheet(&text, &[], &[]).unwrap();

        let entries = parsed.entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                let same_code = parsed.project(a.project) == parsed.project(b.project);
                prop_assert_eq!(same_code, a.project == b.project);
            }
        }

        let mut codes: Vec<&str> = lines.iter().map(|(_, c)| c.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        prop_assert_eq!(parsed.created_projects().count(), codes.len());
    }

    /// A valid file with an appended malformed line is always rejected
    #[test]
    fn trailing_garbage_rejects_file(
        lines in prop::collection::vec(entry_line(), 1..10),
        garbage in "[a-z]{1,10}"
    ) {
        let body: String = lines.iter().map(|(l, _)| format!("{l}\n")).collect();
        let text = with_header(&format!("TIMESHEETS: 2024-03-01\n{body}{garbage}\n"));
        let err = parse_timesheet(&text, &[], &[]).unwrap_err();
        prop_assert_eq!(err.line, Some(4 + lines.len()));
    }
}
