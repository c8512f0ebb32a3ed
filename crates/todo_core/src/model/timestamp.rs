//! Creation timestamp display format.
//!
//! # Responsibility
//! - Render `created_at` stamps with one fixed, locale-independent pattern.
//!
//! # Invariants
//! - Output shape: `<Month> <day><suffix> <YYYY>, <h>:<mm>:<ss> <am|pm>`.
//! - Hours are 12-hour without padding; minutes and seconds are zero-padded.

use chrono::{Datelike, NaiveDateTime};

/// Formats a local wall-clock time as a `created_at` display stamp.
///
/// Example: `2024-04-05 15:04:05` -> `April 5th 2024, 3:04:05 pm`.
pub fn format_created_at(at: &NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{} {}{} {}",
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.format("%Y, %-I:%M:%S %P")
    )
}

/// Returns the English ordinal suffix for a day of month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
