// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting for iCalendar values.
//!
//! This module formats the value types of RFC 5545 Section 3.3 that termcal
//! emits.

use std::io::{self, Write};

use jiff::civil;

use crate::component::DateTime;
use crate::keyword::{KW_RRULE_BYDAY, KW_RRULE_FREQ, KW_RRULE_UNTIL};
use crate::value::RecurrenceRule;

/// Format a date value as `YYYYMMDD`.
pub fn write_date<W: Write>(w: &mut W, date: civil::Date) -> io::Result<()> {
    write!(w, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Format a date-time value as `YYYYMMDDTHHMMSS`.
///
/// Sub-second precision is dropped, as RFC 5545 has none.
pub fn write_date_time<W: Write>(w: &mut W, datetime: civil::DateTime) -> io::Result<()> {
    write_date(w, datetime.date())?;
    write!(
        w,
        "T{:02}{:02}{:02}",
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    )
}

/// Format a DATE-TIME value, with a trailing `Z` for UTC.
///
/// The `TZID` of a zoned value is a parameter and is not written here.
pub fn write_date_time_value<W: Write>(w: &mut W, datetime: &DateTime) -> io::Result<()> {
    write_date_time(w, datetime.civil())?;
    if matches!(datetime, DateTime::Utc(_)) {
        write!(w, "Z")?;
    }
    Ok(())
}

/// Format a comma separated list of date-time values.
pub fn write_date_times<W: Write>(w: &mut W, values: &[civil::DateTime]) -> io::Result<()> {
    for (i, datetime) in values.iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        write_date_time(w, *datetime)?;
    }
    Ok(())
}

/// Format a recurrence rule value (RFC 5545 Section 3.3.10).
pub fn write_recurrence_rule<W: Write>(w: &mut W, rule: &RecurrenceRule) -> io::Result<()> {
    // FREQ is required
    write!(w, "{KW_RRULE_FREQ}={}", rule.freq)?;

    if let Some(until) = &rule.until {
        write!(w, ";{KW_RRULE_UNTIL}=")?;
        write_date_time_value(w, until)?;
    }

    if !rule.by_day.is_empty() {
        write!(w, ";{KW_RRULE_BYDAY}=")?;
        for (i, weekday) in rule.by_day.iter().enumerate() {
            if i > 0 {
                write!(w, ",")?;
            }
            write!(w, "{weekday}")?;
        }
    }

    Ok(())
}

/// Format a TEXT value as an iCalendar escaped string.
///
/// Special characters are escaped per RFC 5545 Section 3.3.11:
/// - Backslash → \\
/// - Semicolon → \;
/// - Comma → \,
/// - Newline → \n
#[must_use]
pub fn format_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {} // Skip CR characters
            _ => result.push(c),
        }
    }
    result
}
