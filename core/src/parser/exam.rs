// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use jiff::civil;
use regex::Regex;

use crate::error::ParseError;
use crate::parser::{Month, clock_time, normalize_whitespace};
use crate::types::ExamOccurrence;

const SEPARATOR: &str = " - ";

/// Location used when the exam line does not name one.
pub const UNANNOUNCED_LOCATION: &str = "TBA";

/// Parse an exam line such as `December 12, 10:05 AM - 12:05 PM - Room 5`.
///
/// The line carries no year. An exam in a month that is still ahead of (or
/// equal to) the month of `now` falls in the current year, otherwise in the
/// next one.
///
/// # Errors
///
/// Returns an error if a segment does not match, the month is unknown, or
/// the resulting date or time does not exist.
pub fn parse_exam(
    title: &str,
    details: &str,
    now: civil::DateTime,
) -> Result<ExamOccurrence, ParseError> {
    let line = normalize_whitespace(details);
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    let [date_part, end_part, location_parts @ ..] = parts.as_slice() else {
        return Err(ParseError::MalformedExamLine {
            segment: line.clone(),
        });
    };

    let (month, day, start) = parse_start(date_part)?;
    let end = parse_end(end_part)?;
    if end < start {
        return Err(ParseError::EndBeforeStart { start, end });
    }

    let year = if now.month() <= month.number() {
        now.year()
    } else {
        now.year() + 1
    };
    let date = civil::Date::new(year, month.number(), day)
        .map_err(|e| ParseError::invalid_date("exam date", e))?;

    let location = location_parts.join(SEPARATOR);
    let location = if location.trim().is_empty() {
        UNANNOUNCED_LOCATION.to_owned()
    } else {
        location
    };

    Ok(ExamOccurrence {
        title: title.to_owned(),
        location,
        start: date.to_datetime(start),
        end: date.to_datetime(end),
    })
}

/// Parse the `<Month> <Day>, <h:mm AM|PM>` segment.
fn parse_start(segment: &str) -> Result<(Month, i8, civil::Time), ParseError> {
    const RE: &str = r"^([A-Za-z]+) (\d{1,2}), ?(\d{1,2}):(\d{2}) ?([AaPp][Mm])$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("exam start regex must compile"));

    let captures = re
        .captures(segment)
        .ok_or_else(|| ParseError::MalformedExamLine {
            segment: segment.to_owned(),
        })?;
    let month = Month::from_name(&captures[1])?;
    let day = captures[2]
        .parse()
        .map_err(|e| ParseError::invalid_date("day of month", e))?;
    let start = clock_time(&captures[3], &captures[4], &captures[5])?;
    Ok((month, day, start))
}

/// Parse the `<h:mm AM|PM>` end segment.
fn parse_end(segment: &str) -> Result<civil::Time, ParseError> {
    const RE: &str = r"^(\d{1,2}):(\d{2}) ?([AaPp][Mm])$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("exam end regex must compile"));

    let captures = re
        .captures(segment)
        .ok_or_else(|| ParseError::MalformedExamLine {
            segment: segment.to_owned(),
        })?;
    clock_time(&captures[1], &captures[2], &captures[3])
}
