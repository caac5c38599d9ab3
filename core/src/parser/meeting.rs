// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use jiff::civil;
use regex::Regex;

use crate::datetime::next_on_or_after;
use crate::error::ParseError;
use crate::parser::{DayCode, clock_time, normalize_whitespace};
use crate::types::{MeetingKind, MeetingOccurrence};

/// Parse a weekly meeting line such as `MWF 9:00 AM - 9:50 AM Room 101`.
///
/// One occurrence is produced per listed weekday, anchored to the first such
/// day on or after `reference`. A letter repeated in the day list counts
/// once, so `MM` yields a single Monday rather than two identical
/// occurrences. Lines mentioning "online" describe no physical meeting and
/// yield nothing.
///
/// # Errors
///
/// The whole line is rejected if any day letter is unknown, the time range is
/// malformed or reversed, or a field is out of range.
pub fn parse_meeting(
    title: &str,
    kind: &MeetingKind,
    details: &str,
    reference: civil::Date,
) -> Result<Vec<MeetingOccurrence>, ParseError> {
    const RE: &str = r"^(\S+) (\d{1,2}):(\d{2}) ?([AaPp][Mm]) ?- ?(\d{1,2}):(\d{2}) ?([AaPp][Mm])(?: (.*))?$";
    static REGEX: OnceLock<Regex> = OnceLock::new();

    let line = normalize_whitespace(details);
    if line.to_ascii_lowercase().contains("online") {
        tracing::debug!(title, %line, "skipping online meeting");
        return Ok(Vec::new());
    }

    let re = REGEX.get_or_init(|| Regex::new(RE).expect("meeting regex must compile"));
    let Some(captures) = re.captures(&line) else {
        return Err(ParseError::MalformedMeetingLine { line: line.clone() });
    };

    let mut weekdays = Vec::new();
    for letter in captures[1].chars() {
        let weekday = DayCode::from_letter(letter)?.weekday();
        if !weekdays.contains(&weekday) {
            weekdays.push(weekday);
        }
    }

    let start = clock_time(&captures[2], &captures[3], &captures[4])?;
    let end = clock_time(&captures[5], &captures[6], &captures[7])?;
    if end < start {
        return Err(ParseError::EndBeforeStart { start, end });
    }

    let location = captures.get(8).map_or("", |a| a.as_str()).to_owned();
    weekdays
        .into_iter()
        .map(|weekday| {
            let anchor = next_on_or_after(reference, weekday).ok_or_else(|| {
                ParseError::InvalidComputedDate {
                    reason: format!("no {weekday:?} on or after {reference}"),
                }
            })?;
            Ok(MeetingOccurrence {
                title: title.to_owned(),
                kind: kind.clone(),
                location: location.clone(),
                weekday,
                start,
                end,
                anchor,
            })
        })
        .collect()
}
