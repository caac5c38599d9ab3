// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::{Timestamp, civil, tz::TimeZone};
use serde::de;

/// Everything the scraper hands over for one schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ScheduleInput {
    /// Courses in page order.
    pub courses: Vec<CourseBlock>,

    /// Semester start marker, interior breaks, semester end marker.
    pub breaks: Vec<BreakPeriod>,
}

/// One course as listed on the schedule page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CourseBlock {
    /// Course heading, e.g. `CS 400: Programming III`.
    pub title: String,

    /// Weekly meeting sections.
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,

    /// Raw exam lines.
    #[serde(default)]
    pub exams: Vec<String>,
}

impl CourseBlock {
    /// The course code used as event title: the heading up to the first `": "`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.title
            .split_once(": ")
            .map_or(self.title.as_str(), |(code, _)| code)
            .trim()
    }
}

/// A meeting section label together with its schedule line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RawMeeting {
    /// Section label such as `LEC` or `DIS`.
    pub kind: String,

    /// Schedule line such as `MWF 9:00 AM - 9:50 AM Room 101`.
    pub details: String,
}

/// A named period on the academic calendar.
///
/// The first period of a list marks the semester start and the last one the
/// semester end; periods in between are breaks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct BreakPeriod {
    /// Display name, e.g. `Thanksgiving recess`.
    pub name: String,

    /// First day of the period.
    #[serde(deserialize_with = "deserialize_anchor_date")]
    pub date: civil::Date,

    /// Number of days covered. Values below 1 count as 1.
    #[serde(default = "default_length")]
    pub length: i64,
}

impl BreakPeriod {
    /// Create a period starting at `date`.
    pub fn new(name: impl Into<String>, date: civil::Date, length: i64) -> Self {
        Self {
            name: name.into(),
            date,
            length,
        }
    }
}

const fn default_length() -> i64 {
    1
}

/// Parse the calendar date of an ISO-8601 date, date-time or instant.
///
/// Instants (with `Z` or an offset) are read in UTC.
///
/// # Errors
///
/// Returns the date parse error if none of the forms match.
pub fn parse_anchor_date(s: &str) -> Result<civil::Date, jiff::Error> {
    let s = s.trim();
    s.parse::<civil::Date>()
        .or_else(|_| s.parse::<civil::DateTime>().map(|dt| dt.date()))
        .or_else(|err| match s.parse::<Timestamp>() {
            Ok(ts) => Ok(ts.to_zoned(TimeZone::UTC).date()),
            Err(_) => Err(err),
        })
}

fn deserialize_anchor_date<'de, D>(deserializer: D) -> Result<civil::Date, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct AnchorDateVisitor;

    impl de::Visitor<'_> for AnchorDateVisitor {
        type Value = civil::Date;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str(
                r#"an ISO-8601 date like "2025-09-03", "2025-09-03T00:00:00" or "2025-09-03T05:00:00Z""#,
            )
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_anchor_date(value).map_err(|e| de::Error::custom(e.to_string()))
        }
    }

    deserializer.deserialize_str(AnchorDateVisitor)
}

/// The kind of a course section, parsed from its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MeetingKind {
    /// A lecture section
    #[strum(serialize = "LEC", serialize = "LECTURE")]
    Lecture,

    /// A discussion section
    #[strum(serialize = "DIS", serialize = "DISCUSSION")]
    Discussion,

    /// A laboratory section
    #[strum(serialize = "LAB", serialize = "LABORATORY")]
    Lab,

    /// A seminar section
    #[strum(serialize = "SEM", serialize = "SEMINAR")]
    Seminar,

    /// Any other label, kept verbatim
    #[strum(default)]
    Other(String),
}

impl MeetingKind {
    /// Parse a section label, keeping unknown labels as [`MeetingKind::Other`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        label
            .parse()
            .unwrap_or_else(|_| Self::Other(label.to_owned()))
    }
}

impl fmt::Display for MeetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lecture => f.write_str("LEC"),
            Self::Discussion => f.write_str("DIS"),
            Self::Lab => f.write_str("LAB"),
            Self::Seminar => f.write_str("SEM"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// One weekly meeting of a course on one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingOccurrence {
    /// Course code
    pub title: String,
    /// Section kind
    pub kind: MeetingKind,
    /// Room as written on the schedule
    pub location: String,
    /// Day of the week the meeting takes place
    pub weekday: civil::Weekday,
    /// Start time of day
    pub start: civil::Time,
    /// End time of day
    pub end: civil::Time,
    /// First date on or after the reference date falling on `weekday`
    pub anchor: civil::Date,
}

/// A final exam at one absolute local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamOccurrence {
    /// Course code
    pub title: String,
    /// Exam room, `TBA` when not announced
    pub location: String,
    /// Start of the exam
    pub start: civil::DateTime,
    /// End of the exam
    pub end: civil::DateTime,
}
