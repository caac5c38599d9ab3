// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, io};

use jiff::civil;

/// Why a single meeting or exam line could not be turned into occurrences.
///
/// Every variant is local to one line. The compiler records it and moves on
/// to the next line.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A letter in the day-code prefix is not one of `M`, `T`, `W`, `R`, `F`.
    #[error("Invalid day code '{code}'")]
    InvalidDayCode {
        /// The offending letter
        code: char,
    },

    /// A meeting line does not have the `<days> <start> - <end> <location>` shape.
    #[error("Malformed meeting line: {line}")]
    MalformedMeetingLine {
        /// The normalized line
        line: String,
    },

    /// An exam line, or one of its segments, does not match the exam grammar.
    #[error("Malformed exam line: {segment}")]
    MalformedExamLine {
        /// The segment that failed to match
        segment: String,
    },

    /// The month token is not a full English month name.
    #[error("Invalid month name '{name}'")]
    InvalidMonthName {
        /// The unrecognized token
        name: String,
    },

    /// The parsed fields do not form a real calendar date or time of day.
    #[error("Invalid computed date: {reason}")]
    InvalidComputedDate {
        /// What was being constructed and why it failed
        reason: String,
    },

    /// The end time of a range is earlier than its start time.
    #[error("End time {end} is before start time {start}")]
    EndBeforeStart {
        /// Start of the range
        start: civil::Time,
        /// End of the range
        end: civil::Time,
    },
}

impl ParseError {
    pub(crate) fn invalid_date(what: &str, err: impl fmt::Display) -> Self {
        Self::InvalidComputedDate {
            reason: format!("{what}: {err}"),
        }
    }
}

/// A line that was skipped, together with the course it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Course title as given in the input
    pub course: String,

    /// The raw line that failed
    pub line: String,

    /// What went wrong
    pub error: ParseError,
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (\"{}\")", self.course, self.error, self.line)
    }
}

/// Failure of a whole compilation.
///
/// Writing to the in-memory document never fails in practice; seeing this
/// error means a contract of the formatter was broken.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The calendar could not be rendered.
    #[error("Failed to render calendar: {0}")]
    Render(#[from] io::Error),
}

/// Invalid configuration values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The timezone identifier cannot be written as a `TZID` parameter.
    #[error("Invalid timezone identifier '{0}'")]
    InvalidTimezone(String),

    /// The product identifier is empty.
    #[error("Product identifier must not be empty")]
    EmptyProductId,
}
