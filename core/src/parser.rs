// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the schedule lines a course page lists.
//!
//! Two line shapes are understood: weekly meetings such as
//! `MWF 9:00 AM - 9:50 AM Room 101`, and exams such as
//! `December 12, 10:05 AM - 12:05 PM - Room 5`. Each line is parsed on its
//! own; a failure affects only that line.

mod exam;
mod meeting;

use jiff::civil;

use crate::error::ParseError;

pub use exam::parse_exam;
pub use meeting::parse_meeting;

/// The single-letter weekday codes used in meeting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCode {
    /// `M`
    Monday,
    /// `T`
    Tuesday,
    /// `W`
    Wednesday,
    /// `R`
    Thursday,
    /// `F`
    Friday,
}

impl DayCode {
    /// Look up a day letter. Only uppercase letters are codes.
    pub fn from_letter(letter: char) -> Result<Self, ParseError> {
        match letter {
            'M' => Ok(Self::Monday),
            'T' => Ok(Self::Tuesday),
            'W' => Ok(Self::Wednesday),
            'R' => Ok(Self::Thursday),
            'F' => Ok(Self::Friday),
            code => Err(ParseError::InvalidDayCode { code }),
        }
    }

    /// The weekday this code stands for.
    pub const fn weekday(self) -> civil::Weekday {
        match self {
            Self::Monday => civil::Weekday::Monday,
            Self::Tuesday => civil::Weekday::Tuesday,
            Self::Wednesday => civil::Weekday::Wednesday,
            Self::Thursday => civil::Weekday::Thursday,
            Self::Friday => civil::Weekday::Friday,
        }
    }
}

/// Full English month names as they appear in exam lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::EnumString)]
#[strum(ascii_case_insensitive)]
#[repr(i8)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Look up a month name.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        name.parse().map_err(|_| ParseError::InvalidMonthName {
            name: name.to_owned(),
        })
    }

    /// The month number, 1 through 12.
    pub const fn number(self) -> i8 {
        self as i8
    }
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build a time of day from 12-hour clock fields.
fn clock_time(hour: &str, minute: &str, meridiem: &str) -> Result<civil::Time, ParseError> {
    let hour: i8 = hour
        .parse()
        .map_err(|e| ParseError::invalid_date("hour", e))?;
    let minute: i8 = minute
        .parse()
        .map_err(|e| ParseError::invalid_date("minute", e))?;
    if !(1..=12).contains(&hour) {
        return Err(ParseError::InvalidComputedDate {
            reason: format!("hour {hour} is not on a 12-hour clock"),
        });
    }

    let pm = meridiem.eq_ignore_ascii_case("PM");
    let hour = hour % 12 + if pm { 12 } else { 0 };
    civil::Time::new(hour, minute, 0, 0).map_err(|e| ParseError::invalid_date("time of day", e))
}
