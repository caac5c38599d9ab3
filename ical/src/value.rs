// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property value types as defined in RFC 5545 Section 3.3.

use jiff::civil;

use crate::component::DateTime;

/// Recurrence rule, RFC 5545 Section 3.3.10.
///
/// Only the rule parts termcal emits are modelled: a frequency, an optional
/// `UNTIL` bound and the `BYDAY` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Frequency of recurrence
    pub freq: RecurrenceFrequency,

    /// Last instant (inclusive) the rule may produce. UTC when the start
    /// carries a `TZID`.
    pub until: Option<DateTime>,

    /// Days of the week the rule expands to, written in the given order.
    pub by_day: Vec<WeekDay>,
}

impl RecurrenceRule {
    /// A weekly rule on the given days.
    #[must_use]
    pub fn weekly(by_day: Vec<WeekDay>) -> Self {
        Self {
            freq: RecurrenceFrequency::Weekly,
            until: None,
            by_day,
        }
    }

    /// Bound the rule with an inclusive `UNTIL`.
    #[must_use]
    pub fn until(mut self, until: DateTime) -> Self {
        self.until = Some(until);
        self
    }
}

/// Recurrence frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecurrenceFrequency {
    /// Repeats every week
    Weekly,
}

/// Day of the week, ordered from Sunday as in `BYDAY` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

impl From<civil::Weekday> for WeekDay {
    fn from(value: civil::Weekday) -> Self {
        match value {
            civil::Weekday::Sunday => WeekDay::Sunday,
            civil::Weekday::Monday => WeekDay::Monday,
            civil::Weekday::Tuesday => WeekDay::Tuesday,
            civil::Weekday::Wednesday => WeekDay::Wednesday,
            civil::Weekday::Thursday => WeekDay::Thursday,
            civil::Weekday::Friday => WeekDay::Friday,
            civil::Weekday::Saturday => WeekDay::Saturday,
        }
    }
}

impl From<WeekDay> for civil::Weekday {
    fn from(value: WeekDay) -> Self {
        match value {
            WeekDay::Sunday => civil::Weekday::Sunday,
            WeekDay::Monday => civil::Weekday::Monday,
            WeekDay::Tuesday => civil::Weekday::Tuesday,
            WeekDay::Wednesday => civil::Weekday::Wednesday,
            WeekDay::Thursday => civil::Weekday::Thursday,
            WeekDay::Friday => civil::Weekday::Friday,
            WeekDay::Saturday => civil::Weekday::Saturday,
        }
    }
}
