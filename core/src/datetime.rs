// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Span, civil};

/// The last representable millisecond of a day, used as an inclusive bound.
pub const END_OF_DAY: civil::Time = civil::time(23, 59, 59, 999_000_000);

/// Move `date` by a whole number of days, `None` when leaving the supported range.
pub fn add_days(date: civil::Date, days: i64) -> Option<civil::Date> {
    let span = Span::new().try_days(days).ok()?;
    date.checked_add(span).ok()
}

/// The first date on or after `date` that falls on `weekday`.
pub fn next_on_or_after(date: civil::Date, weekday: civil::Weekday) -> Option<civil::Date> {
    let offset = i64::from(weekday.to_sunday_zero_offset() - date.weekday().to_sunday_zero_offset())
        .rem_euclid(7);
    add_days(date, offset)
}

/// The end of the Saturday closing the Sunday-first week that contains `date`.
///
/// A Saturday is its own week end.
pub fn end_of_week(date: civil::Date) -> Option<civil::DateTime> {
    next_on_or_after(date, civil::Weekday::Saturday).map(|d| d.to_datetime(END_OF_DAY))
}

/// The inclusive end of the given day.
pub fn end_of_day(date: civil::Date) -> civil::DateTime {
    date.to_datetime(END_OF_DAY)
}
