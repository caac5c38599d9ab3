// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil;

use crate::datetime::add_days;
use crate::types::BreakPeriod;

/// The teaching window of a semester and the days inside it without classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterWindow {
    /// First day of the semester.
    pub start: civil::Date,

    /// Last day of the semester.
    pub end: civil::Date,

    /// Days covered by interior breaks.
    pub break_days: BTreeSet<civil::Date>,
}

impl SemesterWindow {
    /// Whether classes are cancelled on `date`.
    #[must_use]
    pub fn is_break(&self, date: civil::Date) -> bool {
        self.break_days.contains(&date)
    }
}

/// Resolve the semester window from the academic calendar entries.
///
/// The first entry marks the start and the last one the end; every entry in
/// between is expanded into `length` consecutive break days. An empty list
/// yields a one-year window starting at `today` with no breaks.
#[tracing::instrument(skip(periods), fields(periods = periods.len()))]
pub fn resolve_breaks(periods: &[BreakPeriod], today: civil::Date) -> SemesterWindow {
    let (Some(first), Some(last)) = (periods.first(), periods.last()) else {
        let end = today
            .checked_add(jiff::Span::new().years(1))
            .unwrap_or(civil::Date::MAX);
        tracing::debug!(%today, %end, "no academic calendar, using one year from today");
        return SemesterWindow {
            start: today,
            end,
            break_days: BTreeSet::new(),
        };
    };

    let mut break_days = BTreeSet::new();
    if periods.len() > 2 {
        for period in &periods[1..periods.len() - 1] {
            for offset in 0..period.length.max(1) {
                match add_days(period.date, offset) {
                    Some(day) => {
                        break_days.insert(day);
                    }
                    None => break,
                }
            }
        }
    }

    let window = SemesterWindow {
        start: first.date,
        end: last.date,
        break_days,
    };
    tracing::debug!(
        start = %window.start,
        end = %window.end,
        break_days = window.break_days.len(),
        "resolved semester window"
    );
    window
}
