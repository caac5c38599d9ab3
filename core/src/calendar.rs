// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use jiff::{civil, tz::TimeZone};
use termcal_ical::{DateTime, ExDate, FormatOptions, ICalendar, RecurrenceRule, VEvent, WeekDay};
use uuid::Uuid;

use crate::config::Config;
use crate::recurrence::{CompiledEvent, CompiledSchedule};

/// Name space of the UUIDs identifying generated events.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x5c1c_7a8e_2f4b_5d3a_9e61_0b7d_c4a2_f839);

/// Which list of a [`CompiledSchedule`] an event comes from.
#[derive(Debug, Clone, Copy)]
enum Section {
    FirstWeek,
    Recurring,
    Exam,
}

impl Section {
    const fn as_str(self) -> &'static str {
        match self {
            Self::FirstWeek => "first-week",
            Self::Recurring => "recurring",
            Self::Exam => "exam",
        }
    }
}

/// Render a compiled schedule as an iCalendar document.
///
/// Every time is tagged with the configured timezone, and `DTSTAMP` is
/// `now`. Identical input yields an identical document.
pub fn render_schedule(
    schedule: &CompiledSchedule,
    config: &Config,
    now: civil::DateTime,
) -> io::Result<String> {
    let calendar = build_calendar(schedule, config, now);
    let options = if config.fold_lines {
        FormatOptions::default()
    } else {
        FormatOptions::default().folding(None)
    };
    options.write_to_string(&calendar)
}

/// Build the calendar model for a compiled schedule.
pub fn build_calendar(
    schedule: &CompiledSchedule,
    config: &Config,
    now: civil::DateTime,
) -> ICalendar {
    let tz_id = config.timezone();
    let sections = [
        (Section::FirstWeek, &schedule.first_week),
        (Section::Recurring, &schedule.recurring),
        (Section::Exam, &schedule.exams),
    ];

    let mut calendar = ICalendar::new(config.product_id.as_str());
    for (section, events) in sections {
        for (ordinal, event) in events.iter().enumerate() {
            calendar
                .events
                .push(to_vevent(event, section, ordinal, tz_id, now));
        }
    }
    calendar
}

fn to_vevent(
    event: &CompiledEvent,
    section: Section,
    ordinal: usize,
    tz_id: &str,
    now: civil::DateTime,
) -> VEvent {
    let zoned = |date_time: civil::DateTime| DateTime::Zoned {
        tz_id: tz_id.to_owned(),
        date_time,
    };

    let (rrule, ex_dates) = match &event.recurrence {
        Some(recurrence) => {
            let by_day = recurrence
                .weekdays
                .iter()
                .map(|&a| WeekDay::from(a))
                .collect();
            let ex_dates = ExDate {
                tz_id: Some(tz_id.to_owned()),
                values: recurrence.exceptions.clone(),
            };
            (
                Some(
                    RecurrenceRule::weekly(by_day).until(until_value(tz_id, recurrence.until)),
                ),
                Some(ex_dates),
            )
        }
        None => (None, None),
    };

    VEvent {
        uid: event_uid(event, section, ordinal),
        dt_stamp: DateTime::Floating(now),
        dt_start: zoned(event.start),
        dt_end: Some(zoned(event.end)),
        summary: Some(event.summary.clone()),
        description: Some(event.description.clone()),
        location: Some(event.location.clone()),
        rrule,
        ex_dates,
    }
}

/// `UNTIL` must be UTC when `DTSTART` carries a `TZID`. An identifier jiff
/// cannot resolve leaves it as wall-clock time.
fn until_value(tz_id: &str, until: civil::DateTime) -> DateTime {
    match TimeZone::get(tz_id).and_then(|tz| until.to_zoned(tz)) {
        Ok(zoned) => DateTime::Utc(zoned.with_time_zone(TimeZone::UTC).datetime()),
        Err(e) => {
            tracing::warn!(tz_id, error = %e, "unknown timezone, writing UNTIL as local time");
            DateTime::Floating(until)
        }
    }
}

fn event_uid(event: &CompiledEvent, section: Section, ordinal: usize) -> String {
    let name = format!(
        "{}/{ordinal}/{}/{}",
        section.as_str(),
        event.summary,
        event.start
    );
    Uuid::new_v5(&UID_NAMESPACE, name.as_bytes()).to_string()
}
