// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil;

use crate::breaks::SemesterWindow;
use crate::datetime::{add_days, end_of_day, end_of_week, next_on_or_after};
use crate::group::RecurrenceGroup;
use crate::types::{ExamOccurrence, MeetingOccurrence};

/// A calendar event ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledEvent {
    /// Event title
    pub summary: String,
    /// Longer event text
    pub description: String,
    /// Room
    pub location: String,
    /// Start of the first occurrence
    pub start: civil::DateTime,
    /// End of the first occurrence
    pub end: civil::DateTime,
    /// Weekly repetition, `None` for one-off events
    pub recurrence: Option<Recurrence>,
}

impl CompiledEvent {
    fn meeting(occurrence: &MeetingOccurrence, start: civil::DateTime, end: civil::DateTime) -> Self {
        Self {
            summary: occurrence.title.clone(),
            description: format!("{} - {}", occurrence.kind, occurrence.title),
            location: occurrence.location.clone(),
            start,
            end,
            recurrence: None,
        }
    }

    fn exam(exam: &ExamOccurrence) -> Self {
        Self {
            summary: format!("{} FINAL EXAM", exam.title),
            description: format!("Final exam for {}", exam.title),
            location: exam.location.clone(),
            start: exam.start,
            end: exam.end,
            recurrence: None,
        }
    }
}

/// Weekly repetition of a [`CompiledEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    /// Days the event repeats on, Sunday first
    pub weekdays: Vec<civil::Weekday>,
    /// Inclusive end of the repetition
    pub until: civil::DateTime,
    /// Cancelled occurrences, sorted and distinct
    pub exceptions: Vec<civil::DateTime>,
}

/// The events of a semester in the order they are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledSchedule {
    /// One-off meetings of the partial first week
    pub first_week: Vec<CompiledEvent>,
    /// One weekly event per slot, from the second week on
    pub recurring: Vec<CompiledEvent>,
    /// Final exams
    pub exams: Vec<CompiledEvent>,
}

impl CompiledSchedule {
    /// All events in output order.
    pub fn events(&self) -> impl Iterator<Item = &CompiledEvent> {
        self.first_week
            .iter()
            .chain(&self.recurring)
            .chain(&self.exams)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.first_week.len() + self.recurring.len() + self.exams.len()
    }

    /// Whether there are no events at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compile meetings, slot groups and exams into calendar events.
///
/// The first week of the semester, which usually starts mid-week, is
/// written as one-off events on each occurrence's anchor date. Occurrences
/// are expected to be anchored to the semester start. Every slot then repeats weekly from the
/// following Sunday through the last day of the semester, skipping break
/// days.
pub fn compile_recurrences(
    window: &SemesterWindow,
    groups: &[RecurrenceGroup],
    occurrences: &[MeetingOccurrence],
    exams: &[ExamOccurrence],
) -> CompiledSchedule {
    let Some(first_week_end) = end_of_week(window.start) else {
        tracing::warn!(start = %window.start, "semester start out of range, only exams are written");
        return CompiledSchedule {
            exams: exams.iter().map(CompiledEvent::exam).collect(),
            ..CompiledSchedule::default()
        };
    };
    let second_week = add_days(first_week_end.date(), 1);
    let until = end_of_day(window.end);

    let first_week = occurrences
        .iter()
        .filter_map(|occurrence| {
            let start = occurrence.anchor.to_datetime(occurrence.start);
            (occurrence.anchor >= window.start && start <= first_week_end).then(|| {
                let end = occurrence.anchor.to_datetime(occurrence.end);
                CompiledEvent::meeting(occurrence, start, end)
            })
        })
        .collect();

    let recurring = match second_week {
        Some(second_week) => groups
            .iter()
            .filter_map(|group| compile_group(group, second_week, until, window))
            .collect(),
        None => Vec::new(),
    };

    let schedule = CompiledSchedule {
        first_week,
        recurring,
        exams: exams.iter().map(CompiledEvent::exam).collect(),
    };
    tracing::debug!(
        first_week = schedule.first_week.len(),
        recurring = schedule.recurring.len(),
        exams = schedule.exams.len(),
        "compiled schedule"
    );
    schedule
}

fn compile_group(
    group: &RecurrenceGroup,
    second_week: civil::Date,
    until: civil::DateTime,
    window: &SemesterWindow,
) -> Option<CompiledEvent> {
    let sample = group.sample()?;
    let weekdays = group.weekdays();
    let first = next_on_or_after(second_week, *weekdays.first()?)?;

    let mut exceptions = BTreeSet::new();
    for &weekday in &weekdays {
        let mut date = next_on_or_after(second_week, weekday);
        while let Some(day) = date.filter(|d| d.to_datetime(group.key.start) <= until) {
            if window.is_break(day) {
                exceptions.insert(day.to_datetime(group.key.start));
            }
            date = add_days(day, 7);
        }
    }

    let mut event = CompiledEvent::meeting(
        sample,
        first.to_datetime(group.key.start),
        first.to_datetime(group.key.end),
    );
    event.recurrence = Some(Recurrence {
        weekdays,
        until,
        exceptions: exceptions.into_iter().collect(),
    });
    Some(event)
}
