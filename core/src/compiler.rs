// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil;

use crate::breaks::resolve_breaks;
use crate::calendar::render_schedule;
use crate::config::Config;
use crate::error::{CompileError, ItemFailure, ParseError};
use crate::group::group_by_slot;
use crate::parser::{parse_exam, parse_meeting};
use crate::recurrence::{CompiledSchedule, compile_recurrences};
use crate::types::{BreakPeriod, CourseBlock, ExamOccurrence, MeetingKind, MeetingOccurrence};

/// The outcome of compiling a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// The iCalendar document.
    pub document: String,

    /// The events written to the document.
    pub schedule: CompiledSchedule,

    /// Lines that were skipped, in input order.
    pub failures: Vec<ItemFailure>,
}

/// Compiles course schedules into iCalendar documents.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleCompiler<'a> {
    config: &'a Config,
    now: civil::DateTime,
}

impl<'a> ScheduleCompiler<'a> {
    /// Create a compiler. `now` is used for exam years, the fallback
    /// semester window and `DTSTAMP`.
    pub fn new(config: &'a Config, now: civil::DateTime) -> Self {
        Self { config, now }
    }

    /// Compile courses and the academic calendar into a document.
    ///
    /// Lines that cannot be parsed are reported in
    /// [`Compilation::failures`] and do not stop the compilation.
    ///
    /// # Errors
    ///
    /// Returns an error only if the document cannot be rendered.
    #[tracing::instrument(skip_all, fields(courses = courses.len(), breaks = breaks.len()))]
    pub fn compile(
        &self,
        courses: &[CourseBlock],
        breaks: &[BreakPeriod],
    ) -> Result<Compilation, CompileError> {
        let window = resolve_breaks(breaks, self.now.date());

        let mut meetings: Vec<MeetingOccurrence> = Vec::new();
        let mut exams: Vec<ExamOccurrence> = Vec::new();
        let mut failures = Vec::new();
        for course in courses {
            let code = course.code();
            for meeting in &course.meetings {
                if meeting.kind.trim().is_empty() || meeting.details.trim().is_empty() {
                    tracing::debug!(course = %course.title, "skipping empty meeting");
                    continue;
                }

                let kind = MeetingKind::from_label(&meeting.kind);
                match parse_meeting(code, &kind, &meeting.details, window.start) {
                    Ok(occurrences) => meetings.extend(occurrences),
                    Err(error) => failures.push(failure(course, &meeting.details, error)),
                }
            }

            for line in course.exams.iter().filter(|a| !a.trim().is_empty()) {
                match parse_exam(code, line, self.now) {
                    Ok(exam) => exams.push(exam),
                    Err(error) => failures.push(failure(course, line, error)),
                }
            }
        }
        tracing::debug!(
            meetings = meetings.len(),
            exams = exams.len(),
            failures = failures.len(),
            "parsed schedule lines"
        );

        let groups = group_by_slot(&meetings);
        let schedule = compile_recurrences(&window, &groups, &meetings, &exams);
        let document = render_schedule(&schedule, self.config, self.now)?;
        Ok(Compilation {
            document,
            schedule,
            failures,
        })
    }
}

fn failure(course: &CourseBlock, line: &str, error: ParseError) -> ItemFailure {
    tracing::warn!(course = %course.title, line, %error, "skipping line");
    ItemFailure {
        course: course.title.clone(),
        line: line.to_owned(),
        error,
    }
}
