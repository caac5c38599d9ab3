// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Compile course schedules into recurring iCalendar events.
//!
//! A schedule is a list of courses, each with raw meeting and exam lines,
//! plus the academic calendar as named periods. [`ScheduleCompiler`] turns
//! them into an RFC 5545 document with one-off events for the first partial
//! week, one weekly rule per course time slot, and exceptions for break
//! days.

mod breaks;
mod calendar;
mod compiler;
mod config;
mod datetime;
mod error;
mod group;
mod parser;
mod recurrence;
mod types;

pub use crate::breaks::{SemesterWindow, resolve_breaks};
pub use crate::calendar::{build_calendar, render_schedule};
pub use crate::compiler::{Compilation, ScheduleCompiler};
pub use crate::config::{APP_NAME, Config, DEFAULT_PRODUCT_ID, DEFAULT_TIMEZONE};
pub use crate::error::{CompileError, ConfigError, ItemFailure, ParseError};
pub use crate::group::{RecurrenceGroup, SlotKey, group_by_slot};
pub use crate::parser::{DayCode, Month, normalize_whitespace, parse_exam, parse_meeting};
pub use crate::recurrence::{CompiledEvent, CompiledSchedule, Recurrence, compile_recurrences};
pub use crate::types::{
    BreakPeriod, CourseBlock, ExamOccurrence, MeetingKind, MeetingOccurrence, RawMeeting,
    ScheduleInput, parse_anchor_date,
};
