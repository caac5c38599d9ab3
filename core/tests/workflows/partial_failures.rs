// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Bad or irrelevant lines never stop a compilation.

use jiff::civil::date;
use termcal_core::{ParseError, ScheduleCompiler};

use crate::common::{
    CourseBuilder, assert_well_formed, event_blocks, fall_semester, mwf_lecture, test_config,
    test_now,
};

#[test]
fn empty_input_renders_an_empty_calendar() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());

    let compilation = compiler.compile(&[], &[]).unwrap();

    assert_well_formed(&compilation.document);
    assert!(event_blocks(&compilation.document).is_empty());
    assert!(compilation.failures.is_empty());
    assert!(compilation.schedule.is_empty());
}

#[test]
fn missing_academic_calendar_uses_one_year_from_now() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, date(2025, 9, 3).at(8, 0, 0, 0));

    let compilation = compiler.compile(&[mwf_lecture()], &[]).unwrap();

    let recurrence = compilation.schedule.recurring[0]
        .recurrence
        .as_ref()
        .unwrap();
    assert_eq!(recurrence.until, date(2026, 9, 3).at(23, 59, 59, 999_000_000));
    assert_eq!(compilation.schedule.first_week.len(), 2);
}

#[test]
fn online_sections_are_skipped_without_failure() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let course = CourseBuilder::new("LIS 201")
        .meeting("LEC", "ONLINE")
        .meeting("DIS", "W 4:00 PM - 4:50 PM Online via Zoom")
        .build();

    let compilation = compiler.compile(&[course], &fall_semester(false)).unwrap();

    assert!(compilation.failures.is_empty());
    assert!(compilation.schedule.is_empty());
}

#[test]
fn invalid_lines_are_reported_and_the_rest_compiles() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let broken = CourseBuilder::new("ECON 101: Principles")
        .meeting("LEC", "MSF 9:00 AM - 9:50 AM Room 1")
        .meeting("DIS", "Tuesdays at noon")
        .exam("Dec 12, 10:05 AM - 12:05 PM")
        .exam("Decembre 12, 10:05 AM - 12:05 PM")
        .exam("February 30, 10:05 AM - 12:05 PM")
        .build();

    let compilation = compiler
        .compile(&[broken, mwf_lecture()], &fall_semester(false))
        .unwrap();

    let errors: Vec<_> = compilation.failures.iter().map(|a| &a.error).collect();
    assert_eq!(errors.len(), 5);
    assert_eq!(errors[0], &ParseError::InvalidDayCode { code: 'S' });
    assert!(matches!(errors[1], ParseError::MalformedMeetingLine { .. }));
    assert!(matches!(errors[2], ParseError::InvalidMonthName { .. }));
    assert!(matches!(errors[3], ParseError::InvalidMonthName { .. }));
    assert!(matches!(errors[4], ParseError::InvalidComputedDate { .. }));
    assert!(
        compilation
            .failures
            .iter()
            .all(|a| a.course == "ECON 101: Principles")
    );

    // The valid course is unaffected
    assert_eq!(event_blocks(&compilation.document).len(), 3);
}
