// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Breaks turn into per-occurrence exceptions of weekly rules.

use jiff::civil::date;
use termcal_core::{BreakPeriod, ScheduleCompiler};

use crate::common::{CourseBuilder, event_blocks, fall_semester, mwf_lecture, test_config, test_now};

#[test]
fn fall_break_cancels_matching_weekdays() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());

    let compilation = compiler
        .compile(&[mwf_lecture()], &fall_semester(true))
        .unwrap();

    let blocks = event_blocks(&compilation.document);
    let rule = blocks.last().unwrap();
    assert_eq!(
        rule.line("EXDATE"),
        Some("EXDATE;TZID=America/Chicago:20250915T090000,20250917T090000,20250919T090000")
    );
}

#[test]
fn exceptions_use_each_rule_start_time() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let course = CourseBuilder::new("CS 400")
        .meeting("LEC", "MWF 9:00 AM - 9:50 AM Room 101")
        .meeting("DIS", "T 3:30 PM - 4:20 PM Room 102")
        .build();

    let compilation = compiler.compile(&[course], &fall_semester(true)).unwrap();

    let recurring = &compilation.schedule.recurring;
    let discussion = recurring[1].recurrence.as_ref().unwrap();
    assert_eq!(
        discussion.exceptions,
        [date(2025, 9, 16).at(15, 30, 0, 0)]
    );
}

#[test]
fn breaks_outside_the_rule_leave_no_exceptions() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let breaks = [
        BreakPeriod::new("Start", date(2025, 9, 3), 1),
        // Saturday and Sunday only
        BreakPeriod::new("Homecoming", date(2025, 10, 18), 2),
        BreakPeriod::new("End", date(2025, 12, 12), 1),
    ];

    let compilation = compiler.compile(&[mwf_lecture()], &breaks).unwrap();

    let blocks = event_blocks(&compilation.document);
    assert!(blocks.iter().all(|a| a.value("EXDATE").is_none()));
}

#[test]
fn thanksgiving_and_fall_break_accumulate() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let breaks = [
        BreakPeriod::new("Start", date(2025, 9, 3), 1),
        BreakPeriod::new("Fall break", date(2025, 9, 15), 5),
        BreakPeriod::new("Thanksgiving", date(2025, 11, 27), 4),
        BreakPeriod::new("End", date(2025, 12, 12), 1),
    ];

    let compilation = compiler.compile(&[mwf_lecture()], &breaks).unwrap();

    let recurrence = compilation.schedule.recurring[0]
        .recurrence
        .as_ref()
        .unwrap();
    assert_eq!(
        recurrence.exceptions,
        [
            date(2025, 9, 15).at(9, 0, 0, 0),
            date(2025, 9, 17).at(9, 0, 0, 0),
            date(2025, 9, 19).at(9, 0, 0, 0),
            date(2025, 11, 28).at(9, 0, 0, 0),
        ]
    );
}
