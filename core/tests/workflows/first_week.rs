// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The partial first week and the weekly rule that follows it.

use jiff::civil::date;
use termcal_core::{BreakPeriod, ScheduleCompiler};

use crate::common::{
    CourseBuilder, assert_well_formed, event_blocks, fall_semester, mwf_lecture, test_config,
    test_now,
};

#[test]
fn wednesday_start_splits_first_week_from_rule() {
    // Arrange
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());

    // Act
    let compilation = compiler
        .compile(&[mwf_lecture()], &fall_semester(false))
        .unwrap();

    // Assert
    assert_well_formed(&compilation.document);
    let blocks = event_blocks(&compilation.document);
    assert_eq!(blocks.len(), 3);

    let starts: Vec<_> = blocks.iter().map(|a| a.line("DTSTART").unwrap()).collect();
    assert_eq!(
        starts,
        [
            "DTSTART;TZID=America/Chicago:20250903T090000",
            "DTSTART;TZID=America/Chicago:20250905T090000",
            "DTSTART;TZID=America/Chicago:20250908T090000",
        ]
    );
    assert_eq!(blocks[0].value("RRULE"), None);
    assert_eq!(blocks[1].value("RRULE"), None);
    assert_eq!(
        blocks[2].value("RRULE"),
        Some("FREQ=WEEKLY;UNTIL=20251213T055959Z;BYDAY=MO,WE,FR")
    );
    assert_eq!(blocks[2].value("EXDATE"), None);
}

#[test]
fn meeting_fields_are_written_in_order() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());

    let compilation = compiler
        .compile(&[mwf_lecture()], &fall_semester(true))
        .unwrap();

    let blocks = event_blocks(&compilation.document);
    let rule = blocks.last().unwrap();
    assert_eq!(
        rule.names(),
        [
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "SUMMARY",
            "DESCRIPTION",
            "LOCATION",
            "RRULE",
            "EXDATE"
        ]
    );
    assert_eq!(rule.value("SUMMARY"), Some("CS 400"));
    assert_eq!(rule.value("DESCRIPTION"), Some("LEC - CS 400"));
    assert_eq!(rule.value("LOCATION"), Some("Room 101"));
    assert_eq!(rule.value("DTEND"), Some("20250908T095000"));
    assert_eq!(rule.value("DTSTAMP"), Some("20250820T100000"));
}

#[test]
fn shared_slot_across_sections_collapses_into_one_rule() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let course = CourseBuilder::new("CHEM 103: General Chemistry")
        .meeting("LEC", "MW 11:00 AM - 11:50 AM Chemistry 1351")
        .meeting("LEC", "F 11:00 AM - 11:50 AM Chemistry 1351")
        .meeting("LAB", "T 2:25 PM - 5:25 PM Chemistry 2381")
        .build();

    let compilation = compiler.compile(&[course], &fall_semester(false)).unwrap();

    let recurring = &compilation.schedule.recurring;
    assert_eq!(recurring.len(), 2);
    assert_eq!(recurring[0].description, "LEC - CHEM 103");
    assert_eq!(recurring[1].description, "LAB - CHEM 103");

    let blocks = event_blocks(&compilation.document);
    let rules: Vec<_> = blocks.iter().filter_map(|a| a.value("RRULE")).collect();
    assert_eq!(
        rules,
        [
            "FREQ=WEEKLY;UNTIL=20251213T055959Z;BYDAY=MO,WE,FR",
            "FREQ=WEEKLY;UNTIL=20251213T055959Z;BYDAY=TU",
        ]
    );
}

#[test]
fn tuesday_thursday_course_has_thursday_singleton_only() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let course = CourseBuilder::new("MATH 222")
        .meeting("LEC", "TR 1:00 PM - 2:15 PM Van Vleck B102")
        .build();

    let compilation = compiler.compile(&[course], &fall_semester(false)).unwrap();

    let first_week = &compilation.schedule.first_week;
    assert_eq!(first_week.len(), 1);
    assert_eq!(first_week[0].start, date(2025, 9, 4).at(13, 0, 0, 0));
    assert_eq!(
        compilation.schedule.recurring[0].start,
        date(2025, 9, 9).at(13, 0, 0, 0)
    );
}

#[test]
fn saturday_start_has_no_first_week_events() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let breaks = [
        BreakPeriod::new("Start", date(2025, 9, 6), 1),
        BreakPeriod::new("End", date(2025, 12, 12), 1),
    ];

    let compilation = compiler.compile(&[mwf_lecture()], &breaks).unwrap();

    assert!(compilation.schedule.first_week.is_empty());
    assert_eq!(compilation.schedule.recurring.len(), 1);
}

#[test]
fn meeting_order_does_not_change_the_weekly_rule() {
    let config = test_config();
    let compiler = ScheduleCompiler::new(&config, test_now());
    let friday_first = CourseBuilder::new("CS 400")
        .meeting("LEC", "F 9:00 AM - 9:50 AM Room 101")
        .meeting("LEC", "MW 9:00 AM - 9:50 AM Room 101")
        .build();
    let monday_first = CourseBuilder::new("CS 400")
        .meeting("LEC", "MW 9:00 AM - 9:50 AM Room 101")
        .meeting("LEC", "F 9:00 AM - 9:50 AM Room 101")
        .build();

    let a = compiler
        .compile(&[friday_first], &fall_semester(true))
        .unwrap();
    let b = compiler
        .compile(&[monday_first], &fall_semester(true))
        .unwrap();

    assert_eq!(a.schedule.recurring, b.schedule.recurring);
    assert_eq!(a.schedule.recurring.len(), 1);
    assert_eq!(
        a.schedule.recurring[0].start,
        date(2025, 9, 8).at(9, 0, 0, 0)
    );
    let rule = event_blocks(&a.document).pop().unwrap();
    assert_eq!(
        rule.value("RRULE"),
        Some("FREQ=WEEKLY;UNTIL=20251213T055959Z;BYDAY=MO,WE,FR")
    );
}
