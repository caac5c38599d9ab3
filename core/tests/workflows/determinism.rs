// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Output depends only on the input and the reference time.

use std::collections::HashSet;

use termcal_core::{Config, ScheduleCompiler, ScheduleInput};

use crate::common::{CourseBuilder, event_blocks, fall_semester, mwf_lecture, test_config, test_now};

fn input() -> ScheduleInput {
    ScheduleInput {
        courses: vec![
            mwf_lecture(),
            CourseBuilder::new("MATH 222: Calculus")
                .meeting("LEC", "TR 1:00 PM - 2:15 PM Van Vleck B102")
                .meeting("DIS", "F 8:50 AM - 9:40 AM Van Vleck B223")
                .exam("December 15, 7:25 PM - 9:25 PM - Social Sciences 5206")
                .build(),
        ],
        breaks: fall_semester(true),
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let config = test_config();
    let input = input();

    let first = ScheduleCompiler::new(&config, test_now())
        .compile(&input.courses, &input.breaks)
        .unwrap();
    let second = ScheduleCompiler::new(&config, test_now())
        .compile(&input.courses, &input.breaks)
        .unwrap();

    assert_eq!(first.document, second.document);
}

#[test]
fn uids_are_unique_within_a_document() {
    let config = test_config();
    let input = input();

    let compilation = ScheduleCompiler::new(&config, test_now())
        .compile(&input.courses, &input.breaks)
        .unwrap();

    let blocks = event_blocks(&compilation.document);
    let uids: HashSet<_> = blocks.iter().map(|a| a.value("UID").unwrap()).collect();
    assert_eq!(uids.len(), blocks.len());
}

#[test]
fn unfolded_output_has_the_same_content() {
    let input = input();
    let folded_config = test_config();
    let unfolded_config = Config {
        fold_lines: false,
        ..test_config()
    };

    let folded = ScheduleCompiler::new(&folded_config, test_now())
        .compile(&input.courses, &input.breaks)
        .unwrap();
    let unfolded = ScheduleCompiler::new(&unfolded_config, test_now())
        .compile(&input.courses, &input.breaks)
        .unwrap();

    assert_eq!(folded.document.replace("\r\n ", ""), unfolded.document);
}

#[test]
fn input_parses_from_json() {
    let json = r#"{
        "courses": [{
            "title": "CS 400: Programming III",
            "meetings": [{"kind": "LEC", "details": "MWF 9:00 AM - 9:50 AM Room 101"}]
        }],
        "breaks": [
            {"name": "Instruction begins", "date": "2025-09-03T05:00:00Z"},
            {"name": "Fall break", "date": "2025-09-15", "length": 5},
            {"name": "Last class day", "date": "2025-12-12"}
        ]
    }"#;
    let parsed: ScheduleInput = serde_json::from_str(json).unwrap();
    let expected = ScheduleInput {
        courses: vec![mwf_lecture()],
        breaks: fall_semester(true),
    };

    let config = test_config();
    let from_json = ScheduleCompiler::new(&config, test_now())
        .compile(&parsed.courses, &parsed.breaks)
        .unwrap();
    let from_fixture = ScheduleCompiler::new(&config, test_now())
        .compile(&expected.courses, &expected.breaks)
        .unwrap();
    assert_eq!(from_json.document, from_fixture.document);
}
