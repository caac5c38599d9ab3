// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Helpers for inspecting rendered documents

mod assertions;

#[allow(unused_imports)]
pub use assertions::{EventBlock, assert_well_formed, event_blocks};
#[allow(unused_imports)]
pub use fixtures::{
    CourseBuilder, TEST_TIMEZONE, fall_semester, mwf_lecture, test_config, test_now,
};
