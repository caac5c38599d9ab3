// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Represent and write the iCalendar (RFC 5545) subset used by termcal.
//!
//! Only generation is supported: a calendar is built from [`ICalendar`] and
//! [`VEvent`] values and rendered with [`formatter::format`].

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

pub mod component;
pub mod formatter;
pub mod keyword;
pub mod value;

pub use crate::component::{DateTime, ExDate, ICalendar, VEvent};
pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
pub use crate::value::{RecurrenceFrequency, RecurrenceRule, WeekDay};
