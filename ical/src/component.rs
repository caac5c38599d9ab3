// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar components as defined in RFC 5545 Section 3.6.

use jiff::civil;

use crate::keyword::{KW_CALSCALE_GREGORIAN, KW_METHOD_PUBLISH, KW_VERSION_2_0};
use crate::value::RecurrenceRule;

/// Main iCalendar object that contains components and properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// Product identifier that generated the iCalendar data
    pub prod_id: String,

    /// Version of iCalendar specification
    pub version: String,

    /// Calendar scale (usually GREGORIAN)
    pub calscale: Option<String>,

    /// Method for the iCalendar object (e.g., PUBLISH, REQUEST)
    pub method: Option<String>,

    /// Event components, written in order.
    pub events: Vec<VEvent>,
}

impl ICalendar {
    /// A published Gregorian calendar with no events.
    #[must_use]
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            version: KW_VERSION_2_0.to_owned(),
            calscale: Some(KW_CALSCALE_GREGORIAN.to_owned()),
            method: Some(KW_METHOD_PUBLISH.to_owned()),
            events: Vec::new(),
        }
    }
}

/// Event component (VEVENT)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    /// Unique identifier for the event
    pub uid: String,

    /// Date/time the event was created
    pub dt_stamp: DateTime,

    /// Date/time the event starts
    pub dt_start: DateTime,

    /// Date/time the event ends
    pub dt_end: Option<DateTime>,

    /// Summary/title of the event
    pub summary: Option<String>,

    /// Description of the event
    pub description: Option<String>,

    /// Location of the event
    pub location: Option<String>,

    /// Recurrence rule
    pub rrule: Option<RecurrenceRule>,

    /// Exception dates
    pub ex_dates: Option<ExDate>,
}

/// A DATE-TIME property value with its time zone binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTime {
    /// Local time without a zone, e.g. `19980118T230000`.
    Floating(civil::DateTime),

    /// UTC time, written with a trailing `Z`.
    Utc(civil::DateTime),

    /// Local time tagged with a `TZID` parameter.
    Zoned {
        /// Time zone identifier
        tz_id: String,

        /// Wall-clock time in that zone
        date_time: civil::DateTime,
    },
}

impl DateTime {
    /// Wall-clock time, regardless of zone binding.
    #[must_use]
    pub fn civil(&self) -> civil::DateTime {
        match self {
            DateTime::Floating(dt)
            | DateTime::Utc(dt)
            | DateTime::Zoned { date_time: dt, .. } => *dt,
        }
    }

    /// The `TZID` parameter value, if any.
    #[must_use]
    pub fn tz_id(&self) -> Option<&str> {
        match self {
            DateTime::Floating(_) | DateTime::Utc(_) => None,
            DateTime::Zoned { tz_id, .. } => Some(tz_id),
        }
    }
}

/// Exception date-times (EXDATE) sharing one `TZID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExDate {
    /// Time zone identifier for every value
    pub tz_id: Option<String>,

    /// Excluded instants, written in order as one comma separated list
    pub values: Vec<civil::DateTime>,
}
