// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! Each writer emits one complete content line, including the CRLF.

use std::io::{self, Write};

use crate::component::{DateTime, ExDate};
use crate::formatter::Formatter;
use crate::formatter::value::{
    format_text, write_date_time_value, write_date_times, write_recurrence_rule,
};
use crate::keyword::{
    KW_CALSCALE, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_EXDATE, KW_LOCATION,
    KW_METHOD, KW_PRODID, KW_RRULE, KW_SUMMARY, KW_TZID, KW_UID, KW_VERSION,
};
use crate::value::RecurrenceRule;

pub fn write_prop_version<W: Write>(f: &mut Formatter<W>, version: &str) -> io::Result<()> {
    write_raw_prop(f, KW_VERSION, version)
}

pub fn write_prop_prodid<W: Write>(f: &mut Formatter<W>, prod_id: &str) -> io::Result<()> {
    write_raw_prop(f, KW_PRODID, prod_id)
}

pub fn write_prop_calscale<W: Write>(f: &mut Formatter<W>, calscale: &str) -> io::Result<()> {
    write_raw_prop(f, KW_CALSCALE, calscale)
}

pub fn write_prop_method<W: Write>(f: &mut Formatter<W>, method: &str) -> io::Result<()> {
    write_raw_prop(f, KW_METHOD, method)
}

pub fn write_prop_uid<W: Write>(f: &mut Formatter<W>, uid: &str) -> io::Result<()> {
    write_text_prop(f, KW_UID, uid)
}

pub fn write_prop_dtstamp<W: Write>(f: &mut Formatter<W>, dt: &DateTime) -> io::Result<()> {
    write_datetime_prop(f, KW_DTSTAMP, dt)
}

pub fn write_prop_dtstart<W: Write>(f: &mut Formatter<W>, dt: &DateTime) -> io::Result<()> {
    write_datetime_prop(f, KW_DTSTART, dt)
}

pub fn write_prop_dtend<W: Write>(f: &mut Formatter<W>, dt: &DateTime) -> io::Result<()> {
    write_datetime_prop(f, KW_DTEND, dt)
}

pub fn write_prop_summary<W: Write>(f: &mut Formatter<W>, summary: &str) -> io::Result<()> {
    write_text_prop(f, KW_SUMMARY, summary)
}

pub fn write_prop_description<W: Write>(f: &mut Formatter<W>, desc: &str) -> io::Result<()> {
    write_text_prop(f, KW_DESCRIPTION, desc)
}

pub fn write_prop_location<W: Write>(f: &mut Formatter<W>, location: &str) -> io::Result<()> {
    write_text_prop(f, KW_LOCATION, location)
}

/// Write an `RRULE` property.
pub fn write_prop_rrule<W: Write>(f: &mut Formatter<W>, rrule: &RecurrenceRule) -> io::Result<()> {
    write!(f, "{KW_RRULE}:")?;
    write_recurrence_rule(f, rrule)?;
    f.writeln()
}

/// Write an `EXDATE` property, all values on one line.
pub fn write_prop_ex_date<W: Write>(f: &mut Formatter<W>, ex_date: &ExDate) -> io::Result<()> {
    write!(f, "{KW_EXDATE}")?;
    if let Some(tz) = &ex_date.tz_id {
        write!(f, ";{KW_TZID}={tz}")?;
    }
    write!(f, ":")?;
    write_date_times(f, &ex_date.values)?;
    f.writeln()
}

/// Write a property whose value is emitted verbatim.
fn write_raw_prop<W: Write>(f: &mut Formatter<W>, name: &str, value: &str) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Write a TEXT property, escaping the value.
fn write_text_prop<W: Write>(f: &mut Formatter<W>, name: &str, content: &str) -> io::Result<()> {
    write!(f, "{name}:{}", format_text(content))?;
    f.writeln()
}

/// Write a `DateTime` property: `NAME[;TZID=tz]:YYYYMMDDTHHMMSS[Z]`.
fn write_datetime_prop<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    datetime: &DateTime,
) -> io::Result<()> {
    write!(f, "{name}")?;
    if let Some(tz) = datetime.tz_id() {
        write!(f, ";{KW_TZID}={tz}")?;
    }
    write!(f, ":")?;
    write_date_time_value(f, datetime)?;
    f.writeln()
}
