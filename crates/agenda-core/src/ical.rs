//! iCalendar emission -- renders a [`Calendar`] to RFC 5545 text.
//!
//! The emitter writes the component tree directly into a `String`: the
//! calendar header properties in fixed order, one `VEVENT` per event, and
//! a nested `VALARM` where a reminder is attached. Three wire rules live
//! here and nowhere else:
//!
//! - TEXT values escape backslash, semicolon, comma, and newline.
//! - Lines end with CRLF and fold at 75 octets with a single-space
//!   continuation, never splitting a UTF-8 sequence.
//! - Zone handling: timed events render their wall clock with a `TZID`
//!   parameter, all-day events as `VALUE=DATE`, and `DTSTAMP` as UTC with
//!   a trailing `Z`. This is the only place the (wall clock, zone) pair
//!   meets the wire.

use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::{meta, Alarm, Calendar, CalendarEvent, EventTime, ZonedLocal};

/// Maximum octets per physical line before folding (RFC 5545 section 3.1).
const FOLD_OCTETS: usize = 75;

/// Render a calendar as an iCalendar document.
pub fn to_ical(cal: &Calendar) -> String {
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_prop(&mut out, "VERSION", meta::VERSION);
    push_prop(&mut out, "PRODID", meta::PRODID);
    push_prop(&mut out, "CALSCALE", meta::CALSCALE);
    push_prop(&mut out, "X-WR-TIMEZONE", meta::TIMEZONE);
    push_text_prop(&mut out, "X-WR-CALNAME", meta::CALNAME);
    push_text_prop(&mut out, "DESCRIPTION", meta::DESCRIPTION);
    push_prop(&mut out, "SOURCE", meta::SOURCE);
    push_prop(&mut out, "COLOR", meta::COLOR);

    for event in &cal.events {
        push_event(&mut out, event);
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, event: &CalendarEvent) {
    push_line(out, "BEGIN:VEVENT");
    push_prop(out, "UID", &event.uid);
    push_prop(out, "DTSTAMP", &format_utc(event.dtstamp));

    match event.time {
        EventTime::Timed { start, end } => {
            push_zoned(out, "DTSTART", start);
            push_zoned(out, "DTEND", end);
        }
        EventTime::AllDay { start, end } => {
            push_date(out, "DTSTART", start);
            push_date(out, "DTEND", end);
        }
    }

    push_text_prop(out, "SUMMARY", &event.summary);
    if let Some(description) = &event.description {
        push_text_prop(out, "DESCRIPTION", description);
    }
    if let Some(url) = &event.url {
        push_prop(out, "URL", url);
    }
    if let Some(alarm) = &event.alarm {
        push_alarm(out, alarm);
    }

    push_line(out, "END:VEVENT");
}

fn push_alarm(out: &mut String, alarm: &Alarm) {
    push_line(out, "BEGIN:VALARM");
    push_prop(out, "TRIGGER", &format!("-PT{}M", alarm.minutes_before));
    push_line(out, "ACTION:DISPLAY");
    push_text_prop(out, "DESCRIPTION", &alarm.description);
    push_line(out, "END:VALARM");
}

/// A wall-clock property with its zone carried as a `TZID` parameter.
fn push_zoned(out: &mut String, name: &str, value: ZonedLocal) {
    push_line(
        out,
        &format!(
            "{name};TZID={}:{}",
            value.tz.name(),
            value.local.format("%Y%m%dT%H%M%S")
        ),
    );
}

/// An all-day date property (`VALUE=DATE`).
fn push_date(out: &mut String, name: &str, value: NaiveDate) {
    push_line(out, &format!("{name};VALUE=DATE:{}", value.format("%Y%m%d")));
}

fn format_utc(stamp: DateTime<Utc>) -> String {
    stamp.format("%Y%m%dT%H%M%SZ").to_string()
}

/// A property whose value passes through verbatim (URIs, enums, dates).
fn push_prop(out: &mut String, name: &str, value: &str) {
    push_line(out, &format!("{name}:{value}"));
}

/// A TEXT property; the value gets RFC 5545 TEXT escaping.
fn push_text_prop(out: &mut String, name: &str, value: &str) {
    push_line(out, &format!("{name}:{}", escape_text(value)));
}

/// Escape a TEXT value (RFC 5545 section 3.3.11): backslash, semicolon,
/// comma, and newline. Carriage returns vanish so CRLF pairs in source
/// data collapse into the single escaped newline.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Write one logical line, folded at [`FOLD_OCTETS`] octets with CRLF and
/// a single-space continuation. Folding counts octets but only breaks on
/// character boundaries, so multi-byte sequences stay intact; continuation
/// lines lose one octet of budget to their leading space.
fn push_line(out: &mut String, line: &str) {
    let mut budget = FOLD_OCTETS;
    let mut used = 0;

    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > budget {
            out.push_str("\r\n ");
            used = 0;
            budget = FOLD_OCTETS - 1;
        }
        out.push(ch);
        used += width;
    }

    out.push_str("\r\n");
}
