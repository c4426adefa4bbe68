//! Calendar construction -- event value objects and the build pass.
//!
//! The builder walks the (already filtered) item list once, in input
//! order, and accumulates an ordered list of immutable [`CalendarEvent`]
//! values: one main event per item, optionally a named-vote companion per
//! flagged item, and one all-day sitting-week block per distinct ISO week
//! touched by the list. Serialization to the wire format is a separate
//! final step in [`crate::ical`]; nothing here knows about iCalendar
//! syntax.
//!
//! Wall-clock times travel as an explicit (local time, IANA zone) pair
//! and are never resolved to an offset inside the engine.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{AgendaError, Result};
use crate::model::AgendaItem;
use crate::uid;
use crate::week;

/// The fixed civil timezone all event wall-clock times display in.
pub const DISPLAY_TZ: Tz = chrono_tz::Europe::Berlin;

/// Minutes a named-vote companion event lasts, and how far ahead of it the
/// optional reminder fires.
const NAMED_VOTE_MINUTES: i64 = 15;

/// Days a sitting-week block spans: Monday through Saturday, exclusive
/// end.
const SITTING_WEEK_DAYS: i64 = 5;

/// Calendar-level metadata, constant across all builds.
pub mod meta {
    pub const VERSION: &str = "2.0";
    pub const PRODID: &str = "-//hutt.io//api.hutt.io/bt-to//";
    pub const CALSCALE: &str = "GREGORIAN";
    pub const TIMEZONE: &str = "Europe/Berlin";
    pub const CALNAME: &str = "Tagesordnung Bundestag";
    pub const DESCRIPTION: &str = "Dieses iCal-Feed stellt die aktuelle Tagesordnung \
        des Plenums des Deutschen Bundestages zur Verfügung.";
    pub const SOURCE: &str = "https://api.hutt.io/bt-to/ical";
    pub const COLOR: &str = "#808080";
}

/// A wall-clock time bound to an IANA zone identifier.
///
/// The pair travels unresolved through the whole build; the iCal emitter
/// renders the wall clock with a `TZID` parameter and never computes a
/// UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedLocal {
    pub local: NaiveDateTime,
    pub tz: Tz,
}

impl ZonedLocal {
    /// A wall-clock instant in the fixed display timezone.
    pub fn display(local: NaiveDateTime) -> Self {
        Self {
            local,
            tz: DISPLAY_TZ,
        }
    }
}

/// Event timing: timed events carry zoned wall-clock instants, block
/// events carry whole dates with an exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    Timed { start: ZonedLocal, end: ZonedLocal },
    AllDay { start: NaiveDate, end: NaiveDate },
}

/// A display reminder attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub minutes_before: i64,
    pub description: String,
}

/// One immutable calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub dtstamp: DateTime<Utc>,
    pub time: EventTime,
    pub summary: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub alarm: Option<Alarm>,
}

/// Options controlling which derived events a build emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarOptions {
    /// Emit a companion event after each item flagged as a recorded vote.
    pub include_named_votes: bool,
    /// Attach a display reminder to each named-vote companion.
    pub named_vote_alarm: bool,
    /// Emit one all-day block event per distinct sitting week.
    pub show_sitting_weeks: bool,
}

/// An ordered list of events. The fixed metadata lives in [`meta`] and is
/// attached by the serializer, so an empty calendar is still well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calendar {
    pub events: Vec<CalendarEvent>,
}

/// Build the calendar for the given items.
///
/// A single pass in input order: each item contributes its main event,
/// optionally a named-vote companion, and its ISO week to the
/// sitting-week accumulator. The accumulator lives and dies inside this
/// call. `now` becomes the `DTSTAMP` of every emitted event; the
/// dispatcher passes the current UTC time.
///
/// # Errors
///
/// Returns [`AgendaError::MalformedTimestamp`] when a stored start/end
/// value cannot be parsed.
pub fn build_calendar(
    items: &[AgendaItem],
    opts: &CalendarOptions,
    now: DateTime<Utc>,
) -> Result<Calendar> {
    let mut events = Vec::new();
    let mut weeks_with_items: BTreeSet<(i32, u32)> = BTreeSet::new();

    for item in items {
        let start = parse_wall_clock(&item.start, item)?;
        let mut end = parse_wall_clock(&item.end, item)?;

        // Display invariant only; the stored record keeps its values.
        if end <= start {
            end = start + Duration::minutes(1);
        }

        weeks_with_items.insert(week::iso_week_key(start.date()));

        events.push(main_event(item, start, end, now));

        if opts.include_named_votes && item.namentliche_abstimmung {
            events.push(named_vote_event(item, end, now, opts.named_vote_alarm));
        }
    }

    if opts.show_sitting_weeks {
        for &(year, week_number) in &weeks_with_items {
            if let Some(event) = sitting_week_event(year, week_number, now) {
                events.push(event);
            }
        }
    }

    Ok(Calendar { events })
}

/// Parse a stored wall-clock timestamp (`"2024-01-15T10:00:00"`, seconds
/// optional). Malformed values are data-integrity errors, never coerced.
fn parse_wall_clock(value: &str, item: &AgendaItem) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AgendaError::MalformedTimestamp {
            uid: item.uid.clone(),
            value: value.to_string(),
        })
}

/// The main event of an item: stored uid, clamped times, composed summary.
fn main_event(
    item: &AgendaItem,
    start: NaiveDateTime,
    end: NaiveDateTime,
    now: DateTime<Utc>,
) -> CalendarEvent {
    let summary = match &item.top {
        Some(top) => format!("{top}: {}", item.thema),
        None => item.thema.clone(),
    };

    CalendarEvent {
        uid: item.uid.clone(),
        dtstamp: now,
        time: EventTime::Timed {
            start: ZonedLocal::display(start),
            end: ZonedLocal::display(end),
        },
        summary,
        description: Some(item.beschreibung.clone()),
        url: item.url.clone(),
        alarm: None,
    }
}

/// The companion event for a recorded vote: starts when the main event
/// ends, lasts fifteen minutes, inherits the item's url.
fn named_vote_event(
    item: &AgendaItem,
    main_end: NaiveDateTime,
    now: DateTime<Utc>,
    with_alarm: bool,
) -> CalendarEvent {
    let start = main_end;
    let end = start + Duration::minutes(NAMED_VOTE_MINUTES);
    let summary = format!("Namentliche Abstimmung: {}", item.thema);

    let vote_line = match &item.top {
        Some(top) => format!("Namentliche Abstimmung zu {top}: {}.", item.thema),
        None => format!("Namentliche Abstimmung zu {}.", item.thema),
    };
    let description = format!("{vote_line}\n\n{}", item.beschreibung);

    let alarm = with_alarm.then(|| Alarm {
        minutes_before: NAMED_VOTE_MINUTES,
        description: match &item.top {
            Some(top) => format!("Erinnerung: Namentliche Abstimmung {top}: {}", item.thema),
            None => format!("Erinnerung: Namentliche Abstimmung {}", item.thema),
        },
    });

    CalendarEvent {
        uid: uid::generate_uid(start, &summary, ""),
        dtstamp: now,
        time: EventTime::Timed {
            start: ZonedLocal::display(start),
            end: ZonedLocal::display(end),
        },
        summary,
        description: Some(description),
        url: item.url.clone(),
        alarm,
    }
}

/// The all-day block event for one sitting week.
///
/// Returns `None` only for week keys no real date can produce (years
/// outside chrono's range); keys accumulated from parsed items always
/// build.
fn sitting_week_event(year: i32, week_number: u32, now: DateTime<Utc>) -> Option<CalendarEvent> {
    let monday = week::monday_of_iso_week(week_number, year)?;
    let end = monday.checked_add_signed(Duration::days(SITTING_WEEK_DAYS))?;
    let midnight = monday.and_hms_opt(0, 0, 0)?;

    Some(CalendarEvent {
        uid: uid::generate_uid(midnight, "Sitzungswoche", ""),
        dtstamp: now,
        time: EventTime::AllDay {
            start: monday,
            end,
        },
        summary: "Sitzungswoche".to_string(),
        description: None,
        url: None,
        alarm: None,
    })
}
