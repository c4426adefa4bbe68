//! Format dispatch -- maps a format token to its serializer and runs one
//! complete build.
//!
//! The dispatcher is the engine's front door: it filters the item list
//! once, then hands the result to either the calendar builder or one of
//! the structural serializers. Everything a build touches (the filtered
//! list, the week accumulator, the event list) is constructed inside the
//! call, so concurrent renders never share state.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::calendar::{self, CalendarOptions};
use crate::error::{AgendaError, Result};
use crate::filter;
use crate::ical;
use crate::model::AgendaItem;
use crate::structural;

/// Supported output formats. The `ical` and `ics` tokens are aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ical,
    Json,
    Xml,
    Csv,
}

impl FromStr for Format {
    type Err = AgendaError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "ical" | "ics" => Ok(Format::Ical),
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "csv" => Ok(Format::Csv),
            other => Err(AgendaError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Format {
    /// MIME type of the rendered payload.
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Ical => "text/calendar; charset=utf-8",
            Format::Json => "application/json; charset=utf-8",
            Format::Xml => "application/xml; charset=utf-8",
            Format::Csv => "text/csv; charset=utf-8",
        }
    }
}

/// Per-request options: the status needle plus the calendar flags.
#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    pub status: Option<String>,
    pub calendar: CalendarOptions,
}

/// A rendered payload plus its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub body: String,
    pub content_type: &'static str,
}

/// Filter the items once, then render them in the requested format.
///
/// # Errors
///
/// Propagates [`AgendaError::MalformedTimestamp`] from the calendar
/// builder and serialization failures from the structural serializers.
pub fn render(
    format: Format,
    items: Vec<AgendaItem>,
    opts: &FeedOptions,
    now: DateTime<Utc>,
) -> Result<Feed> {
    let items = filter::by_status(items, opts.status.as_deref());

    let body = match format {
        Format::Ical => ical::to_ical(&calendar::build_calendar(&items, &opts.calendar, now)?),
        Format::Json => structural::to_json(&items)?,
        Format::Xml => structural::to_xml(&items),
        Format::Csv => structural::to_csv(&items)?,
    };

    Ok(Feed {
        body,
        content_type: format.content_type(),
    })
}
