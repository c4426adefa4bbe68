//! The agenda item record -- the persisted schema mirrored in memory.

use serde::{Deserialize, Serialize};

/// One plenary agenda item as provided by the external store.
///
/// `start` and `end` hold local wall-clock timestamps as text with no
/// embedded zone (e.g. `"2024-01-15T10:00:00"`). Only the calendar builder
/// parses them, failing fast on malformed values; every other consumer
/// treats the record read-only and field-for-field. The `status` column
/// may informally pack several values into one string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: i64,
    pub year: i32,
    pub week: u32,
    pub start: String,
    pub end: String,
    pub top: Option<String>,
    pub thema: String,
    pub beschreibung: String,
    pub url: Option<String>,
    pub status: Option<String>,
    pub namentliche_abstimmung: bool,
    pub uid: String,
    pub dtstamp: String,
}

impl AgendaItem {
    /// Column order of the persisted schema. Drives the CSV header row and
    /// the XML element order.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "id",
        "year",
        "week",
        "start",
        "end",
        "top",
        "thema",
        "beschreibung",
        "url",
        "status",
        "namentliche_abstimmung",
        "uid",
        "dtstamp",
    ];
}
