//! Tests for format dispatch: token mapping, content types, and the
//! filter-then-serialize orchestration.

use agenda_core::calendar::CalendarOptions;
use agenda_core::{render, AgendaError, AgendaItem, FeedOptions, Format};
use chrono::{DateTime, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap()
}

fn item(id: i64, week: u32, status: Option<&str>) -> AgendaItem {
    let day = 8 + 7 * (week - 2); // Monday of the given 2024 week
    AgendaItem {
        id,
        year: 2024,
        week,
        start: format!("2024-01-{day:02}T10:00:00"),
        end: format!("2024-01-{day:02}T12:00:00"),
        top: None,
        thema: format!("Punkt {id}"),
        beschreibung: "Beratung".to_string(),
        url: None,
        status: status.map(str::to_string),
        namentliche_abstimmung: false,
        uid: format!("bt-2024-{id:03}"),
        dtstamp: "2024-01-05T00:00:00".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Token mapping
// ---------------------------------------------------------------------------

#[test]
fn ical_and_ics_are_aliases() {
    assert_eq!("ical".parse::<Format>().unwrap(), Format::Ical);
    assert_eq!("ics".parse::<Format>().unwrap(), Format::Ical);
}

#[test]
fn structural_tokens_map_to_their_formats() {
    assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    assert_eq!("xml".parse::<Format>().unwrap(), Format::Xml);
    assert_eq!("csv".parse::<Format>().unwrap(), Format::Csv);
}

#[test]
fn unknown_tokens_are_a_dispatch_error() {
    let err = "yaml".parse::<Format>().unwrap_err();
    match &err {
        AgendaError::UnsupportedFormat(token) => assert_eq!(token, "yaml"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Unsupported format: yaml");
}

#[test]
fn tokens_are_case_sensitive() {
    assert!("ICAL".parse::<Format>().is_err());
}

#[test]
fn content_types_match_the_formats() {
    assert_eq!(Format::Ical.content_type(), "text/calendar; charset=utf-8");
    assert_eq!(Format::Json.content_type(), "application/json; charset=utf-8");
    assert_eq!(Format::Xml.content_type(), "application/xml; charset=utf-8");
    assert_eq!(Format::Csv.content_type(), "text/csv; charset=utf-8");
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[test]
fn render_pairs_body_with_content_type() {
    let feed = render(Format::Json, vec![item(1, 3, None)], &FeedOptions::default(), now()).unwrap();
    assert!(feed.body.starts_with("["));
    assert_eq!(feed.content_type, "application/json; charset=utf-8");
}

#[test]
fn empty_input_renders_valid_payloads_in_every_structural_format() {
    let empty = FeedOptions::default();
    assert_eq!(render(Format::Json, vec![], &empty, now()).unwrap().body, "[]");
    assert_eq!(
        render(Format::Xml, vec![], &empty, now()).unwrap().body,
        "<agenda></agenda>"
    );
    let csv = render(Format::Csv, vec![], &empty, now()).unwrap().body;
    assert!(csv.starts_with("id,year,week,"));

    let ical = render(Format::Ical, vec![], &empty, now()).unwrap().body;
    assert!(ical.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ical.ends_with("END:VCALENDAR\r\n"));
}

#[test]
fn status_filter_runs_before_serialization() {
    let items = vec![
        item(1, 3, Some("in Beratung, erledigt")),
        item(2, 3, Some("abgesetzt")),
    ];
    let opts = FeedOptions {
        status: Some("erledigt".to_string()),
        ..Default::default()
    };
    let feed = render(Format::Json, items, &opts, now()).unwrap();
    assert!(feed.body.contains("bt-2024-001"));
    assert!(!feed.body.contains("bt-2024-002"));
}

#[test]
fn sitting_weeks_count_distinct_weeks_of_the_filtered_set() {
    // Week 4 survives the filter twice, week 2 is filtered away entirely;
    // exactly one block event must remain.
    let items = vec![
        item(1, 4, Some("erledigt")),
        item(2, 4, Some("erledigt, angenommen")),
        item(3, 2, Some("abgesetzt")),
    ];
    let opts = FeedOptions {
        status: Some("erledigt".to_string()),
        calendar: CalendarOptions {
            show_sitting_weeks: true,
            ..Default::default()
        },
    };
    let feed = render(Format::Ical, items, &opts, now()).unwrap();

    let blocks = feed.body.matches("SUMMARY:Sitzungswoche").count();
    assert_eq!(blocks, 1);
}

#[test]
fn malformed_timestamps_surface_through_render() {
    let mut bad = item(1, 3, None);
    bad.start = "gestern".to_string();
    let err = render(Format::Ical, vec![bad], &FeedOptions::default(), now()).unwrap_err();
    assert!(matches!(err, AgendaError::MalformedTimestamp { .. }));
}

#[test]
fn structural_formats_never_parse_timestamps() {
    // A malformed timestamp only matters on the calendar path.
    let mut bad = item(1, 3, None);
    bad.start = "gestern".to_string();
    let feed = render(Format::Json, vec![bad], &FeedOptions::default(), now()).unwrap();
    assert!(feed.body.contains("gestern"));
}
