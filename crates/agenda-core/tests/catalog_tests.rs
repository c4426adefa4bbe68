//! Tests for the available-data listing.

use agenda_core::catalog::{weeks_by_year, weeks_by_year_json};
use agenda_core::AgendaItem;

fn item(id: i64, year: i32, week: u32) -> AgendaItem {
    AgendaItem {
        id,
        year,
        week,
        start: "2024-01-15T10:00:00".to_string(),
        end: "2024-01-15T12:00:00".to_string(),
        top: None,
        thema: format!("Punkt {id}"),
        beschreibung: "Beratung".to_string(),
        url: None,
        status: None,
        namentliche_abstimmung: false,
        uid: format!("bt-{year}-{id:03}"),
        dtstamp: "2024-01-05T00:00:00".to_string(),
    }
}

#[test]
fn years_and_weeks_come_out_descending_and_distinct() {
    let items = vec![
        item(1, 2023, 49),
        item(2, 2024, 3),
        item(3, 2024, 45),
        item(4, 2024, 3), // duplicate week
        item(5, 2023, 51),
    ];
    let listing = weeks_by_year(&items);
    assert_eq!(
        listing,
        vec![(2024, vec![45, 3]), (2023, vec![51, 49])]
    );
}

#[test]
fn empty_input_yields_an_empty_listing() {
    assert!(weeks_by_year(&[]).is_empty());
    assert_eq!(weeks_by_year_json(&[]).unwrap(), "{}");
}

#[test]
fn json_form_keys_years_in_descending_order() {
    let items = vec![item(1, 2023, 49), item(2, 2024, 3)];
    let json = weeks_by_year_json(&items).unwrap();
    assert_eq!(json, r#"{"2024":[3],"2023":[49]}"#);
}
