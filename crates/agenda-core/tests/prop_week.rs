//! Property tests for ISO week arithmetic.
//!
//! For any (week, year) pair where the week exists, the Monday returned by
//! `monday_of_iso_week` must be a Monday and must round-trip through
//! `iso_week_key` back to exactly that pair. Weeks 1 through 52 exist in
//! every year; week 53 only in long years, so the last week of each year
//! is exercised separately.

use agenda_core::week::{iso_week_key, monday_of_iso_week};
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

/// Number of ISO weeks in a year: the week of December 28 is always the
/// last one.
fn weeks_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .unwrap()
        .iso_week()
        .week()
}

proptest! {
    #[test]
    fn monday_roundtrips_through_the_week_key(year in 1950i32..=2100, week in 1u32..=52) {
        let monday = monday_of_iso_week(week, year).unwrap();
        prop_assert_eq!(monday.weekday(), Weekday::Mon);
        prop_assert_eq!(iso_week_key(monday), (year, week));
    }

    #[test]
    fn the_last_week_of_any_year_roundtrips(year in 1950i32..=2100) {
        // 52 in ordinary years, 53 in long years; both must hold.
        let last = weeks_in_year(year);
        let monday = monday_of_iso_week(last, year).unwrap();
        prop_assert_eq!(monday.weekday(), Weekday::Mon);
        prop_assert_eq!(iso_week_key(monday), (year, last));
    }

    #[test]
    fn consecutive_weeks_are_seven_days_apart(year in 1950i32..=2100, week in 1u32..=51) {
        let this_week = monday_of_iso_week(week, year).unwrap();
        let next_week = monday_of_iso_week(week + 1, year).unwrap();
        prop_assert_eq!(next_week - this_week, chrono::Duration::days(7));
    }
}
