//! ISO-8601 week arithmetic.
//!
//! Weeks start on Monday and week 1 is the week containing January 4.
//! The Monday of a week is derived from that January-4 anchor, which also
//! covers weeks whose Monday falls in the preceding calendar year (the
//! Monday of week 1 of 2016 is 2016-01-04 itself; the Monday of week 1 of
//! 2015 is 2014-12-29).

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the given ISO week.
///
/// January 4 is always inside week 1, so the result is the anchor shifted
/// forward by `week - 1` whole weeks and back to the Monday of its week.
/// Returns `None` only when `year` is outside the range chrono can
/// represent.
pub fn monday_of_iso_week(week: u32, year: i32) -> Option<NaiveDate> {
    let anchor = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let to_monday = anchor.weekday().num_days_from_monday() as i64;
    let days = (week as i64 - 1) * 7 - to_monday;
    anchor.checked_add_signed(Duration::days(days))
}

/// ISO-8601 week number of a date.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// The (week-based year, week number) pair of a date.
///
/// The week-based year differs from the calendar year for dates around
/// New Year: 2014-12-29 belongs to week 1 of 2015.
pub fn iso_week_key(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}
