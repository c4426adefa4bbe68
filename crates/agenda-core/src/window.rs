//! Time-window resolution for agenda queries.
//!
//! A query names a target year plus at most one of week, month, or day.
//! When several selectors arrive anyway, precedence is week over month
//! over day over whole-year and the losers are ignored; this is an
//! explicit rule, not an accident of branching. A day selector can only
//! address a date together with a month, so a day without a month falls
//! through to the whole year.
//!
//! Week queries strictly after the current ISO week are rejected up front
//! with a fixed message; no agenda exists for the future.

use chrono::{Datelike, NaiveDate};

use crate::error::{AgendaError, Result};
use crate::model::AgendaItem;

/// Raw selector set as it arrives from the outer parameter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowQuery {
    pub year: i32,
    pub week: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// A resolved, unambiguous time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Day { year: i32, month: u32, day: u32 },
    Year { year: i32 },
}

impl WindowQuery {
    /// Resolve the selectors by precedence.
    ///
    /// - a week wins over everything else;
    /// - month and day together address one date;
    /// - a month alone addresses the month;
    /// - a day alone cannot address anything and is ignored.
    pub fn resolve(&self) -> Window {
        match (self.week, self.month, self.day) {
            (Some(week), _, _) => Window::Week {
                year: self.year,
                week,
            },
            (None, Some(month), Some(day)) => Window::Day {
                year: self.year,
                month,
                day,
            },
            (None, Some(month), None) => Window::Month {
                year: self.year,
                month,
            },
            (None, None, _) => Window::Year { year: self.year },
        }
    }
}

/// Reject a query whose (year, week) lies strictly after the current ISO
/// week.
///
/// Month and day selectors are not guarded; only week navigation can walk
/// into weeks for which no agenda exists yet. `today` is supplied by the
/// caller so the check stays a pure function.
///
/// # Errors
///
/// Returns [`AgendaError::FutureWindow`] with its fixed user-facing
/// message.
pub fn ensure_not_future(query: &WindowQuery, today: NaiveDate) -> Result<()> {
    let current = today.iso_week();
    let future_year = query.year > current.year();
    let future_week =
        query.year == current.year() && query.week.is_some_and(|week| week > current.week());

    if future_year || future_week {
        return Err(AgendaError::FutureWindow);
    }
    Ok(())
}

/// Select the items falling inside the window -- the in-memory mirror of
/// the store's queries.
///
/// Week windows match the stored `year`/`week` columns. Month and day
/// windows match the zero-padded month/day digits of the stored `start`
/// text, so rows too short or malformed simply never match (strict
/// timestamp validation belongs to the calendar builder).
pub fn select(items: Vec<AgendaItem>, window: Window) -> Vec<AgendaItem> {
    items
        .into_iter()
        .filter(|item| matches(item, window))
        .collect()
}

fn matches(item: &AgendaItem, window: Window) -> bool {
    match window {
        Window::Week { year, week } => item.year == year && item.week == week,
        Window::Month { year, month } => item.year == year && start_digits(item, 5, 7) == Some(month),
        Window::Day { year, month, day } => {
            item.year == year
                && start_digits(item, 5, 7) == Some(month)
                && start_digits(item, 8, 10) == Some(day)
        }
        Window::Year { year } => item.year == year,
    }
}

/// Digits of the stored start text at byte range `[from, to)`, parsed as
/// a number (`"2024-01-15T..."` yields 1 for range 5..7 and 15 for
/// 8..10).
fn start_digits(item: &AgendaItem, from: usize, to: usize) -> Option<u32> {
    item.start.get(from..to)?.parse().ok()
}
