//! Available-data listing -- which (year, week) pairs the store holds.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::model::AgendaItem;

/// Distinct (year, week) pairs grouped per year, years descending, weeks
/// descending within each year.
pub fn weeks_by_year(items: &[AgendaItem]) -> Vec<(i32, Vec<u32>)> {
    let pairs: BTreeSet<(i32, u32)> = items.iter().map(|item| (item.year, item.week)).collect();

    let mut grouped: Vec<(i32, Vec<u32>)> = Vec::new();
    for (year, week) in pairs.into_iter().rev() {
        match grouped.last_mut() {
            Some((current, weeks)) if *current == year => weeks.push(week),
            _ => grouped.push((year, vec![week])),
        }
    }
    grouped
}

/// The listing in its JSON wire form: an object keyed by year, each value
/// the week numbers in descending order. Key order follows the descending
/// insertion order (the JSON map preserves it).
pub fn weeks_by_year_json(items: &[AgendaItem]) -> Result<String> {
    let mut root = Map::new();
    for (year, weeks) in weeks_by_year(items) {
        root.insert(year.to_string(), Value::from(weeks));
    }
    Ok(serde_json::to_string(&Value::Object(root))?)
}
