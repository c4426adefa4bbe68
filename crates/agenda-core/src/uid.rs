//! Deterministic identifier generation for derived calendar events.

use chrono::NaiveDateTime;

/// Maximum length of the label slug in characters.
const SLUG_MAX_CHARS: usize = 30;

/// Build a deterministic identifier from a timestamp, a label, and a
/// suffix.
///
/// The timestamp renders in the fixed `YYYYMMDDThhmmssZ` pattern, followed
/// by `-`, the label's slug, and the suffix verbatim. Identical inputs
/// always yield the identical string; there is no hidden state or
/// randomness.
///
/// Identifiers built here are never checked against externally stored
/// uids. Derived events stay apart from persisted record uids purely by
/// namespacing: their labels ("Namentliche Abstimmung: ...",
/// "Sitzungswoche") slug into prefixes no stored uid uses.
pub fn generate_uid(stamp: NaiveDateTime, label: &str, suffix: &str) -> String {
    format!("{}-{}{}", stamp.format("%Y%m%dT%H%M%SZ"), slug(label), suffix)
}

/// Normalize a label into a slug: lowercase, whitespace runs collapsed to
/// single hyphens, truncated to [`SLUG_MAX_CHARS`] characters.
///
/// Labels differing only in case or in runs of spaces collapse to the same
/// slug, keeping identifiers stable under incidental formatting changes in
/// the source data.
pub fn slug(label: &str) -> String {
    let lowered = label.to_lowercase();
    let hyphenated = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    hyphenated.chars().take(SLUG_MAX_CHARS).collect()
}
