//! Status filtering -- the substring predicate over agenda item lists.
//!
//! The stored `status` column informally packs several values into one
//! string (`"in Beratung, erledigt"`), so the filter is a plain substring
//! match rather than set membership. An item passes when its status is
//! present, non-empty, and contains the needle.

use crate::model::AgendaItem;

/// Keep the items whose status contains `needle`.
///
/// `None` and the empty needle both mean "no filtering" and return the
/// list unchanged. Items without a status (or with an empty one) never
/// match a non-empty needle.
pub fn by_status(items: Vec<AgendaItem>, needle: Option<&str>) -> Vec<AgendaItem> {
    let Some(needle) = needle.filter(|n| !n.is_empty()) else {
        return items;
    };

    items
        .into_iter()
        .filter(|item| {
            item.status
                .as_deref()
                .is_some_and(|status| !status.is_empty() && status.contains(needle))
        })
        .collect()
}
