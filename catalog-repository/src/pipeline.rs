//! The filter → sort → paginate stages of a search.
//!
//! Each stage consumes the sequence it is given and returns the next one.
//! Stages that have nothing to do hand their input back untouched,
//! including its allocation.

use crate::{SortDirection, SortKey};
use tracing::debug;

/// Keeps the items matching `filter`.
///
/// With no filter the input is returned as-is and `predicate` is never
/// called.
pub fn apply_filter<E>(
    items: Vec<E>,
    filter: Option<&str>,
    mut predicate: impl FnMut(&E, &str) -> bool,
) -> Vec<E> {
    let Some(filter) = filter else {
        return items;
    };
    items
        .into_iter()
        .filter(|item| predicate(item, filter))
        .collect()
}

/// Orders items by the value `sort_key` extracts for the `sort` field.
///
/// Returns the input unchanged when `sort` is absent or not listed in
/// `sortable_fields`. The sort is stable: items with equal keys keep their
/// relative order. A missing direction sorts ascending.
pub fn apply_sort<E>(
    items: Vec<E>,
    sort: Option<&str>,
    sort_dir: Option<SortDirection>,
    sortable_fields: &[&str],
    mut sort_key: impl FnMut(&E, &str) -> SortKey,
) -> Vec<E> {
    let Some(field) = sort else {
        return items;
    };
    if !sortable_fields.contains(&field) {
        debug!(field, "ignoring sort on unsortable field");
        return items;
    }

    let mut keyed: Vec<(SortKey, E)> = items
        .into_iter()
        .map(|item| (sort_key(&item, field), item))
        .collect();
    let descending = sort_dir == Some(SortDirection::Desc);
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        if descending { ordering.reverse() } else { ordering }
    });
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Returns the `page`-th slice of `per_page` items (1-based).
///
/// Pages past the end yield an empty vector.
pub fn apply_paginate<E>(items: Vec<E>, page: u64, per_page: u64) -> Vec<E> {
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    let start = usize::try_from(page.saturating_sub(1))
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}
