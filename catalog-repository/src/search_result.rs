//! A page of search results with pagination metadata.

use catalog_model::Entity;
use serde::Serialize;
use serde_json::{Value, json};

/// One page of entities plus the totals needed to navigate the rest.
///
/// `last_page` is derived as `ceil(total / per_page)`, so an empty result
/// has `last_page == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
}

impl<E> SearchResult<E> {
    /// Wraps a page. `total` is the number of matches before pagination.
    pub fn new(items: Vec<E>, total: u64, current_page: u64, per_page: u64) -> Self {
        let last_page = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Converts the items while keeping the pagination metadata.
    pub fn map<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

impl<E: Entity + Serialize> SearchResult<E> {
    /// Serializes the page to JSON.
    ///
    /// With `force_entity`, items are replaced by their `to_json()`
    /// projection; otherwise they are serialized as-is.
    pub fn to_json(&self, force_entity: bool) -> serde_json::Result<Value> {
        let items = if force_entity {
            Value::Array(self.items.iter().map(Entity::to_json).collect())
        } else {
            serde_json::to_value(&self.items)?
        };
        Ok(json!({
            "items": items,
            "total": self.total,
            "current_page": self.current_page,
            "per_page": self.per_page,
            "last_page": self.last_page,
        }))
    }
}
