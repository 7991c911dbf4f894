//! Shared test helpers for repository tests.

#![allow(dead_code)]

use catalog_model::Entity;
use catalog_repository::{InMemorySearchableRepository, SearchStrategy};
use catalog_types::EntityId;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Minimal entity with one text and one numeric field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StubEntity {
    pub id: EntityId,
    pub name: String,
    pub price: i64,
}

impl StubEntity {
    pub fn new(name: &str, price: i64) -> Self {
        Self {
            id: EntityId::new(),
            name: name.to_string(),
            price,
        }
    }
}

impl Entity for StubEntity {
    type Id = EntityId;
    const NAME: &'static str = "StubEntity";

    fn entity_id(&self) -> &EntityId {
        &self.id
    }

    fn to_json(&self) -> serde_json::Value {
        json!({ "id": self.id.to_string(), "name": self.name, "price": self.price })
    }
}

/// Matches on a case-insensitive name substring or an exact price; counts
/// predicate calls.
#[derive(Debug, Default)]
pub struct StubStrategy {
    pub filter_calls: AtomicUsize,
}

impl StubStrategy {
    pub fn filter_calls(&self) -> usize {
        self.filter_calls.load(Ordering::SeqCst)
    }
}

impl SearchStrategy<StubEntity> for StubStrategy {
    fn sortable_fields(&self) -> &[&'static str] {
        &["name"]
    }

    fn matches(&self, item: &StubEntity, filter: &str) -> bool {
        self.filter_calls.fetch_add(1, Ordering::SeqCst);
        item.name.to_lowercase().contains(&filter.to_lowercase())
            || item.price.to_string() == filter
    }
}

pub type StubRepository = InMemorySearchableRepository<StubEntity, StubStrategy>;

pub fn stub_repository(items: Vec<StubEntity>) -> StubRepository {
    InMemorySearchableRepository::with_items(StubStrategy::default(), items)
}

/// Names of `items`, in order.
pub fn names(items: &[StubEntity]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

/// Routes repository logs to the test writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
