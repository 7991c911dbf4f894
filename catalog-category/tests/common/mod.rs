//! Shared test helpers for category tests.

#![allow(dead_code)]

use catalog_category::{Category, CategoryInMemoryRepository};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

/// An empty in-memory category store behind an `Arc`, ready to hand to use
/// cases.
pub fn repository() -> Arc<CategoryInMemoryRepository> {
    Arc::new(CategoryInMemoryRepository::default())
}

/// A store pre-seeded with `items`, in order.
pub fn repository_with(items: Vec<Category>) -> Arc<CategoryInMemoryRepository> {
    Arc::new(CategoryInMemoryRepository::with_items(Default::default(), items))
}

/// Fixed reference instant so ordering tests are deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// `base_time()` shifted by `millis`.
pub fn at_millis(millis: i64) -> DateTime<Utc> {
    base_time() + Duration::milliseconds(millis)
}

/// Names of `items`, in order.
pub fn names(items: &[Category]) -> Vec<&str> {
    items.iter().map(Category::name).collect()
}

/// Routes logs to the test writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
