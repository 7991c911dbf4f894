//! Searchable in-memory repository.
//!
//! The shared pipeline knows nothing about entity fields: filtering and
//! sort-key extraction are delegated to a [`SearchStrategy`] supplied per
//! entity type.

use crate::pipeline::{apply_filter, apply_paginate, apply_sort};
use crate::{
    InMemoryRepository, Repository, RepositoryResult, SearchParams, SearchResult,
    SearchableRepository, SortDirection, SortKey,
};
use async_trait::async_trait;
use catalog_model::Entity;
use tracing::debug;

/// Per-entity search behaviour plugged into [`InMemorySearchableRepository`].
pub trait SearchStrategy<E: Entity>: Send + Sync {
    /// Field names accepted as sort keys.
    fn sortable_fields(&self) -> &[&'static str];

    /// Returns whether `item` matches the (non-empty) `filter`.
    fn matches(&self, item: &E, filter: &str) -> bool;

    /// Extracts the value to sort `item` by.
    ///
    /// Defaults to reading `field` from the entity's JSON projection.
    fn sort_key(&self, item: &E, field: &str) -> SortKey {
        SortKey::from_json(item.to_json().get(field))
    }

    /// Sort applied when the search names no sort field.
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// In-memory repository that supports [`SearchableRepository::search`].
#[derive(Debug)]
pub struct InMemorySearchableRepository<E, S> {
    store: InMemoryRepository<E>,
    strategy: S,
}

impl<E: Entity, S: SearchStrategy<E>> InMemorySearchableRepository<E, S> {
    pub fn new(strategy: S) -> Self {
        Self::with_items(strategy, Vec::new())
    }

    /// Creates a repository pre-seeded with `items`, in order.
    pub fn with_items(strategy: S, items: Vec<E>) -> Self {
        Self {
            store: InMemoryRepository::with_items(items),
            strategy,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The underlying CRUD store.
    pub fn store(&self) -> &InMemoryRepository<E> {
        &self.store
    }

    /// Filter stage using the strategy's predicate.
    pub fn apply_filter(&self, items: Vec<E>, filter: Option<&str>) -> Vec<E> {
        apply_filter(items, filter, |item, filter| {
            self.strategy.matches(item, filter)
        })
    }

    /// Sort stage using the strategy's sortable fields and key extraction.
    ///
    /// Falls back to the strategy's default sort when `sort` is `None`.
    pub fn apply_sort(
        &self,
        items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<E> {
        let (sort, sort_dir) = match (sort, self.strategy.default_sort()) {
            (None, Some((field, dir))) => (Some(field), Some(dir)),
            _ => (sort, sort_dir),
        };
        apply_sort(
            items,
            sort,
            sort_dir,
            self.strategy.sortable_fields(),
            |item, field| self.strategy.sort_key(item, field),
        )
    }

    /// Sort stage with an explicit key getter overriding the strategy's.
    pub fn apply_sort_by(
        &self,
        items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
        getter: impl FnMut(&E, &str) -> SortKey,
    ) -> Vec<E> {
        apply_sort(items, sort, sort_dir, self.strategy.sortable_fields(), getter)
    }
}

impl<E: Entity, S: SearchStrategy<E> + Default> Default for InMemorySearchableRepository<E, S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[async_trait]
impl<E: Entity, S: SearchStrategy<E>> Repository<E> for InMemorySearchableRepository<E, S> {
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        self.store.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        self.store.bulk_insert(entities).await
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        self.store.update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()> {
        self.store.delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        self.store.find_all().await
    }
}

#[async_trait]
impl<E: Entity, S: SearchStrategy<E>> SearchableRepository<E>
    for InMemorySearchableRepository<E, S>
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.strategy.sortable_fields()
    }

    async fn search(&self, params: &SearchParams) -> RepositoryResult<SearchResult<E>> {
        let filtered = self.apply_filter(self.store.snapshot(), params.filter());
        let total = filtered.len() as u64;

        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir());
        let items = apply_paginate(sorted, params.page(), params.per_page());

        debug!(
            entity = E::NAME,
            total,
            page = params.page(),
            per_page = params.per_page(),
            returned = items.len(),
            "search completed"
        );
        Ok(SearchResult::new(items, total, params.page(), params.per_page()))
    }
}
