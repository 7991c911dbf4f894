//! Repository contracts.
//!
//! Every operation is async even for in-process stores, so an
//! out-of-process implementation can be swapped in without changing
//! any signature.

use crate::{RepositoryResult, SearchParams, SearchResult};
use async_trait::async_trait;
use catalog_model::{Entity, EntityType};

/// CRUD access to a collection of entities keyed by identity.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Appends an entity. No uniqueness check is made at this layer.
    async fn insert(&self, entity: E) -> RepositoryResult<()>;

    /// Appends all entities, preserving their order.
    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()>;

    /// Replaces the stored entity with the same identity wholesale.
    ///
    /// Fails with `NotFound` when no such entity exists.
    async fn update(&self, entity: E) -> RepositoryResult<()>;

    /// Removes the entity with the given identity.
    ///
    /// Fails with `NotFound` when no such entity exists.
    async fn delete(&self, id: &E::Id) -> RepositoryResult<()>;

    /// Returns the entity with the given identity, or `None`. Never fails
    /// for a missing id.
    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>>;

    /// Returns every entity in insertion order.
    async fn find_all(&self) -> RepositoryResult<Vec<E>>;

    /// Returns the entity type this repository is bound to.
    fn entity_type(&self) -> EntityType {
        E::entity_type()
    }
}

/// A repository that also supports filtered, sorted, paginated search.
#[async_trait]
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Field names accepted as sort keys; any other `sort` is ignored.
    fn sortable_fields(&self) -> &[&'static str];

    /// Runs filter → sort → paginate over the stored entities.
    async fn search(&self, params: &SearchParams) -> RepositoryResult<SearchResult<E>>;
}
