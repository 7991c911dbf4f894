//! In-memory reference repository.
//!
//! # Invariants
//! - Items are kept in insertion order.
//! - Reads return owned clones; callers never hold references into the
//!   store, so mutating a returned entity has no effect until `update`.
//! - No isolation between concurrent callers is provided: the lock only
//!   guards individual operations and is never held across an `.await`.

use crate::{Repository, RepositoryResult};
use async_trait::async_trait;
use catalog_model::{Entity, NotFoundError};
use catalog_types::ValueObject;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Vector-backed store keyed by entity identity.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a repository pre-seeded with `items`, in order.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Returns a copy of every stored entity, in insertion order.
    pub fn snapshot(&self) -> Vec<E> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<E>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<E>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn position(items: &[E], id: &E::Id) -> Option<usize> {
        items
            .iter()
            .position(|item| item.entity_id().equals(Some(id)))
    }

    fn index_of(items: &[E], id: &E::Id) -> Result<usize, NotFoundError> {
        Self::position(items, id).ok_or_else(|| {
            warn!(entity = E::NAME, id = %id, "entity not found");
            NotFoundError::of::<E>(id)
        })
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        debug!(entity = E::NAME, id = %entity.entity_id(), "inserting entity");
        self.write().push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        debug!(entity = E::NAME, count = entities.len(), "bulk inserting entities");
        self.write().extend(entities);
        Ok(())
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        let mut items = self.write();
        let index = Self::index_of(&items, entity.entity_id())?;
        debug!(entity = E::NAME, id = %entity.entity_id(), "updating entity");
        items[index] = entity;
        Ok(())
    }

    async fn delete(&self, id: &E::Id) -> RepositoryResult<()> {
        let mut items = self.write();
        let index = Self::index_of(&items, id)?;
        debug!(entity = E::NAME, id = %id, "deleting entity");
        items.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> RepositoryResult<Option<E>> {
        let items = self.read();
        Ok(Self::position(&items, id).map(|index| items[index].clone()))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.snapshot())
    }
}
