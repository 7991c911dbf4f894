//! Error raised when an identity cannot be resolved.

use crate::{Entity, EntityType};
use std::fmt::Display;

/// No entity with the given identity (or identities) exists.
///
/// Carries the rendered ids and the bound entity type so every store
/// reports the same message for the same miss.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id(s) {ids} not found", ids = .ids.join(", "))]
pub struct NotFoundError {
    pub ids: Vec<String>,
    pub entity: EntityType,
}

impl NotFoundError {
    /// Builds the error for a single missing id.
    pub fn new(id: &impl Display, entity: EntityType) -> Self {
        Self {
            ids: vec![id.to_string()],
            entity,
        }
    }

    /// Builds the error for several missing ids, keeping their order.
    pub fn many<I, T>(ids: I, entity: EntityType) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        Self {
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
            entity,
        }
    }

    /// Builds the error for a missing id of entity type `E`.
    pub fn of<E: Entity>(id: &E::Id) -> Self {
        Self::new(id, E::entity_type())
    }
}
