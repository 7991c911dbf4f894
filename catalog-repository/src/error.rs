//! Error types for the repository layer.

use catalog_model::{EntityValidationError, NotFoundError};
use catalog_types::InvalidUuidError;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repositories and the code built on them.
///
/// Every store reports the same kinds so callers stay implementation-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No entity with the requested identity exists.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The entity violated one or more field rules.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    /// A supplied identifier was not a valid UUID.
    #[error(transparent)]
    InvalidUuid(#[from] InvalidUuidError),
}
