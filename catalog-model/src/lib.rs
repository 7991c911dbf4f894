//! Core entity model for the catalog domain.
//!
//! Defines the contracts every aggregate and repository depends on:
//! - [`Entity`]: an identity value object plus a plain JSON projection
//! - [`EntityType`]: the static descriptor a repository reports for its entity
//! - [`NotFoundError`]: uniform "missing identity" failure
//! - [`EntityValidationError`] / [`ValidatorFields`]: field-level rule violations
//!
//! Repositories consume these types without knowing any concrete aggregate.

mod entity;
mod error;
mod validation;

pub use entity::{Entity, EntityType};
pub use error::NotFoundError;
pub use validation::{EntityValidationError, FieldErrors, ValidatorFields};
