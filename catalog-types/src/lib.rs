//! Core value types for the catalog domain.
//!
//! This crate defines the identity primitives every other layer builds on:
//! - [`ValueObject`]: content-compared, identity-less values
//! - [`EntityId`]: the UUID identifier carried by every entity
//!
//! Entity contracts, repositories and concrete aggregates live in the
//! crates layered above this one.

mod ids;
mod value_object;

pub use ids::{EntityId, InvalidUuidError};
pub use value_object::ValueObject;
