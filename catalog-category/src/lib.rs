//! The category aggregate of the catalog.
//!
//! - [`Category`]: the entity, validated on creation and on every rename
//! - [`CategoryInMemoryRepository`]: searchable store filtering by name and
//!   listing newest first by default
//! - [`application`]: create / update / get / list / delete use cases

pub mod application;
mod category;
mod fake_builder;
mod repository;
mod validator;

pub use category::{Category, CategoryProps};
pub use fake_builder::CategoryFakeBuilder;
pub use repository::{CategoryInMemoryRepository, CategoryRepository, CategorySearchStrategy};
pub use validator::{CategoryValidator, NAME_MAX_LENGTH};
