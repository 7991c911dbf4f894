//! Repository layer for the catalog domain.
//!
//! Provides the persistence-agnostic contracts and an in-memory reference
//! implementation that any real store must behave identically to.
//!
//! # Architecture
//!
//! - [`Repository`] is the async CRUD contract keyed by entity identity
//! - [`SearchableRepository`] adds `search` over [`SearchParams`]
//! - [`SearchParams`] normalizes loose [`SearchInput`] into canonical values
//! - Search runs filter → sort → paginate and wraps the page in a [`SearchResult`]
//! - [`InMemorySearchableRepository`] delegates filtering and sort-key
//!   extraction to a per-entity [`SearchStrategy`]

mod coerce;
mod error;
mod in_memory;
pub mod pipeline;
mod repository;
mod search_params;
mod search_result;
mod searchable;
mod sort;

pub use error::{RepositoryError, RepositoryResult};
pub use in_memory::InMemoryRepository;
pub use repository::{Repository, SearchableRepository};
pub use search_params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchDefaults, SearchInput, SearchParams, SortDirection,
};
pub use search_result::SearchResult;
pub use searchable::{InMemorySearchableRepository, SearchStrategy};
pub use sort::SortKey;
