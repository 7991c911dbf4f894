use crate::Category;
use catalog_repository::{
    InMemorySearchableRepository, SearchStrategy, SearchableRepository, SortDirection, SortKey,
};

/// Any searchable store of categories.
pub trait CategoryRepository: SearchableRepository<Category> {}

impl<T: SearchableRepository<Category> + ?Sized> CategoryRepository for T {}

/// Category search: case-insensitive name filter, newest first unless a
/// sort field is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySearchStrategy;

impl SearchStrategy<Category> for CategorySearchStrategy {
    fn sortable_fields(&self) -> &[&'static str] {
        &["name", "created_at"]
    }

    fn matches(&self, item: &Category, filter: &str) -> bool {
        item.name().to_lowercase().contains(&filter.to_lowercase())
    }

    fn sort_key(&self, item: &Category, field: &str) -> SortKey {
        match field {
            "name" => SortKey::from(item.name()),
            "created_at" => SortKey::Timestamp(item.created_at().timestamp_micros()),
            _ => SortKey::Null,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchStrategy>;
