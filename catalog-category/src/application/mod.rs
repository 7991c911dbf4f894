//! Category use cases.
//!
//! Each use case owns a shared handle to a [`CategoryRepository`](crate::CategoryRepository) and
//! exposes a single `execute`. Ids arrive as strings and are parsed here, so
//! a malformed id fails with `InvalidUuid` before the store is touched.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateCategory, CreateCategoryInput};
pub use delete::{DeleteCategory, DeleteCategoryInput};
pub use get::{GetCategory, GetCategoryInput};
pub use list::{ListCategories, ListCategoriesOutput};
pub use update::{UpdateCategory, UpdateCategoryInput};

use crate::Category;
use async_trait::async_trait;
use catalog_repository::RepositoryResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An application operation with one input and one output.
#[async_trait]
pub trait UseCase<Input: Send + 'static>: Send + Sync {
    type Output;

    async fn execute(&self, input: Input) -> RepositoryResult<Self::Output>;
}

/// Category as returned to callers of the use cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}
