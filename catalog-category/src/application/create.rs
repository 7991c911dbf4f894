use super::{CategoryOutput, UseCase};
use crate::{Category, CategoryProps, CategoryRepository};
use async_trait::async_trait;
use catalog_repository::RepositoryResult;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Validates and stores a new category.
pub struct CreateCategory {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<CreateCategoryInput> for CreateCategory {
    type Output = CategoryOutput;

    async fn execute(&self, input: CreateCategoryInput) -> RepositoryResult<CategoryOutput> {
        let category = Category::create(CategoryProps {
            name: input.name,
            description: input.description,
            is_active: input.is_active,
            ..CategoryProps::default()
        })?;
        self.repository.insert(category.clone()).await?;

        info!(id = %category.category_id(), name = category.name(), "category created");
        Ok(CategoryOutput::from(category))
    }
}
