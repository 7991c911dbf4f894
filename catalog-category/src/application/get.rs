use super::{CategoryOutput, UseCase};
use crate::{Category, CategoryRepository};
use async_trait::async_trait;
use catalog_model::NotFoundError;
use catalog_repository::RepositoryResult;
use catalog_types::EntityId;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetCategoryInput {
    pub id: String,
}

impl GetCategoryInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Looks up one category, failing with `NotFound` when it does not exist.
pub struct GetCategory {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<GetCategoryInput> for GetCategory {
    type Output = CategoryOutput;

    async fn execute(&self, input: GetCategoryInput) -> RepositoryResult<CategoryOutput> {
        let id = EntityId::parse(&input.id)?;
        let category = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| NotFoundError::of::<Category>(&id))?;

        Ok(CategoryOutput::from(category))
    }
}
