use super::UseCase;
use crate::CategoryRepository;
use async_trait::async_trait;
use catalog_repository::RepositoryResult;
use catalog_types::EntityId;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: String,
}

impl DeleteCategoryInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Removes a category, failing with `NotFound` when it does not exist.
pub struct DeleteCategory {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryInput> for DeleteCategory {
    type Output = ();

    async fn execute(&self, input: DeleteCategoryInput) -> RepositoryResult<()> {
        let id = EntityId::parse(&input.id)?;
        self.repository.delete(&id).await?;

        info!(%id, "category deleted");
        Ok(())
    }
}
