use super::{CategoryOutput, UseCase};
use crate::{Category, CategoryRepository};
use async_trait::async_trait;
use catalog_model::NotFoundError;
use catalog_repository::RepositoryResult;
use catalog_types::EntityId;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::info;

/// Partial update of a category. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateCategoryInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// `Some(None)` clears the description; `None` keeps it.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = Some(description.map(str::to_string));
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Distinguishes an explicit `null` from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Applies a partial update to an existing category.
pub struct UpdateCategory {
    repository: Arc<dyn CategoryRepository>,
}

impl UpdateCategory {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<UpdateCategoryInput> for UpdateCategory {
    type Output = CategoryOutput;

    async fn execute(&self, input: UpdateCategoryInput) -> RepositoryResult<CategoryOutput> {
        let id = EntityId::parse(&input.id)?;
        let mut category = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| NotFoundError::of::<Category>(&id))?;

        // An empty name keeps the current one.
        if let Some(name) = input.name.filter(|name| !name.is_empty()) {
            category.change_name(name)?;
        }
        if let Some(description) = input.description {
            category.change_description(description)?;
        }
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.repository.update(category.clone()).await?;

        info!(%id, "category updated");
        Ok(CategoryOutput::from(category))
    }
}
