use crate::{CategoryFakeBuilder, CategoryValidator};
use catalog_model::{Entity, EntityValidationError, ValidatorFields};
use catalog_types::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fields accepted when building a [`Category`]. Unset fields take their
/// defaults: a fresh id, no description, active, created now.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryProps {
    pub category_id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    category_id: EntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Builds a category from `props` without validating it.
    ///
    /// Used to rehydrate stored categories; new ones go through
    /// [`Category::create`].
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Builds and validates a new category.
    pub fn create(props: CategoryProps) -> Result<Self, EntityValidationError> {
        let category = Self::new(props);
        category.validate()?;
        Ok(category)
    }

    /// Renames the category. On a validation failure the category is left
    /// unchanged.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let candidate = Self {
            name: name.into(),
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Replaces (or clears) the description.
    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let candidate = Self {
            description,
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn validate(&self) -> Result<(), EntityValidationError> {
        CategoryValidator.validate(self)
    }

    pub fn category_id(&self) -> &EntityId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Starts a builder producing one test category.
    pub fn fake() -> CategoryFakeBuilder {
        CategoryFakeBuilder::a_category()
    }
}

impl Entity for Category {
    type Id = EntityId;
    const NAME: &'static str = "Category";

    fn entity_id(&self) -> &EntityId {
        &self.category_id
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "category_id": self.category_id.to_string(),
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at,
        })
    }
}
