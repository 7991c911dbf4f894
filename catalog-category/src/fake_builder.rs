//! Builder for realistic test categories.

use crate::{Category, CategoryProps, NAME_MAX_LENGTH};
use catalog_types::EntityId;
use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;

/// Produces a field value for the `index`-th built category.
type Factory<T> = Box<dyn Fn(usize) -> T + Send + Sync>;

/// Builds one or many categories with random but valid fields.
///
/// Every field can be pinned to a value or computed from the category's
/// position in the batch. Unpinned ids and creation times are fresh per
/// category.
pub struct CategoryFakeBuilder {
    count: usize,
    category_id: Option<Factory<EntityId>>,
    name: Factory<String>,
    description: Factory<Option<String>>,
    is_active: bool,
    created_at: Option<Factory<DateTime<Utc>>>,
}

impl CategoryFakeBuilder {
    pub fn a_category() -> Self {
        Self::the_categories(1)
    }

    pub fn the_categories(count: usize) -> Self {
        Self {
            count,
            category_id: None,
            name: Box::new(|_| Name().fake()),
            description: Box::new(|_| Some(Paragraph(1..3).fake())),
            is_active: true,
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.category_id = Some(Box::new(move |_| id));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = Box::new(move |_| name.clone());
        self
    }

    /// Names each category from its batch index.
    pub fn with_name_fn(mut self, name: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.name = Box::new(name);
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        let description = description.map(str::to_string);
        self.description = Box::new(move |_| description.clone());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(Box::new(move |_| created_at));
        self
    }

    /// Stamps each category from its batch index.
    pub fn with_created_at_fn(
        mut self,
        created_at: impl Fn(usize) -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        self.created_at = Some(Box::new(created_at));
        self
    }

    pub fn activate(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn deactivate(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Uses a name one character over the limit.
    pub fn with_invalid_name_too_long(self) -> Self {
        self.with_name("t".repeat(NAME_MAX_LENGTH + 1))
    }

    /// Builds the first category of the batch.
    pub fn build(&self) -> Category {
        self.build_at(0)
    }

    /// Builds every category of the batch, in index order.
    pub fn build_many(&self) -> Vec<Category> {
        (0..self.count).map(|index| self.build_at(index)).collect()
    }

    fn build_at(&self, index: usize) -> Category {
        Category::new(CategoryProps {
            category_id: self.category_id.as_ref().map(|id| id(index)),
            name: (self.name)(index),
            description: (self.description)(index),
            is_active: Some(self.is_active),
            created_at: self.created_at.as_ref().map(|created_at| created_at(index)),
        })
    }
}
