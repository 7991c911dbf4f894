use crate::Category;
use catalog_model::{FieldErrors, ValidatorFields};

/// Longest accepted category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// Field rules for [`Category`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryValidator;

impl ValidatorFields<Category> for CategoryValidator {
    fn check(&self, category: &Category) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let name = category.name();

        if name.is_empty() {
            errors.add("name", "name should not be empty");
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            errors.add(
                "name",
                format!("name must be shorter than or equal to {NAME_MAX_LENGTH} characters"),
            );
        }

        errors
    }
}
