//! Field-level validation contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rule violations grouped by field name, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty set of violations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Turns the collected violations into a result.
    pub fn into_result(self) -> Result<(), EntityValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError::new(self))
        }
    }
}

/// One or more field-level rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EntityValidationError {
    pub errors: FieldErrors,
    message: String,
}

impl EntityValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self::with_message(errors, "Validation Error")
    }

    pub fn with_message(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors,
            message: message.into(),
        }
    }
}

/// Validates a value against a set of field rules.
///
/// Implementors collect every violated rule instead of stopping at the
/// first one, so callers can report all problems at once.
pub trait ValidatorFields<T: ?Sized> {
    /// Returns the violations found in `data`; empty when it is valid.
    fn check(&self, data: &T) -> FieldErrors;

    /// Validates `data`, failing with every violation found.
    fn validate(&self, data: &T) -> Result<(), EntityValidationError> {
        self.check(data).into_result()
    }
}
