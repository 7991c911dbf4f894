use catalog_model::{EntityValidationError, FieldErrors, ValidatorFields};
use pretty_assertions::assert_eq;
use serde_json::json;

struct Rules {
    min_len: usize,
}

impl ValidatorFields<str> for Rules {
    fn check(&self, data: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if data.is_empty() {
            errors.add("value", "value should not be empty");
        }
        if data.len() < self.min_len {
            errors.add("value", format!("value must be at least {} characters", self.min_len));
        }
        errors
    }
}

// ── FieldErrors ──────────────────────────────────────────────────

#[test]
fn field_errors_group_messages_per_field() {
    let mut errors = FieldErrors::new();
    errors.add("name", "a");
    errors.add("name", "b");
    errors.add("description", "c");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("name").unwrap(), ["a", "b"]);
    assert_eq!(errors.get("description").unwrap(), ["c"]);
    assert!(errors.get("missing").is_none());

    let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, ["description", "name"]);
}

#[test]
fn field_errors_serialize_as_map() {
    let mut errors = FieldErrors::new();
    errors.add("name", "name should not be empty");
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({ "name": ["name should not be empty"] })
    );
}

#[test]
fn empty_field_errors_are_ok() {
    assert!(FieldErrors::new().into_result().is_ok());
}

// ── ValidatorFields ──────────────────────────────────────────────

#[test]
fn validator_collects_every_violation() {
    let err = Rules { min_len: 3 }.validate("").unwrap_err();
    assert_eq!(err.to_string(), "Validation Error");
    assert_eq!(
        err.errors.get("value").unwrap(),
        ["value should not be empty", "value must be at least 3 characters"]
    );
}

#[test]
fn validator_accepts_valid_input() {
    assert!(Rules { min_len: 3 }.validate("abcd").is_ok());
}

#[test]
fn custom_message_is_kept() {
    let err = EntityValidationError::with_message(FieldErrors::new(), "Category is invalid");
    assert_eq!(err.to_string(), "Category is invalid");
}
