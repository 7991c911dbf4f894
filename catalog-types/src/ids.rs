//! Identifier types used throughout the catalog domain.
//!
//! Uses random UUID v4 values rendered in canonical hyphenated form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::ValueObject;

/// Length of the canonical hyphenated UUID form.
const CANONICAL_LEN: usize = 36;

/// Raised when a supplied string is not a syntactically valid UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ID must be a valid UUID: {value}")]
pub struct InvalidUuidError {
    /// The rejected input, verbatim.
    pub value: String,
}

/// Unique identifier for an entity.
///
/// Equality is content-based, so two ids parsed from the same string are
/// interchangeable for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a fresh random entity ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an entity ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parses an entity ID from its canonical 36-character form.
    ///
    /// Braced, URN and un-hyphenated spellings are rejected even though the
    /// `uuid` crate would accept them.
    pub fn parse(s: &str) -> Result<Self, InvalidUuidError> {
        if s.len() != CANONICAL_LEN {
            return Err(InvalidUuidError { value: s.to_string() });
        }
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| InvalidUuidError { value: s.to_string() })
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for EntityId {}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EntityId {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EntityId {
    type Error = InvalidUuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
