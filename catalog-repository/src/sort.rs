//! Comparable sort values extracted from entities.

use serde_json::Value;
use std::cmp::Ordering;

/// A field value reduced to something the sort comparator understands.
///
/// Values of the same kind compare naturally; values of different kinds,
/// and NaN, compare as equal so the stable sort keeps their original order.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Null,
    Bool(bool),
    Number(f64),
    /// Compared by code point.
    Text(String),
    /// Microseconds since the Unix epoch.
    Timestamp(i64),
}

impl SortKey {
    /// Reads a sort key from a JSON field; missing fields are `Null`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(Value::Bool(flag)) => Self::Bool(*flag),
            Some(Value::Number(number)) => number.as_f64().map_or(Self::Null, Self::Number),
            Some(Value::String(text)) => Self::Text(text.clone()),
            Some(other) => Self::Text(other.to_string()),
        }
    }

    /// Total comparator used by the search pipeline.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SortKey {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for SortKey {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for SortKey {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<SortKey>> From<Option<T>> for SortKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::SortKey;
    use serde_json::json;
    use std::cmp::Ordering;

    #[test]
    fn same_kind_compares_naturally() {
        assert_eq!(SortKey::from("a").compare(&SortKey::from("b")), Ordering::Less);
        assert_eq!(SortKey::from(2.0).compare(&SortKey::from(1.0)), Ordering::Greater);
        assert_eq!(SortKey::Timestamp(5).compare(&SortKey::Timestamp(5)), Ordering::Equal);
        assert_eq!(SortKey::from(false).compare(&SortKey::from(true)), Ordering::Less);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        assert_eq!(SortKey::from("B").compare(&SortKey::from("a")), Ordering::Less);
    }

    #[test]
    fn mixed_kinds_and_nan_tie() {
        assert_eq!(SortKey::from("a").compare(&SortKey::from(1.0)), Ordering::Equal);
        assert_eq!(SortKey::Null.compare(&SortKey::from("a")), Ordering::Equal);
        assert_eq!(SortKey::from(f64::NAN).compare(&SortKey::from(1.0)), Ordering::Equal);
    }

    #[test]
    fn reads_json_fields() {
        let record = json!({ "name": "x", "price": 5, "active": true, "tags": ["a"] });
        assert_eq!(SortKey::from_json(record.get("name")), SortKey::from("x"));
        assert_eq!(SortKey::from_json(record.get("price")), SortKey::from(5.0));
        assert_eq!(SortKey::from_json(record.get("active")), SortKey::from(true));
        assert_eq!(SortKey::from_json(record.get("tags")), SortKey::from("[\"a\"]"));
        assert_eq!(SortKey::from_json(record.get("missing")), SortKey::Null);
    }
}
