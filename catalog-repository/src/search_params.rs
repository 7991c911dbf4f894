//! Search parameter normalization.
//!
//! Raw [`SearchInput`] is untrusted and loosely typed. [`SearchParams`]
//! is its canonical form: every malformed field falls back to one
//! deterministic default, so building params never fails.

use crate::coerce::{positive_integer, to_number, to_text};
use catalog_types::ValueObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Page used when the requested one is missing or malformed.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the requested one is missing or malformed.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Sort order applied to the sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-level defaults for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    /// Page size used when the input carries none (or a malformed one).
    pub per_page: u64,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Raw search request as received from a transport boundary.
///
/// Every field accepts any JSON value; a missing field and `null` behave
/// the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchInput {
    pub page: Option<Value>,
    #[serde(alias = "perPage")]
    pub per_page: Option<Value>,
    pub sort: Option<Value>,
    #[serde(alias = "sortDir")]
    pub sort_dir: Option<Value>,
    pub filter: Option<Value>,
}

impl SearchInput {
    #[must_use]
    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    #[must_use]
    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn sort_dir(mut self, sort_dir: impl Into<Value>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Canonical, immutable search parameters.
///
/// # Invariants
/// - `page` and `per_page` are positive integers.
/// - `sort_dir` is `Some` iff `sort` is `Some`.
/// - `sort` and `filter` are never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchParams {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl SearchParams {
    /// Normalizes raw input using the default page size.
    pub fn from_input(input: SearchInput) -> Self {
        Self::from_input_with(input, &SearchDefaults::default())
    }

    /// Normalizes raw input using host-supplied defaults.
    pub fn from_input_with(input: SearchInput, defaults: &SearchDefaults) -> Self {
        let default_per_page = defaults.per_page.max(1);
        let sort = normalize_text(input.sort.as_ref());
        let sort_dir = sort
            .as_ref()
            .map(|_| normalize_sort_dir(input.sort_dir.as_ref()));

        Self {
            page: normalize_page(input.page.as_ref()),
            per_page: normalize_per_page(input.per_page.as_ref(), default_per_page),
            sort,
            sort_dir,
            filter: normalize_text(input.filter.as_ref()),
        }
    }

    /// 1-based page index.
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from_input(SearchInput::default())
    }
}

impl From<SearchInput> for SearchParams {
    fn from(input: SearchInput) -> Self {
        Self::from_input(input)
    }
}

impl ValueObject for SearchParams {}

fn normalize_page(raw: Option<&Value>) -> u64 {
    coerce_positive(raw).unwrap_or(DEFAULT_PAGE)
}

/// A literal `true` keeps the current page size rather than coercing to 1.
fn normalize_per_page(raw: Option<&Value>, current: u64) -> u64 {
    match raw {
        Some(Value::Bool(true)) => current,
        raw => coerce_positive(raw).unwrap_or(current),
    }
}

/// Absent input coerces to NaN, so it always falls back.
fn coerce_positive(raw: Option<&Value>) -> Option<u64> {
    positive_integer(raw.map_or(f64::NAN, to_number))
}

fn normalize_text(raw: Option<&Value>) -> Option<String> {
    match raw {
        None | Some(Value::Null) => None,
        Some(value) => Some(to_text(value)).filter(|text| !text.is_empty()),
    }
}

fn normalize_sort_dir(raw: Option<&Value>) -> SortDirection {
    match raw.map(to_text).map(|dir| dir.to_lowercase()).as_deref() {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    }
}
