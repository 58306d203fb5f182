//! Catalog filter configuration.
//!
//! A [`FilterConfig`] is ephemeral: it is rebuilt from the current state of
//! the UI controls on every relevant input event and handed to the filter
//! pipeline, never stored.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;

/// Sort order for the visible product set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name ascending (lexicographic).
    #[default]
    NameAsc,
    /// Name descending.
    NameDesc,
    /// Price ascending (numeric).
    PriceAsc,
    /// Price descending.
    PriceDesc,
}

/// Error returned when parsing an unknown sort key string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl SortKey {
    /// The string value used by the sort selector control.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// The active filter controls, captured at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Category selector; `None` means all categories.
    pub category: Option<Category>,
    /// Upper bound from the price-range control (inclusive).
    pub max_price: Decimal,
    /// Free-text search over product names, case-insensitive substring.
    pub search: Option<String>,
    /// Active sort order.
    pub sort_key: SortKey,
}

impl Default for FilterConfig {
    /// Everything visible: no category, no search, a max price no catalog
    /// entry exceeds, default sort.
    fn default() -> Self {
        Self {
            category: None,
            max_price: Decimal::MAX,
            search: None,
            sort_key: SortKey::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        for key in [
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
        ] {
            let parsed: SortKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn test_sort_key_unknown_string() {
        let err = "rating-desc".parse::<SortKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sort key: rating-desc");
    }

    #[test]
    fn test_default_filter_hides_nothing() {
        let config = FilterConfig::default();
        assert!(config.category.is_none());
        assert!(config.search.is_none());
        assert_eq!(config.max_price, Decimal::MAX);
        assert_eq!(config.sort_key, SortKey::NameAsc);
    }
}
