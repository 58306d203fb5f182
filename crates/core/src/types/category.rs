//! Product category enumeration.
//!
//! Categories are a closed set: the catalog is static and every product
//! belongs to exactly one of these. UI controls submit the kebab-case
//! string form, which round-trips through [`Category::as_str`] / `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The known product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Running,
    Trail,
    Lifestyle,
    Accessories,
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::Running,
        Self::Trail,
        Self::Lifestyle,
        Self::Accessories,
    ];

    /// The kebab-case string used by UI controls and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Trail => "trail",
            Self::Lifestyle => "lifestyle",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "trail" => Ok(Self::Trail),
            "lifestyle" => Ok(Self::Lifestyle),
            "accessories" => Ok(Self::Accessories),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_unknown_string() {
        let err = "sandals".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: sandals");
    }

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&Category::Running).unwrap();
        assert_eq!(json, "\"running\"");

        let parsed: Category = serde_json::from_str("\"accessories\"").unwrap();
        assert_eq!(parsed, Category::Accessories);
    }
}
