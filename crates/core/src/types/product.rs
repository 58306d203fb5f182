//! Catalog product type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A product in the static catalog.
///
/// Catalog data is read-only: products are defined once per deployment and
/// never mutated by user actions. Prices are always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (e.g., a slug like `"aero-glide-2"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency. Always `> 0` for catalog entries.
    pub price: Decimal,
    /// Category this product is listed under.
    pub category: Category,
    /// Short description shown on product cards.
    #[serde(default)]
    pub description: String,
    /// Optional product image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
