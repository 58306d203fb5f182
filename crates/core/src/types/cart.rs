//! Cart line item type.
//!
//! This is the persisted cart schema: one JSON array of these objects under
//! a single storage key. There is no version field - any persisted shape
//! that fails validation is treated as absent or dropped per line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a product id plus the quantity being bought.
///
/// Invariants (enforced at the ingestion boundary, not by construction):
/// `id` and `name` are non-empty, `price > 0`, `quantity >= 1`. Untrusted
/// data must go through the storefront crate's validator rather than being
/// deserialized directly into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier; unique key within the cart.
    pub id: String,
    /// Product display name, stored verbatim and escaped at render time.
    pub name: String,
    /// Unit price at the time the item was added.
    pub price: Decimal,
    /// Number of units. Always `>= 1`; a quantity of zero removes the line.
    pub quantity: u32,
    /// Optional product image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: "aero-glide-2".to_string(),
            name: "Aero Glide 2".to_string(),
            price,
            quantity,
            image: None,
        }
    }

    #[test]
    fn test_line_total() {
        let item = line(Decimal::new(4999, 2), 3);
        assert_eq!(item.line_total(), Decimal::new(14997, 2));
    }

    #[test]
    fn test_serde_round_trip() {
        let item = line(Decimal::new(12050, 2), 2);
        let json = serde_json::to_string(&item).unwrap();
        let back: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_price_serializes_as_number() {
        // The persisted blob uses plain JSON numbers for prices.
        let item = line(Decimal::new(5000, 2), 1);
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("price").unwrap().is_number());
    }

    #[test]
    fn test_absent_image_omitted() {
        let item = line(Decimal::ONE, 1);
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("image"));
    }
}
