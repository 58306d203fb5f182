//! Pricing types: breakdowns, coupons, shipping zones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed checkout totals.
///
/// Derived on demand from the cart, coupon, and shipping zone - never
/// persisted. All fields are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PriceBreakdown {
    /// Sum of `price * quantity` over all valid cart lines.
    pub items_total: Decimal,
    /// `items_total` times the deployment tax rate.
    pub tax: Decimal,
    /// Flat shipping cost for the selected zone; zero for an empty cart.
    pub shipping: Decimal,
    /// `items_total` times the applied coupon's discount rate.
    pub discount: Decimal,
    /// `items_total + tax + shipping - discount`, floored at zero.
    pub grand_total: Decimal,
}

/// An applied coupon: the code the shopper entered and the rate it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponState {
    /// Coupon code, matched case-sensitively against the static table.
    pub code: String,
    /// Discount rate in `[0, 1)` applied to the items total.
    pub discount_rate: Decimal,
}

/// A shipping-cost bucket derived from a postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    Local,
    Regional,
    National,
}

impl Zone {
    /// The zone used when a postal code matches no prefix in the table.
    pub const DEFAULT: Self = Self::National;
}

impl Default for Zone {
    fn default() -> Self {
        Self::DEFAULT
    }
}
