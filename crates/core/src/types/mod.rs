//! Shared storefront types.

pub mod cart;
pub mod category;
pub mod filter;
pub mod pricing;
pub mod product;

pub use cart::CartLineItem;
pub use category::{Category, ParseCategoryError};
pub use filter::{FilterConfig, ParseSortKeyError, SortKey};
pub use pricing::{CouponState, PriceBreakdown, Zone};
pub use product::Product;
