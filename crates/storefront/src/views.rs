//! Display view types and formatting.
//!
//! Views are what the engine hands to the display surface: plain structs of
//! pre-formatted strings. Every user-influenced string (product and line
//! names, descriptions) is HTML-escaped here, so a stored name like
//! `<script>...</script>` always renders as literal text.

use rust_decimal::Decimal;

use stride_core::{CartLineItem, PriceBreakdown, Product};

/// Format an amount as a display price string (e.g., `$19.99`).
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Escape a string for literal rendering inside HTML text content.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    pub image: Option<String>,
}

impl From<&CartLineItem> for CartItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: escape_html(&item.name),
            quantity: item.quantity,
            price: format_price(item.price),
            line_total: format_price(item.line_total()),
            image: item.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&[CartLineItem]> for CartView {
    fn from(items: &[CartLineItem]) -> Self {
        let subtotal: Decimal = items.iter().map(CartLineItem::line_total).sum();
        let item_count = items.iter().map(|i| i.quantity).fold(0, u32::saturating_add);
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            subtotal: format_price(subtotal),
            item_count,
        }
    }
}

/// Checkout totals, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownView {
    pub items_total: String,
    pub tax: String,
    pub shipping: String,
    pub discount: String,
    pub grand_total: String,
}

impl From<&PriceBreakdown> for BreakdownView {
    fn from(breakdown: &PriceBreakdown) -> Self {
        Self {
            items_total: format_price(breakdown.items_total),
            tax: format_price(breakdown.tax),
            shipping: format_price(breakdown.shipping),
            discount: format_price(breakdown.discount),
            grand_total: format_price(breakdown.grand_total),
        }
    }
}

/// Product card display data for the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: &'static str,
    pub description: String,
    pub image: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: escape_html(&product.name),
            price: format_price(product.price),
            category: product.category.as_str(),
            description: escape_html(&product.description),
            image: product.image.clone(),
        }
    }
}
