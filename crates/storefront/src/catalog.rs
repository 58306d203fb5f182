//! Catalog filter/sort pipeline.
//!
//! Given the static catalog and the current [`FilterConfig`], produce the
//! ordered visible subset. Deterministic and reproducible: the sort is
//! stable, so products that compare equal under the active sort key keep
//! the catalog's original relative order.

use std::cmp::Ordering;

use stride_core::{FilterConfig, Product, SortKey};

/// Compute the visible product set for the current filter controls.
///
/// Filters to products matching the category (all when unset), priced at or
/// under `max_price`, and - when a search term is set - containing it in
/// the name, case-insensitively. The result is sorted by `sort_key` with
/// ties broken by catalog order. An empty result is a normal value; the
/// page layer renders the explicit no-matches state for it.
#[must_use]
pub fn compute_visible<'a>(catalog: &'a [Product], config: &FilterConfig) -> Vec<&'a Product> {
    let needle = config
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut visible: Vec<&Product> = catalog
        .iter()
        .filter(|product| {
            config
                .category
                .is_none_or(|category| product.category == category)
        })
        .filter(|product| product.price <= config.max_price)
        .filter(|product| {
            needle
                .as_deref()
                .is_none_or(|needle| product.name.to_lowercase().contains(needle))
        })
        .collect();

    // slice::sort_by is stable; equal keys keep catalog order.
    visible.sort_by(|a, b| compare(a, b, config.sort_key));
    visible
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => a.name.cmp(&b.name),
        SortKey::NameDesc => b.name.cmp(&a.name),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
    }
}
