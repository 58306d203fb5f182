//! Shared fixtures for the Stride integration tests.
//!
//! The tests here exercise cross-page behaviour: two independently-created
//! [`stride_storefront::PageSession`]s sharing one
//! [`stride_storefront::MemoryStore`] clone stand in for two page loads
//! sharing the browser's persisted storage.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Mutex;

use rust_decimal::Decimal;

use stride_core::{Category, Product};
use stride_storefront::DisplaySurface;
use stride_storefront::surface::Notice;
use stride_storefront::views::{BreakdownView, CartView, ProductCardView};

/// Initialize tracing for a test binary. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "stride_storefront=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A small static catalog covering every category, with a price tie.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    fn product(id: &str, name: &str, cents: i64, category: Category) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            category,
            description: format!("The {name}."),
            image: Some(format!("https://cdn.stride.example/{id}.jpg")),
        }
    }

    vec![
        product("tempo-racer", "Tempo Racer", 12999, Category::Running),
        product("aero-glide-2", "Aero Glide 2", 8999, Category::Running),
        product("ridge-runner", "Ridge Runner", 9499, Category::Trail),
        product("drift-slip-on", "Drift Slip-On", 5999, Category::Lifestyle),
        product("split-visor", "Split Visor", 2499, Category::Accessories),
        // Same price as Aero Glide 2, for sort-stability checks.
        product("dash-light", "Dash Light", 8999, Category::Running),
    ]
}

/// Events a [`RecordingSurface`] has observed, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    CartCount(u32),
    Grid(Vec<ProductCardView>),
    NoMatches,
    Cart(CartView),
    Breakdown(BreakdownView),
    Notice(Notice),
    NoticeCleared,
}

/// A [`DisplaySurface`] that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything observed so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the event lock panicked.
    #[must_use]
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// The most recent cart badge value, if any was set.
    #[must_use]
    pub fn last_count(&self) -> Option<u32> {
        self.events().iter().rev().find_map(|event| match event {
            SurfaceEvent::CartCount(count) => Some(*count),
            _ => None,
        })
    }

    /// The most recent notice, if one was shown.
    #[must_use]
    pub fn last_notice(&self) -> Option<Notice> {
        self.events().iter().rev().find_map(|event| match event {
            SurfaceEvent::Notice(notice) => Some(notice.clone()),
            _ => None,
        })
    }

    /// All grid replaces observed so far.
    #[must_use]
    pub fn grids(&self) -> Vec<Vec<ProductCardView>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Grid(cards) => Some(cards),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: SurfaceEvent) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_cart_count(&self, count: u32) {
        self.record(SurfaceEvent::CartCount(count));
    }

    fn replace_grid(&self, cards: &[ProductCardView]) {
        self.record(SurfaceEvent::Grid(cards.to_vec()));
    }

    fn show_no_matches(&self) {
        self.record(SurfaceEvent::NoMatches);
    }

    fn render_cart(&self, cart: &CartView) {
        self.record(SurfaceEvent::Cart(cart.clone()));
    }

    fn render_breakdown(&self, breakdown: &BreakdownView) {
        self.record(SurfaceEvent::Breakdown(breakdown.clone()));
    }

    fn show_notice(&self, notice: &Notice) {
        self.record(SurfaceEvent::Notice(notice.clone()));
    }

    fn clear_notice(&self) {
        self.record(SurfaceEvent::NoticeCleared);
    }
}
