//! Per-page-load controller.
//!
//! A [`PageSession`] models one page load: it owns a cart store over the
//! shared persisted storage, the display surface for this page's markup,
//! and the UI state that lives only as long as the page (applied coupon,
//! selected shipping zone, pending debounced recompute).
//!
//! Pages never trust an in-memory cart copy: every operation that needs
//! cart contents re-reads the persisted store, so independently-loaded
//! pages always agree on what the badge shows.

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use stride_core::{CouponState, FilterConfig, PriceBreakdown, Product, Zone};

use crate::cart::CartStore;
use crate::catalog::compute_visible;
use crate::config::StorefrontConfig;
use crate::debounce::Debouncer;
use crate::error::{Result, StorefrontError};
use crate::pricing::{compute_breakdown, lookup_coupon, zone_for_postal};
use crate::storage::StringStore;
use crate::surface::{DisplaySurface, Notice};
use crate::views::{BreakdownView, CartView, ProductCardView, escape_html};

/// One page load's worth of storefront behaviour.
pub struct PageSession<S: StringStore, D: DisplaySurface> {
    cart: CartStore<S>,
    surface: Arc<D>,
    catalog: Arc<Vec<Product>>,
    config: StorefrontConfig,
    debouncer: Debouncer,
    notice_timer: Mutex<Option<JoinHandle<()>>>,
    coupon: Option<CouponState>,
    zone: Zone,
}

impl<S, D> PageSession<S, D>
where
    S: StringStore,
    D: DisplaySurface + 'static,
{
    /// Create a session for a freshly loaded page.
    pub fn new(
        store: S,
        surface: Arc<D>,
        catalog: Arc<Vec<Product>>,
        config: StorefrontConfig,
    ) -> Self {
        let cart = CartStore::new(store, config.cart_storage_key.clone());
        let debouncer = Debouncer::new(config.debounce_window);
        Self {
            cart,
            surface,
            catalog,
            config,
            debouncer,
            notice_timer: Mutex::new(None),
            coupon: None,
            zone: Zone::DEFAULT,
        }
    }

    /// The coupon currently applied on this page, if any.
    #[must_use]
    pub const fn coupon(&self) -> Option<&CouponState> {
        self.coupon.as_ref()
    }

    /// The shipping zone currently selected on this page.
    #[must_use]
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// Page-load hook: re-read the persisted cart and set the badge.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn on_load(&self) -> Result<()> {
        let count = self.cart.count()?;
        self.surface.set_cart_count(count);
        Ok(())
    }

    /// Add a catalog product to the cart.
    ///
    /// On success the badge updates and a confirmation notice appears; an
    /// invalid product produces a rejection notice and leaves the cart
    /// unchanged. Neither case is an error to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn on_add_to_cart(&self, product: &Product, quantity: u32) -> Result<()> {
        match self.cart.add(product, quantity) {
            Ok(count) => {
                self.surface.set_cart_count(count);
                self.notify(Notice::success(format!(
                    "Added {} to your cart",
                    escape_html(&product.name)
                )));
                Ok(())
            }
            Err(StorefrontError::InvalidProduct(e)) => {
                warn!(error = %e, "rejected add-to-cart");
                self.notify(Notice::error("This item can't be added to the cart"));
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Add an untrusted product payload (e.g. read off control markup).
    ///
    /// Same boundary behaviour as [`Self::on_add_to_cart`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails.
    #[instrument(skip(self, payload))]
    pub fn on_add_untrusted(&self, payload: &Value, quantity: u32) -> Result<()> {
        match self.cart.add_untrusted(payload, quantity) {
            Ok(count) => {
                self.surface.set_cart_count(count);
                self.notify(Notice::success("Added to your cart"));
                Ok(())
            }
            Err(StorefrontError::InvalidProduct(e)) => {
                warn!(error = %e, "rejected add-to-cart payload");
                self.notify(Notice::error("This item can't be added to the cart"));
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn on_remove(&self, id: &str) -> Result<()> {
        let count = self.cart.remove(id)?;
        self.surface.set_cart_count(count);
        self.refresh_cart()
    }

    /// Change a cart line's quantity; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn on_quantity_change(&self, id: &str, quantity: u32) -> Result<()> {
        let count = self.cart.set_quantity(id, quantity)?;
        self.surface.set_cart_count(count);
        self.refresh_cart()
    }

    /// Re-render the cart page from the persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn refresh_cart(&self) -> Result<()> {
        let items = self.cart.load()?;
        self.surface.render_cart(&CartView::from(items.as_slice()));
        Ok(())
    }

    /// Apply a coupon code.
    ///
    /// An invalid code is a visible rejection, not a silent no-op: the
    /// discount drops to zero and an error notice appears.
    #[instrument(skip(self))]
    pub fn on_coupon_submit(&mut self, code: &str) {
        match lookup_coupon(code, &self.config) {
            Some(coupon) => {
                self.notify(Notice::success(format!(
                    "Coupon {} applied",
                    escape_html(&coupon.code)
                )));
                self.coupon = Some(coupon);
            }
            None => {
                debug!("rejected unknown coupon code");
                self.coupon = None;
                self.notify(Notice::error("That coupon code isn't valid"));
            }
        }
    }

    /// Update the shipping zone from a free-text postal code.
    #[instrument(skip(self))]
    pub fn on_shipping_input(&mut self, postal: &str) {
        self.zone = zone_for_postal(postal, &self.config);
        debug!(zone = ?self.zone, "shipping zone selected");
    }

    /// Compute the checkout totals from fresh persisted state and render
    /// them.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn render_checkout(&self) -> Result<PriceBreakdown> {
        let items = self.cart.load()?;
        let breakdown = compute_breakdown(&items, self.coupon.as_ref(), self.zone, &self.config);
        self.surface.render_breakdown(&BreakdownView::from(&breakdown));
        Ok(breakdown)
    }

    /// Filter controls changed: schedule a debounced recompute of the
    /// visible set, superseding any pending one.
    ///
    /// When the recompute fires it applies the result as a single batched
    /// grid replace, or the explicit no-matches state for an empty result.
    pub fn on_filter_change(&self, filter: FilterConfig) {
        let catalog = Arc::clone(&self.catalog);
        let surface = Arc::clone(&self.surface);
        self.debouncer.call(move || {
            let visible = compute_visible(&catalog, &filter);
            if visible.is_empty() {
                surface.show_no_matches();
            } else {
                let cards: Vec<ProductCardView> =
                    visible.into_iter().map(ProductCardView::from).collect();
                surface.replace_grid(&cards);
            }
        });
    }

    /// Show a notice and schedule its auto-clear, superseding the timer of
    /// any notice still on screen.
    fn notify(&self, notice: Notice) {
        self.surface.show_notice(&notice);

        let surface = Arc::clone(&self.surface);
        let ttl = self.config.notice_ttl;
        let mut timer = self
            .notice_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.abort();
        }
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            surface.clear_notice();
        }));
    }
}

impl<S: StringStore, D: DisplaySurface> Drop for PageSession<S, D> {
    fn drop(&mut self) {
        // Leaving the page cancels its pending auto-clear.
        let mut timer = self
            .notice_timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }
}
