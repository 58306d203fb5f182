//! Display surface contract.
//!
//! The engine never touches page markup directly. Everything user-visible
//! goes through this trait: the cart badge, the catalog grid, the rendered
//! cart and checkout totals, and the transient notification region.
//! Implementations live with the page markup; the integration tests provide
//! a recording implementation.

use crate::views::{BreakdownView, CartView, ProductCardView};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification shown in the page's notification region.
///
/// Notices auto-clear: the page controller schedules a
/// [`DisplaySurface::clear_notice`] call after the configured timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// A success confirmation.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// A user-visible rejection or failure.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// The engine's only output channel to the page.
pub trait DisplaySurface: Send + Sync {
    /// Update the numeric cart badge shown on every page.
    fn set_cart_count(&self, count: u32);

    /// Replace the catalog grid wholesale with the given ordered cards.
    ///
    /// One batched call per recompute - implementations must not be handed
    /// incremental per-item updates, so rapid filter edits stay responsive.
    fn replace_grid(&self, cards: &[ProductCardView]);

    /// Show the explicit "no matches" state in place of the grid.
    fn show_no_matches(&self);

    /// Render the cart page contents.
    fn render_cart(&self, cart: &CartView);

    /// Render the checkout totals.
    fn render_breakdown(&self, breakdown: &BreakdownView);

    /// Show a transient notice in the notification region.
    fn show_notice(&self, notice: &Notice);

    /// Clear the notification region.
    fn clear_notice(&self);
}
