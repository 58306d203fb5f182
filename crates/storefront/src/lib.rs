//! Stride Storefront - cart, pricing, and catalog engine.
//!
//! This crate is the logic behind the storefront pages: it owns the
//! persisted cart, computes checkout totals, and decides which products the
//! catalog grid shows. Page markup is an external collaborator - the engine
//! consumes control input and emits updates through the [`DisplaySurface`]
//! trait plus writes to a [`StringStore`].
//!
//! # Architecture
//!
//! - [`storage`] - the persisted string store shared by all page loads
//! - [`cart`] - the cart store: load/save/add/remove with validation at
//!   every ingestion boundary
//! - [`pricing`] - the pure price calculator (coupons, tax, shipping zones)
//! - [`catalog`] - the filter/sort pipeline producing the visible set
//! - [`views`] - display formatting, including HTML escaping
//! - [`page`] - the per-page-load controller wiring everything together
//!
//! Pages have no shared memory: every page load re-reads the persisted
//! cart. Concurrent writers are not coordinated - the last page to persist
//! wins (an accepted limitation of the single-key store).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod page;
pub mod pricing;
pub mod storage;
pub mod surface;
pub mod views;

pub use cart::CartStore;
pub use catalog::compute_visible;
pub use config::{ConfigError, StorefrontConfig};
pub use debounce::Debouncer;
pub use error::{StorefrontError, ValidationError};
pub use page::PageSession;
pub use pricing::{compute_breakdown, lookup_coupon, zone_for_postal};
pub use storage::{MemoryStore, StorageError, StringStore};
pub use surface::{DisplaySurface, Notice, NoticeLevel};
