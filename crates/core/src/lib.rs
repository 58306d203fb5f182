//! Stride Core - Shared types library.
//!
//! This crate provides the common types used across the Stride storefront:
//! - `storefront` - the cart, pricing, and catalog engine
//! - `integration-tests` - cross-page behavioural tests
//!
//! # Architecture
//!
//! The core crate contains only types - no storage access, no timers, no
//! display output. Everything here is plain data with serde derives, which
//! keeps it usable from any page context.
//!
//! # Modules
//!
//! - [`types`] - products, cart line items, price breakdowns, filter config

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
