//! Unified error taxonomy for the storefront engine.
//!
//! Three failure classes, handled at the boundary where data enters the
//! engine:
//!
//! - decode failures (persisted blob is not well-formed JSON) are handled
//!   inside [`crate::cart::CartStore::load`]: the store is cleared and an
//!   empty cart returned;
//! - validation failures (well-formed but semantically invalid input) are
//!   rejected with a user-visible notice and no state change;
//! - per-line integrity problems inside an otherwise-valid cart are
//!   `tracing::warn!` diagnostics - the line is dropped, processing
//!   continues, and no error is raised.
//!
//! Anything outside the taxonomy (notably [`crate::storage::StorageError`])
//! propagates with `?` so genuine defects surface instead of being masked.

use thiserror::Error;

use crate::storage::StorageError;

/// Why a product payload or persisted cart line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value is not a JSON object at all.
    #[error("not an object")]
    NotAnObject,

    /// `id` is missing, not a string, or empty.
    #[error("missing or empty id")]
    MissingId,

    /// `name` is missing, not a string, or empty.
    #[error("missing or empty name")]
    MissingName,

    /// `price` is missing, not a finite number, or not positive.
    #[error("price is not a positive number")]
    InvalidPrice,

    /// `quantity` is missing, not an integer, or below 1.
    #[error("quantity is not a positive integer")]
    InvalidQuantity,
}

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Persisted data could not be decoded as JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A product payload failed shape validation before touching storage.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ValidationError),

    /// The storage backend failed. Always propagated, never swallowed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
