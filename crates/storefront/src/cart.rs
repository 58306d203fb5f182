//! Cart store: the canonical owner of persisted cart line items.
//!
//! The cart lives as one JSON array under a single storage key. Every
//! operation re-reads that blob before acting - page loads share no memory,
//! so the persisted store is the only source of truth. Validation happens
//! here, at the boundary where data enters the engine:
//!
//! - a blob that is not well-formed JSON resets the store (warn, clear,
//!   empty cart);
//! - a well-formed blob with individually invalid entries drops just those
//!   entries (warn per line) and keeps the rest;
//! - storage failures are never absorbed - they propagate to the caller.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use stride_core::{CartLineItem, Product};

use crate::error::{Result, ValidationError};
use crate::storage::StringStore;

/// Validated product fields, before a quantity is attached.
struct ValidProduct {
    id: String,
    name: String,
    price: Decimal,
    image: Option<String>,
}

impl ValidProduct {
    /// Validate an untrusted JSON payload (e.g. data attributes read off an
    /// add-to-cart control).
    fn from_value(value: &Value) -> std::result::Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let id = obj
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingId)?;
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let price = obj
            .get("price")
            .and_then(Value::as_f64)
            .filter(|p| p.is_finite() && *p > 0.0)
            .and_then(Decimal::from_f64)
            .ok_or(ValidationError::InvalidPrice)?;
        // A malformed image is not worth rejecting the whole product over.
        let image = obj
            .get("image")
            .and_then(Value::as_str)
            .map(String::from);

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image,
        })
    }

    /// Validate a typed catalog product. The catalog is trusted data, but
    /// the same invariants are checked so nothing bypasses the boundary.
    fn from_product(product: &Product) -> std::result::Result<Self, ValidationError> {
        if product.id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if product.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if product.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        })
    }
}

/// Validate one persisted cart entry.
///
/// This is the only way untrusted data becomes a [`CartLineItem`]: id and
/// name must be non-empty strings, price a finite positive number, quantity
/// an integer of at least 1.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_line(value: &Value) -> std::result::Result<CartLineItem, ValidationError> {
    let product = ValidProduct::from_value(value)?;
    let quantity = value
        .get("quantity")
        .and_then(Value::as_u64)
        .filter(|q| *q >= 1)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or(ValidationError::InvalidQuantity)?;

    Ok(CartLineItem {
        id: product.id,
        name: product.name,
        price: product.price,
        quantity,
        image: product.image,
    })
}

/// Sum of quantities across all line items (not the line count).
fn total_quantity(items: &[CartLineItem]) -> u32 {
    items.iter().map(|item| item.quantity).fold(0, u32::saturating_add)
}

/// The cart store, bound to one storage key.
///
/// Stateless beyond its store handle: nothing is cached between calls, so
/// two stores over the same backing storage always agree.
#[derive(Debug, Clone)]
pub struct CartStore<S: StringStore> {
    store: S,
    key: String,
}

impl<S: StringStore> CartStore<S> {
    /// Create a cart store over `store`, persisting under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read and validate the persisted cart.
    ///
    /// An absent key is an empty cart. A blob that fails to decode is
    /// cleared so the diagnostic fires once, not on every subsequent load.
    /// Entries that decode but fail validation are dropped individually.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::Storage`] if the backend fails;
    /// decode and validation problems are handled here, not returned.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<Vec<CartLineItem>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let values: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "persisted cart is not valid JSON, resetting");
                self.store.remove(&self.key)?;
                return Ok(Vec::new());
            }
        };

        let mut items = Vec::with_capacity(values.len());
        for value in &values {
            match validate_line(value) {
                Ok(item) => items.push(item),
                Err(e) => warn!(error = %e, "dropping invalid cart line"),
            }
        }
        Ok(items)
    }

    /// Serialize and persist the full sequence, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save(&self, items: &[CartLineItem]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }

    /// Add a catalog product to the cart.
    ///
    /// If a line with the same id exists its quantity is incremented;
    /// otherwise a new line is appended. Returns the new total quantity
    /// for the cart badge.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::InvalidProduct`] before touching
    /// storage if the product shape is invalid or `quantity` is zero.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn add(&self, product: &Product, quantity: u32) -> Result<u32> {
        let valid = ValidProduct::from_product(product)?;
        self.upsert(valid, quantity)
    }

    /// Add an untrusted product payload (e.g. parsed from control markup).
    ///
    /// # Errors
    ///
    /// Returns [`crate::StorefrontError::InvalidProduct`] before touching
    /// storage if the payload shape is invalid or `quantity` is zero.
    #[instrument(skip(self, payload))]
    pub fn add_untrusted(&self, payload: &Value, quantity: u32) -> Result<u32> {
        let valid = ValidProduct::from_value(payload)?;
        self.upsert(valid, quantity)
    }

    fn upsert(&self, product: ValidProduct, quantity: u32) -> Result<u32> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity.into());
        }

        let mut items = self.load()?;
        if let Some(existing) = items.iter_mut().find(|item| item.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            debug!(id = %existing.id, quantity = existing.quantity, "incremented cart line");
        } else {
            items.push(CartLineItem {
                id: product.id,
                name: product.name,
                price: product.price,
                quantity,
                image: product.image,
            });
        }
        self.save(&items)?;
        Ok(total_quantity(&items))
    }

    /// Remove the line with `id`, if present. Returns the new total
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<u32> {
        let mut items = self.load()?;
        items.retain(|item| item.id != id);
        self.save(&items)?;
        Ok(total_quantity(&items))
    }

    /// Set the quantity of the line with `id`. A quantity of zero removes
    /// the line. Returns the new total quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    #[instrument(skip(self))]
    pub fn set_quantity(&self, id: &str, quantity: u32) -> Result<u32> {
        if quantity == 0 {
            return self.remove(id);
        }
        let mut items = self.load()?;
        if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
            existing.quantity = quantity;
        }
        self.save(&items)?;
        Ok(total_quantity(&items))
    }

    /// Sum of quantities across all line items.
    ///
    /// This is the number every page's cart badge shows; because it is
    /// computed from a fresh load, independently-loaded pages reading the
    /// same persisted state always agree.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn count(&self) -> Result<u32> {
        Ok(total_quantity(&self.load()?))
    }
}
