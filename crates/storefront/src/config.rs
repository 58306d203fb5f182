//! Storefront configuration.
//!
//! Everything has a compiled-in default: the engine is fully usable with
//! `StorefrontConfig::default()` and no environment at all. The coupon,
//! shipping, and zone tables are static configuration of the deployment -
//! they are never persisted and have no admin surface.
//!
//! # Environment Variables (all optional)
//!
//! - `STRIDE_TAX_RATE` - tax rate as a decimal fraction in `[0, 1)`
//! - `STRIDE_DEBOUNCE_MS` - filter recompute quiescence window, milliseconds
//! - `STRIDE_NOTICE_TTL_MS` - notification auto-clear timeout, milliseconds
//! - `STRIDE_CART_KEY` - storage key for the persisted cart blob

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use stride_core::Zone;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Flat shipping cost per zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRates {
    pub local: Decimal,
    pub regional: Decimal,
    pub national: Decimal,
}

impl ShippingRates {
    /// The shipping cost for `zone`. Every zone has an entry; unknown
    /// postal input is mapped to [`Zone::DEFAULT`] before reaching here.
    #[must_use]
    pub const fn cost(&self, zone: Zone) -> Decimal {
        match zone {
            Zone::Local => self.local,
            Zone::Regional => self.regional,
            Zone::National => self.national,
        }
    }
}

/// Storefront engine configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Tax rate applied to the items total. Fixed per deployment, never
    /// user-controlled.
    pub tax_rate: Decimal,
    /// Flat shipping cost per zone.
    pub shipping: ShippingRates,
    /// Postal-code prefix to zone table; longest matching prefix wins,
    /// no match falls back to [`Zone::DEFAULT`].
    pub zone_prefixes: Vec<(String, Zone)>,
    /// Valid coupon codes (case-sensitive) and their discount rates.
    pub coupons: Vec<(String, Decimal)>,
    /// Quiescence window for debounced filter recomputes.
    pub debounce_window: Duration,
    /// How long a notification stays visible before auto-clearing.
    pub notice_ttl: Duration,
    /// Storage key holding the persisted cart JSON blob.
    pub cart_storage_key: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(8, 2), // 8%
            shipping: ShippingRates {
                local: Decimal::new(499, 2),
                regional: Decimal::new(799, 2),
                national: Decimal::new(1299, 2),
            },
            zone_prefixes: vec![
                ("98".to_string(), Zone::Local),
                ("99".to_string(), Zone::Local),
                ("9".to_string(), Zone::Regional),
                ("8".to_string(), Zone::Regional),
            ],
            coupons: vec![
                ("SAVE10".to_string(), Decimal::new(10, 2)),
                ("WELCOME15".to_string(), Decimal::new(15, 2)),
                ("VIP20".to_string(), Decimal::new(20, 2)),
            ],
            debounce_window: Duration::from_millis(150),
            notice_ttl: Duration::from_secs(3),
            cart_storage_key: "stride.cart".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables, falling back to the
    /// compiled defaults for anything unset.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse or is out of
    /// range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Exists as a seam so tests can inject variables without mutating the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provided value fails to parse or is out
    /// of range.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("STRIDE_TAX_RATE") {
            config.tax_rate = parse_rate("STRIDE_TAX_RATE", &raw)?;
        }
        if let Some(raw) = lookup("STRIDE_DEBOUNCE_MS") {
            config.debounce_window = parse_millis("STRIDE_DEBOUNCE_MS", &raw)?;
        }
        if let Some(raw) = lookup("STRIDE_NOTICE_TTL_MS") {
            config.notice_ttl = parse_millis("STRIDE_NOTICE_TTL_MS", &raw)?;
        }
        if let Some(key) = lookup("STRIDE_CART_KEY") {
            config.cart_storage_key = key;
        }

        Ok(config)
    }
}

/// Parse a rate variable as a decimal fraction in `[0, 1)`.
fn parse_rate(var: &str, raw: &str) -> Result<Decimal, ConfigError> {
    let rate = raw
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))?;
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            format!("rate must be in [0, 1), got {rate}"),
        ));
    }
    Ok(rate)
}

/// Parse a millisecond duration variable.
fn parse_millis(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let millis = raw
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))?;
    Ok(Duration::from_millis(millis))
}
