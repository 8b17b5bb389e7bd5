//! Market configuration.
//!
//! Loaded from `ecofinds.toml`. Every key is optional:
//!
//! ```toml
//! [market]
//! name = "EcoFinds"
//! tagline = "Sustainable Second-Hand Marketplace"
//! currency = "USD"
//!
//! [shipping]
//! free_over_cents = 5000
//! flat_fee_cents = 499
//!
//! [home]
//! featured_count = 4
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```

use crate::error::CoreError;
use ecofinds_commerce::cart::ShippingPolicy;
use ecofinds_commerce::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub market: MarketSection,
    pub shipping: ShippingSection,
    pub home: HomeSection,
    pub logging: LoggingConfig,
}

/// Branding shown in the header, footer and page title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSection {
    pub name: String,
    pub tagline: String,
    pub currency: Currency,
}

impl Default for MarketSection {
    fn default() -> Self {
        Self {
            name: "EcoFinds".to_string(),
            tagline: "Sustainable Second-Hand Marketplace".to_string(),
            currency: Currency::USD,
        }
    }
}

/// Shipping rules, in cents of the market currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingSection {
    /// Subtotals strictly above this ship free.
    pub free_over_cents: i64,
    pub flat_fee_cents: i64,
}

impl Default for ShippingSection {
    fn default() -> Self {
        Self {
            free_over_cents: 5000,
            flat_fee_cents: 499,
        }
    }
}

/// Home page settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeSection {
    /// Number of catalog products in the featured grid.
    pub featured_count: usize,
}

impl Default for HomeSection {
    fn default() -> Self {
        Self { featured_count: 4 }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One short line per event.
    #[default]
    Compact,
    /// Target and span context included.
    Full,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"ecofinds_commerce=debug"`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl MarketConfig {
    /// Create a configuration with the given market name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            market: MarketSection {
                name: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no storefront can render sensibly.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.market.name.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                key: "market.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.shipping.free_over_cents < 0 {
            return Err(CoreError::InvalidConfig {
                key: "shipping.free_over_cents",
                reason: format!("must not be negative, got {}", self.shipping.free_over_cents),
            });
        }
        if self.shipping.flat_fee_cents < 0 {
            return Err(CoreError::InvalidConfig {
                key: "shipping.flat_fee_cents",
                reason: format!("must not be negative, got {}", self.shipping.flat_fee_cents),
            });
        }
        Ok(())
    }

    /// Set the market name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.market.name = name.into();
        self
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.market.tagline = tagline.into();
        self
    }

    /// Set the currency prices are shown in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.market.currency = currency;
        self
    }

    /// Set the free-shipping threshold and the flat fee, in cents.
    pub fn with_shipping(mut self, free_over_cents: i64, flat_fee_cents: i64) -> Self {
        self.shipping = ShippingSection {
            free_over_cents,
            flat_fee_cents,
        };
        self
    }

    /// Set how many products the home page features.
    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.home.featured_count = count;
        self
    }

    /// Set the log filter directive.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the log line format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// The shipping rules as a domain policy.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        let currency = self.market.currency;
        ShippingPolicy::new(
            Money::new(self.shipping.free_over_cents, currency),
            Money::new(self.shipping.flat_fee_cents, currency),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_config_default() {
        let config = MarketConfig::default();

        assert_eq!(config.market.name, "EcoFinds");
        assert_eq!(config.market.currency, Currency::USD);
        assert_eq!(config.home.featured_count, 4);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.shipping_policy(), ShippingPolicy::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = MarketConfig::from_toml_str("").unwrap();
        assert_eq!(config, MarketConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = MarketConfig::from_toml_str(
            r#"
            [market]
            name = "ReLoved"
            currency = "GBP"

            [logging]
            format = "full"
            "#,
        )
        .unwrap();

        assert_eq!(config.market.name, "ReLoved");
        assert_eq!(config.market.tagline, "Sustainable Second-Hand Marketplace");
        assert_eq!(config.logging.format, LogFormat::Full);
        assert_eq!(config.shipping_policy().currency(), Currency::GBP);
    }

    #[test]
    fn test_configured_currency_reaches_cart_totals() {
        use ecofinds_commerce::session::SessionState;

        let config = MarketConfig::default().with_currency(Currency::GBP);
        let policy = config.shipping_policy();
        let session = SessionState::seeded(policy).unwrap();
        let totals = session.cart_totals();

        assert_eq!(totals.subtotal.currency, Currency::GBP);
        assert_eq!(totals.shipping.currency, policy.flat_fee.currency);
        assert_eq!(totals.total.currency, Currency::GBP);
        assert!(policy.notice().contains('\u{00a3}'));
    }

    #[test]
    fn test_malformed_toml() {
        let err = MarketConfig::from_toml_str("[shipping\nflat_fee_cents = 1").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_wrong_type() {
        let err = MarketConfig::from_toml_str("[home]\nfeatured_count = \"four\"").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let err = MarketConfig::from_toml_str("[shipping]\nflat_fee_cents = -1").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfig {
                key: "shipping.flat_fee_cents",
                ..
            }
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = MarketConfig::new("Shop")
            .with_tagline("Pre-loved goods")
            .with_currency(Currency::EUR)
            .with_shipping(10000, 700)
            .with_featured_count(8)
            .with_log_level("debug")
            .with_log_format(LogFormat::Full);

        assert_eq!(config.market.name, "Shop");
        assert_eq!(config.market.tagline, "Pre-loved goods");
        assert_eq!(config.home.featured_count, 8);
        assert_eq!(config.logging.level, "debug");

        let policy = config.shipping_policy();
        assert_eq!(policy.free_over, Money::new(10000, Currency::EUR));
        assert_eq!(policy.flat_fee, Money::new(700, Currency::EUR));
    }

    #[test]
    fn test_with_name_rejects_blank_on_validate() {
        let config = MarketConfig::default().with_name("  ");
        assert!(config.validate().is_err());
    }
}
