//! Shop-wide configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest effective quantity of a single item accepted at checkout.
pub const DEFAULT_MAX_CHECKOUT_QTY: i32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables loaded from `shop.json`. Missing fields use the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub brand: String,
    pub currency_symbol: String,
    /// Selected items above this quantity are left out of the order
    pub max_checkout_qty: i32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ShopConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            brand: "MadiShop".to_string(),
            currency_symbol: "$".to_string(),
            max_checkout_qty: DEFAULT_MAX_CHECKOUT_QTY,
        }
    }

    /// Parse configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = ShopConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ShopConfig::default_config());
        assert_eq!(cfg.max_checkout_qty, 20);
    }

    #[test]
    fn partial_config_overrides_fields() {
        let cfg = ShopConfig::from_json(r#"{"max_checkout_qty": 5}"#).unwrap();
        assert_eq!(cfg.max_checkout_qty, 5);
        assert_eq!(cfg.brand, "MadiShop");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ShopConfig::from_json("{").unwrap_err();
        assert!(err.to_string().contains("JSON parsing error"));
    }
}
