//! Configuration file support for the search form.
//!
//! The browser app embeds `flightsearch.toml` at compile time and parses it
//! with [`SearchConfig::from_toml_str`]; native callers can point
//! [`SearchConfig::load_from_path`] at a file instead.

use crate::error::ConfigError;
use crate::types::{DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR, PriceRange};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lowest value on the price slider
    pub price_floor: u32,
    /// Highest value on the price slider
    pub price_ceiling: u32,
    /// Delay before the unfiltered dataset is shown, in milliseconds
    pub reveal_delay_ms: u64,
    /// Refuse to search when origin or destination is absent from the dataset
    pub reject_unknown_locations: bool,
    /// Narrow results to the selected price range after equality filtering
    pub apply_price_range: bool,
    /// Max tracing level: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            price_floor: DEFAULT_PRICE_FLOOR,
            price_ceiling: DEFAULT_PRICE_CEILING,
            reveal_delay_ms: 1000,
            reject_unknown_locations: true,
            apply_price_range: false,
            log_level: "info".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`SearchConfig::from_toml_str`] but logs and falls back to defaults.
    pub fn from_toml_str_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_floor > self.price_ceiling {
            return Err(ConfigError::Invalid(format!(
                "price_floor ({}) is above price_ceiling ({})",
                self.price_floor, self.price_ceiling
            )));
        }
        Ok(())
    }

    /// Full slider span, the initial price range of the form.
    pub fn default_price_range(&self) -> PriceRange {
        PriceRange::new(self.price_floor, self.price_ceiling)
    }

    /// Clamp a slider selection into the configured bounds.
    pub fn price_range(&self, a: u32, b: u32) -> PriceRange {
        PriceRange::clamped(a, b, self.price_floor, self.price_ceiling)
    }
}
