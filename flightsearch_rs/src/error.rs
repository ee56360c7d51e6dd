//! Error types for catalog loading, configuration and search.

use std::path::PathBuf;
use thiserror::Error;

/// A bundled JSON file could not be parsed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration could not be read or makes no sense.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Submit-time failure that is reported with a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter valid origin and destination.")]
    UnknownLocation { origin: String, destination: String },
}
