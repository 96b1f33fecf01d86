//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read survey scheme file '{path}': {source}")]
    SchemeFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid survey scheme: {0}")]
    InvalidScheme(String),
}
