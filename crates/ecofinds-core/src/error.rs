//! Error types for EcoFinds core.

use thiserror::Error;

/// Errors raised while bootstrapping the application.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    /// Logging could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}
