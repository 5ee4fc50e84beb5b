//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Locale tag that cannot be used for case mapping
    #[error("invalid locale: {tag}")]
    InvalidLocale {
        /// The rejected tag
        tag: String,
    },

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`Config`](crate::Config)
    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Writing a configuration back out failed
    #[error("cannot write configuration: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// Serializing a result failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
