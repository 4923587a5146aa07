//! Error types for sitegrade-core.
//!
//! The analyzers themselves are total over all string inputs and expose no
//! error type; only the configuration layer can fail.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// The text-improvement service endpoint is not a valid URL.
    #[error("improve.endpoint must be an http(s) URL, got: {endpoint}")]
    InvalidImproveEndpoint {
        /// The rejected endpoint value.
        endpoint: String,
    },

    /// The text-improvement service is configured without credentials.
    #[error("improve.endpoint is set but improve.api_key is empty")]
    MissingImproveKey,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
