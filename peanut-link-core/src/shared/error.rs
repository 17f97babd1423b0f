//! Error handling for the link core
//!
//! The pure lookups (token details, gasless eligibility, value conversion) never
//! fail. This type covers the fallible edges: configuration, the local link
//! store and calls into the link SDK.

use thiserror::Error;

/// Link core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("SDK error: {0}")]
    Sdk(String),

    #[error("Invalid token price: {0}")]
    InvalidPrice(f64),
}

impl LinkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a provider error (RPC provider could not be built for a chain)
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Create an SDK error
    pub fn sdk(message: impl Into<String>) -> Self {
        Self::Sdk(message.into())
    }
}

impl From<std::io::Error> for LinkError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for LinkError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}
