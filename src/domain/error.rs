//! Domain error types

use thiserror::Error;

/// Error when an index does not resolve to an entry.
/// No partial mutation happens when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Index {index} is out of range ({len} entries)")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
