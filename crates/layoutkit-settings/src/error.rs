//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading
//! and for the durable key-value storage that holds users and layouts.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A key contains characters that cannot be mapped to a file name.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// A stored value could not be decoded.
    #[error("Corrupted value for '{key}': {reason}")]
    Corrupted { key: String, reason: String },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors related to configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is out of valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// I/O error while reading or writing the config file.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl From<StorageError> for layoutkit_core::Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::IoError(e) => layoutkit_core::Error::Io(e),
            other => layoutkit_core::Error::storage(other),
        }
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
