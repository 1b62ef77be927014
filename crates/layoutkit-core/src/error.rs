//! Error handling for LayoutKit
//!
//! Provides the error types shared by every layer of the editor:
//! - Validation errors (names, colors rejected before anything is created)
//! - Session errors (operations that need a signed-in user)
//! - Storage errors surfaced from the durable key-value backend
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised when user input is rejected locally. Nothing is created or
/// mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name was empty after trimming whitespace
    #[error("{field} must not be empty")]
    EmptyName {
        /// Which name was rejected ("layout name", "user name").
        field: &'static str,
    },

    /// A color string could not be parsed as `#rgb` or `#rrggbb`
    #[error("Invalid color '{value}': expected #rgb or #rrggbb")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },
}

/// Main error type for LayoutKit
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation needs an active user
    #[error("No user is signed in")]
    NotSignedIn,

    /// A referenced entity does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind ("user", "layout").
        kind: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// Durable storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a storage error from anything printable
    pub fn storage(msg: impl std::fmt::Display) -> Self {
        Error::Storage(msg.to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type for LayoutKit operations
pub type Result<T> = std::result::Result<T, Error>;
