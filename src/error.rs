//! Error handling module for grindshift
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Input rejection in the converter form is not an error; these types cover the
//! ambient surfaces (catalog files, CLI lookups, terminal setup).

use thiserror::Error;

/// Main error type for grindshift
#[derive(Error, Debug)]
pub enum GrindError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A grinder name that is not present in the active catalog
    #[error("Unknown grinder: {0}")]
    UnknownGrinder(String),

    /// Validation errors (rejected clicks input on the headless path)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for grindshift operations
pub type Result<T> = std::result::Result<T, GrindError>;

// Convenient error constructors
impl GrindError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown grinder error
    pub fn unknown_grinder(name: impl Into<String>) -> Self {
        Self::UnknownGrinder(name.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
