//! Error types for linkage comparators

use thiserror::Error;

/// Errors raised by comparators and their configuration
#[derive(Debug, Error)]
pub enum LinkageError {
    /// A field value required for comparison was absent
    #[error("missing {side} value for comparison")]
    MissingValue { side: &'static str },

    /// Minimum substring length must be at least 1
    #[error("invalid minimum length: {0} (must be >= 1)")]
    InvalidMinimumLength(i64),

    /// Configuration key not recognized by the comparator
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// Configuration value could not be parsed
    #[error("invalid value '{value}' for property '{name}'")]
    InvalidProperty { name: String, value: String },

    /// Malformed JSON configuration
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using LinkageError
pub type Result<T> = std::result::Result<T, LinkageError>;
