//! Error types for wizard-store.

use thiserror::Error;
use wizard_core::ConfigError;

/// Result type for wizard-store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors reported by store operations. The store state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration edit rejected by the schema.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input rejected before reaching the schema (malformed import, empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Persistence backend failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decoding error.
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl StoreError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage backend error.
    pub fn storage(message: impl ToString) -> Self {
        Self::Storage(message.to_string())
    }
}
