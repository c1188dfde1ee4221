//! Error types for wizard-core.

use thiserror::Error;

use crate::kind::ComponentKind;

/// Result type for wizard-core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while editing or validating component configurations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Component kind identifier that is not registered.
    #[error("unknown component kind: {0}")]
    UnknownKind(String),

    /// Style property name outside the closed property set.
    #[error("unknown style property: {0}")]
    UnknownStyleProperty(String),

    /// Field name that does not exist on the configuration.
    #[error("unknown field '{field}' on {kind} configuration")]
    UnknownField {
        /// Component kind being edited.
        kind: ComponentKind,
        /// Offending field name.
        field: String,
    },

    /// A keyed edit tried to change the component kind discriminator.
    #[error("cannot change component kind from {from} to {to} in place")]
    KindMismatch {
        /// Kind of the configuration being edited.
        from: ComponentKind,
        /// Kind requested by the edit.
        to: ComponentKind,
    },

    /// The edited value no longer matches the configuration schema.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field that received the value.
        field: String,
        /// Deserializer message.
        message: String,
    },

    /// Animation definition failed validation.
    #[error("invalid animation: {0}")]
    InvalidAnimation(String),

    /// Preset failed validation.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create an invalid-value error for a field.
    pub fn invalid_value(field: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.to_string(),
        }
    }
}
