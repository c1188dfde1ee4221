//! Tolerant field deserializers.
//!
//! Persisted and imported documents come from older builds and hand-edited
//! files. Enum and numeric fields accept anything and fall back to the field
//! default instead of rejecting the whole snapshot.

use std::any::type_name;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an enum field, replacing unknown values with `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(parsed),
        Err(_) => {
            tracing::debug!(%value, target_type = type_name::<T>(), "unknown value, using default");
            Ok(T::default())
        }
    }
}

/// Deserialize a number that may arrive as a JSON string (form inputs store text).
pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr + Default,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::String(s) => s.trim().parse().ok(),
        other => serde_json::from_value(other.clone()).ok(),
    };
    Ok(parsed.unwrap_or_else(|| {
        tracing::debug!(%value, target_type = type_name::<T>(), "not a number, using default");
        T::default()
    }))
}

/// Text form of a style value. Numbers and booleans keep their JSON
/// spelling; anything else has no text form.
pub(crate) fn style_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
