//! Settings import/export and share URLs.
//!
//! An exported settings document is the JSON form of one snapshot. A share
//! URL carries the same document base64-encoded in a query parameter.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use wizard_core::{ComponentConfig, ComponentKind, KIND_FIELD};

use crate::error::{Result, StoreError};

/// Pretty-printed JSON for a snapshot.
pub fn export_settings(config: &ComponentConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Suggested download name for exported settings.
pub fn settings_file_name(kind: ComponentKind) -> String {
    format!("{}-settings.json", kind.as_str())
}

/// Base64 for a snapshot, escaped for use as a query value.
pub fn encode_share_value(config: &ComponentConfig) -> Result<String> {
    let json = serde_json::to_string(config)?;
    Ok(escape_query(&STANDARD.encode(json)))
}

/// `base` with the settings appended as the `param` query parameter.
pub fn share_url(base: &str, param: &str, config: &ComponentConfig) -> Result<String> {
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{}{}{}={}",
        base,
        separator,
        param,
        encode_share_value(config)?
    ))
}

/// Decode a share value back into the JSON document it carries.
pub fn decode_share_value(value: &str) -> Result<String> {
    let bytes = STANDARD.decode(unescape_query(value).trim())?;
    String::from_utf8(bytes).map_err(|e| StoreError::validation(format!("share value is not UTF-8: {}", e)))
}

/// The raw value of query parameter `param` in `url`, if present.
pub fn find_query_param<'a>(url: &'a str, param: &str) -> Option<&'a str> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == param).then_some(value)
    })
}

/// Check an imported document and report which kind it targets.
///
/// The document must be a JSON object with a known `componentType` and a
/// `style` object. Field values are checked later, when the document is
/// merged into a snapshot.
pub fn validate_import(text: &str) -> Result<(ComponentKind, Value)> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| StoreError::validation(format!("settings are not valid JSON: {}", e)))?;
    let object = document
        .as_object()
        .ok_or_else(|| StoreError::validation("settings must be a JSON object"))?;
    let kind = object
        .get(KIND_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::validation("settings are missing componentType"))?
        .parse::<ComponentKind>()?;
    if !object.get("style").is_some_and(Value::is_object) {
        return Err(StoreError::validation("settings are missing a style object"));
    }
    Ok((kind, document))
}

fn escape_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '+' => out.push_str("%2B"),
            '/' => out.push_str("%2F"),
            '=' => out.push_str("%3D"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_query(value: &str) -> String {
    value
        .replace("%2B", "+")
        .replace("%2b", "+")
        .replace("%2F", "/")
        .replace("%2f", "/")
        .replace("%3D", "=")
        .replace("%3d", "=")
}
