//! The component configuration union and keyed edits over it.
//!
//! Keyed edits (`with_field`, `with_style`, `with_nested`, merges) go through
//! the JSON form of a snapshot and deserialize back, so every result is a
//! complete, schema-valid configuration or an error with the input untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::button::ButtonConfig;
use crate::card::CardConfig;
use crate::error::{ConfigError, Result};
use crate::kind::ComponentKind;
use crate::merge::{merge_deep, merge_shallow};

/// Name of the discriminator field in serialized snapshots.
pub const KIND_FIELD: &str = "componentType";

/// One complete configuration snapshot, tagged by component kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "componentType", rename_all = "lowercase")]
pub enum ComponentConfig {
    Button(ButtonConfig),
    Card(CardConfig),
}

impl ComponentConfig {
    /// The seed snapshot for a kind.
    pub fn default_for(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Button => ComponentConfig::Button(ButtonConfig::default()),
            ComponentKind::Card => ComponentConfig::Card(CardConfig::default()),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentConfig::Button(_) => ComponentKind::Button,
            ComponentConfig::Card(_) => ComponentKind::Card,
        }
    }

    pub fn as_button(&self) -> Option<&ButtonConfig> {
        match self {
            ComponentConfig::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_card(&self) -> Option<&CardConfig> {
        match self {
            ComponentConfig::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut ButtonConfig> {
        match self {
            ComponentConfig::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_card_mut(&mut self) -> Option<&mut CardConfig> {
        match self {
            ComponentConfig::Card(card) => Some(card),
            _ => None,
        }
    }

    /// Serialize to a JSON object.
    pub fn to_object(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::invalid_value(
                KIND_FIELD,
                format!("expected an object, got {}", other),
            )),
        }
    }

    /// Copy with one top-level field replaced.
    pub fn with_field(&self, field: &str, value: Value) -> Result<Self> {
        if field == KIND_FIELD {
            return self.check_kind_value(&value).map(|_| self.clone());
        }
        let mut object = self.to_object()?;
        if !object.contains_key(field) {
            return Err(self.unknown_field(field));
        }
        object.insert(field.to_string(), value);
        self.rebuild(object, field)
    }

    /// Copy with one entry of the `style` section replaced.
    pub fn with_style(&self, property: &str, value: Value) -> Result<Self> {
        self.with_nested("style", property, value)
    }

    /// Copy with one key inside a nested section replaced. A `null` value
    /// removes the key from the section.
    pub fn with_nested(&self, section: &str, key: &str, value: Value) -> Result<Self> {
        let mut object = self.to_object()?;
        let slot = object
            .get_mut(section)
            .ok_or_else(|| self.unknown_field(section))?;
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
        let inner = slot.as_object_mut().ok_or_else(|| {
            ConfigError::invalid_value(section, "section is not an object")
        })?;
        if value.is_null() {
            inner.remove(key);
        } else {
            inner.insert(key.to_string(), value);
        }
        self.rebuild(object, &format!("{}.{}", section, key))
    }

    /// Replace top-level fields from a partial document.
    pub fn merged_shallow(&self, patch: &Map<String, Value>) -> Result<Self> {
        if let Some(kind) = patch.get(KIND_FIELD) {
            self.check_kind_value(kind)?;
        }
        let mut object = self.to_object()?;
        merge_shallow(&mut object, patch);
        self.rebuild(object, "preset")
    }

    /// Recursively merge a partial document, keeping fields it omits.
    pub fn merged_deep(&self, patch: &Value) -> Result<Self> {
        if let Some(kind) = patch.get(KIND_FIELD) {
            self.check_kind_value(kind)?;
        }
        let current = self.to_object()?;
        if let Some(patch) = patch.as_object() {
            for key in patch.keys().filter(|k| !current.contains_key(k.as_str())) {
                tracing::debug!(kind = %self.kind(), field = %key, "ignoring unknown field");
            }
        }
        let mut value = Value::Object(current);
        merge_deep(&mut value, patch);
        match value {
            Value::Object(object) => self.rebuild(object, "document"),
            _ => Err(ConfigError::invalid_value("document", "expected an object")),
        }
    }

    fn rebuild(&self, mut object: Map<String, Value>, field: &str) -> Result<Self> {
        object.insert(
            KIND_FIELD.to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        let mut next: Self = serde_json::from_value(Value::Object(object))
            .map_err(|e| ConfigError::invalid_value(field, e))?;
        // A radius override belongs to the shape it was set for.
        if let (Some(before), Some(after)) = (self.as_button(), next.as_button_mut()) {
            if after.shape != before.shape && after.border_radius == before.border_radius {
                after.border_radius = None;
            }
        }
        Ok(next)
    }

    fn check_kind_value(&self, value: &Value) -> Result<()> {
        let name = value
            .as_str()
            .ok_or_else(|| ConfigError::invalid_value(KIND_FIELD, "expected a string"))?;
        let kind: ComponentKind = name.parse()?;
        if kind != self.kind() {
            return Err(ConfigError::KindMismatch {
                from: self.kind(),
                to: kind,
            });
        }
        Ok(())
    }

    fn unknown_field(&self, field: &str) -> ConfigError {
        ConfigError::UnknownField {
            kind: self.kind(),
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonShape;
    use crate::style::StyleProperty;
    use serde_json::json;

    #[test]
    fn test_tagged_roundtrip() {
        let config = ComponentConfig::default_for(ComponentKind::Card);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["componentType"], "card");
        let back: ComponentConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_with_field_replaces_one_field() {
        let config = ComponentConfig::default_for(ComponentKind::Button);
        let edited = config.with_field("shape", json!("pill")).unwrap();
        let button = edited.as_button().unwrap();
        assert_eq!(button.shape, ButtonShape::Pill);
        assert_eq!(button.text, "Button");
    }

    #[test]
    fn test_shape_edit_drops_radius_override() {
        let mut config = ComponentConfig::default_for(ComponentKind::Button);
        config.as_button_mut().unwrap().border_radius = Some("0.5rem".to_string());

        let pill = config.with_field("shape", json!("pill")).unwrap();
        let button = pill.as_button().unwrap();
        assert_eq!(button.border_radius, None);
        assert_eq!(button.effective_radius(), "9999px");

        let text = config.with_field("text", json!("Go")).unwrap();
        assert_eq!(text.as_button().unwrap().border_radius.as_deref(), Some("0.5rem"));

        let both = config
            .merged_shallow(json!({"shape": "square", "borderRadius": "2px"}).as_object().unwrap())
            .unwrap();
        assert_eq!(both.as_button().unwrap().effective_radius(), "2px");
    }

    #[test]
    fn test_with_field_rejects_unknown_and_invalid() {
        let config = ComponentConfig::default_for(ComponentKind::Button);
        assert!(matches!(
            config.with_field("wobble", json!(1)),
            Err(ConfigError::UnknownField { .. })
        ));
        assert!(matches!(
            config.with_field("disabled", json!("yes")),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.with_field("componentType", json!("card")),
            Err(ConfigError::KindMismatch { .. })
        ));
        assert_eq!(config.with_field("componentType", json!("button")).unwrap(), config);
    }

    #[test]
    fn test_with_style_keeps_other_entries() {
        let config = ComponentConfig::default_for(ComponentKind::Card);
        let edited = config.with_style("color", json!("#fff")).unwrap();
        let card = edited.as_card().unwrap();
        assert_eq!(card.style.get(StyleProperty::Color), Some("#fff"));
        assert_eq!(card.style.get(StyleProperty::BackgroundColor), Some("#ffffff"));
        assert_eq!(card.header_title, "Card Title");
        assert_eq!(card.hover_style, config.as_card().unwrap().hover_style);
    }

    #[test]
    fn test_with_style_numeric_value() {
        let config = ComponentConfig::default_for(ComponentKind::Button);
        let edited = config.with_style("opacity", json!(0.5)).unwrap();
        assert_eq!(edited.as_button().unwrap().style.get(StyleProperty::Opacity), Some("0.5"));
    }

    #[test]
    fn test_button_style_section() {
        let config = ComponentConfig::default_for(ComponentKind::Button);
        let edited = config.with_style("letterSpacing", json!("0.05em")).unwrap();
        let button = edited.as_button().unwrap();
        assert_eq!(button.style.get(StyleProperty::LetterSpacing), Some("0.05em"));
        assert_eq!(button.background_color, "#3b82f6");
        assert!(edited.to_object().unwrap().contains_key("style"));
    }

    #[test]
    fn test_with_style_unknown_property() {
        let config = ComponentConfig::default_for(ComponentKind::Card);
        assert!(config.with_style("zIndex", json!("3")).is_err());
    }

    #[test]
    fn test_with_nested_null_removes() {
        let config = ComponentConfig::default_for(ComponentKind::Card);
        let edited = config
            .with_nested("hoverStyle", "transform", Value::Null)
            .unwrap();
        assert!(!edited
            .as_card()
            .unwrap()
            .hover_style
            .contains(StyleProperty::Transform));
    }

    #[test]
    fn test_with_nested_struct_section() {
        let config = ComponentConfig::default_for(ComponentKind::Button);
        let edited = config.with_nested("shadow", "blur", json!(20)).unwrap();
        let button = edited.as_button().unwrap();
        assert_eq!(button.shadow.blur, 20.0);
        assert_eq!(button.shadow.offset_y, 4.0);
    }

    #[test]
    fn test_merged_deep_keeps_omitted() {
        let config = ComponentConfig::default_for(ComponentKind::Card);
        let edited = config
            .merged_deep(&json!({"componentType": "card", "style": {"color": "#111"}, "headerTitle": "Hi"}))
            .unwrap();
        let card = edited.as_card().unwrap();
        assert_eq!(card.header_title, "Hi");
        assert_eq!(card.style.get(StyleProperty::Color), Some("#111"));
        assert_eq!(card.style.get(StyleProperty::MaxWidth), Some("400px"));
    }

    #[test]
    fn test_merged_shallow() {
        let config = ComponentConfig::default_for(ComponentKind::Button);
        let patch = json!({"text": "Go", "useShadow": true});
        let edited = config.merged_shallow(patch.as_object().unwrap()).unwrap();
        let button = edited.as_button().unwrap();
        assert_eq!(button.text, "Go");
        assert!(button.use_shadow);
    }
}
