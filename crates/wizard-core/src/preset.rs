//! Named partial configurations.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::card::CardConfig;
use crate::config::ComponentConfig;
use crate::error::{ConfigError, Result};
use crate::kind::ComponentKind;
use crate::style::StyleProperty;
use crate::theme::{Theme, ThemeRole};

/// A named, categorized partial configuration for one component kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub category: String,
    pub component_type: ComponentKind,
    /// Top-level fields to overwrite.
    #[serde(default)]
    pub state: Map<String, Value>,
    /// Theme applied (primary role) after the fields are merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Preset {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        component_type: ComponentKind,
        state: Value,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            component_type,
            state: match state {
                Value::Object(map) => map,
                _ => Map::new(),
            },
            theme: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidPreset(
                "preset name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Merge this preset into `config`, which must be of the preset's kind.
    pub fn apply_to(&self, config: &ComponentConfig) -> Result<ComponentConfig> {
        if config.kind() != self.component_type {
            return Err(ConfigError::KindMismatch {
                from: config.kind(),
                to: self.component_type,
            });
        }
        let mut merged = config.merged_shallow(&self.state)?;
        if let Some(theme) = &self.theme {
            theme.apply_to(&mut merged, ThemeRole::Primary);
        }
        Ok(merged)
    }
}

fn button(name: &str, category: &str, state: Value) -> Preset {
    Preset::new(name, category, ComponentKind::Button, state)
}

fn card(name: &str, category: &str, state: Value) -> Preset {
    Preset::new(name, category, ComponentKind::Card, state)
}

fn card_style(overrides: &[(StyleProperty, &str)]) -> Value {
    let mut style = CardConfig::default().style;
    for (property, value) in overrides {
        style.set(*property, *value);
    }
    json!(style)
}

/// Presets shipped with the wizard.
pub fn builtin_presets() -> Vec<Preset> {
    use StyleProperty::*;

    vec![
        button("Primary", "Basic", json!({
            "text": "Primary",
            "backgroundColor": "#3b82f6",
            "hoverBackgroundColor": "#2563eb"
        })),
        button("Secondary", "Basic", json!({
            "text": "Secondary",
            "backgroundColor": "#6b7280",
            "hoverBackgroundColor": "#4b5563"
        })),
        button("Danger", "Basic", json!({
            "text": "Danger",
            "backgroundColor": "#ef4444",
            "hoverBackgroundColor": "#dc2626"
        })),
        button("Success", "Basic", json!({
            "text": "Success",
            "backgroundColor": "#10b981",
            "hoverBackgroundColor": "#059669"
        })),
        button("Warning", "Basic", json!({
            "text": "Warning",
            "backgroundColor": "#f59e0b",
            "hoverBackgroundColor": "#d97706"
        })),
        button("Glass", "Special", json!({
            "text": "Glass Button",
            "variant": "glass",
            "backgroundColor": "rgba(255, 255, 255, 0.15)",
            "textColor": "#ffffff",
            "hoverBackgroundColor": "rgba(255, 255, 255, 0.25)",
            "useShadow": true,
            "shadow": {
                "offsetX": 0, "offsetY": 4, "blur": 12, "spread": 0,
                "color": "rgba(0, 0, 0, 0.05)", "inset": false
            },
            "border": {"width": 1, "style": "solid", "color": "rgba(255, 255, 255, 0.3)"}
        })),
        button("Gradient Blue", "Gradient", json!({
            "text": "Gradient",
            "useGradient": true,
            "backgroundColor": "transparent",
            "gradient": [
                {"color": "#3b82f6", "position": 0},
                {"color": "#2563eb", "position": 100}
            ]
        })),
        button("Gradient Purple", "Gradient", json!({
            "text": "Gradient",
            "useGradient": true,
            "backgroundColor": "transparent",
            "gradient": [
                {"color": "#8b5cf6", "position": 0},
                {"color": "#6d28d9", "position": 100}
            ]
        })),
        button("Ghost", "Special", json!({
            "text": "Ghost",
            "variant": "ghost",
            "textColor": "#3b82f6",
            "backgroundColor": "transparent",
            "hoverBackgroundColor": "rgba(59, 130, 246, 0.08)",
            "border": {"width": 0, "style": "solid", "color": "transparent"}
        })),
        button("Outline", "Special", json!({
            "text": "Outline",
            "variant": "outline",
            "textColor": "#3b82f6",
            "backgroundColor": "transparent",
            "hoverBackgroundColor": "rgba(59, 130, 246, 0.08)",
            "border": {"width": 1, "style": "solid", "color": "#3b82f6"}
        })),
        button("Rounded Pill", "Shape", json!({"text": "Rounded Pill", "shape": "pill"})),
        button("Square", "Shape", json!({"text": "Square", "shape": "square"})),
        button("Mini", "Size", json!({
            "text": "Mini", "size": "xs", "paddingX": 10, "paddingY": 4
        })),
        button("Large", "Size", json!({
            "text": "Large", "size": "xl", "paddingX": 24, "paddingY": 12
        })),
        button("Scale Animation", "Animation", json!({
            "text": "Hover Scale", "animation": "scale", "hoverScale": 1.05
        })),
        button("Pulse Animation", "Animation", json!({"text": "Pulse", "animation": "pulse"})),
        button("Shadowed", "Effects", json!({"text": "With Shadow", "useShadow": true})),
        card("Basic", "Basic", json!({
            "showImage": false,
            "isHoverable": false,
            "style": card_style(&[])
        })),
        card("Elevated", "Basic", json!({
            "isHoverable": true,
            "style": card_style(&[
                (BorderWidth, "0px"),
                (BoxShadow, "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -2px rgba(0,0,0,0.05)"),
            ])
        })),
        card("Outlined", "Basic", json!({
            "style": card_style(&[
                (BorderWidth, "2px"),
                (BorderColor, "#d4d4d8"),
                (BoxShadow, "none"),
            ])
        })),
        card("Gradient", "Background", json!({
            "backgroundType": "gradient",
            "gradientFrom": "#3b82f6",
            "gradientTo": "#8b5cf6",
            "gradientDirection": "to-tr",
            "style": card_style(&[(Color, "#ffffff"), (BorderWidth, "0px")])
        })),
        card("Glass", "Background", json!({
            "isBlurred": true,
            "style": card_style(&[
                (BackgroundColor, "rgba(255, 255, 255, 0.1)"),
                (BorderColor, "rgba(255, 255, 255, 0.2)"),
            ])
        })),
    ]
}

/// Built-in presets for one kind.
pub fn presets_for(kind: ComponentKind) -> Vec<Preset> {
    builtin_presets()
        .into_iter()
        .filter(|preset| preset.component_type == kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ButtonAnimation, ButtonShape, ButtonVariant};
    use crate::card::BackgroundType;

    fn find(name: &str, kind: ComponentKind) -> Preset {
        presets_for(kind)
            .into_iter()
            .find(|p| p.name == name)
            .unwrap()
    }

    #[test]
    fn test_every_builtin_applies() {
        for preset in builtin_presets() {
            let base = ComponentConfig::default_for(preset.component_type);
            assert!(preset.apply_to(&base).is_ok(), "preset {} failed", preset.name);
        }
        assert_eq!(presets_for(ComponentKind::Button).len(), 17);
    }

    #[test]
    fn test_glass_preset() {
        let base = ComponentConfig::default_for(ComponentKind::Button);
        let glass = find("Glass", ComponentKind::Button).apply_to(&base).unwrap();
        let button = glass.as_button().unwrap();
        assert_eq!(button.variant, ButtonVariant::Glass);
        assert_eq!(button.shadow.blur, 12.0);
        assert_eq!(button.border.width, 1.0);
    }

    #[test]
    fn test_preset_is_partial() {
        let base = ComponentConfig::default_for(ComponentKind::Button);
        let pill = find("Rounded Pill", ComponentKind::Button).apply_to(&base).unwrap();
        let pulsing = find("Pulse Animation", ComponentKind::Button)
            .apply_to(&pill)
            .unwrap();
        let button = pulsing.as_button().unwrap();
        assert_eq!(button.shape, ButtonShape::Pill);
        assert_eq!(button.animation, ButtonAnimation::Pulse);
        assert_eq!(button.text, "Pulse");
    }

    #[test]
    fn test_kind_mismatch() {
        let base = ComponentConfig::default_for(ComponentKind::Card);
        let err = find("Danger", ComponentKind::Button).apply_to(&base).unwrap_err();
        assert!(matches!(err, ConfigError::KindMismatch { .. }));
    }

    #[test]
    fn test_card_gradient_preset() {
        let base = ComponentConfig::default_for(ComponentKind::Card);
        let config = find("Gradient", ComponentKind::Card).apply_to(&base).unwrap();
        let card = config.as_card().unwrap();
        assert_eq!(card.background_type, BackgroundType::Gradient);
        assert_eq!(card.gradient_from.as_deref(), Some("#3b82f6"));
        assert_eq!(card.style.get(StyleProperty::MaxWidth), Some("400px"));
    }

    #[test]
    fn test_preset_theme_applied() {
        let mut preset = find("Square", ComponentKind::Button);
        preset.theme = crate::theme::find_theme("Dark Mode");
        let config = preset
            .apply_to(&ComponentConfig::default_for(ComponentKind::Button))
            .unwrap();
        assert_eq!(config.as_button().unwrap().background_color, "#8b5cf6");
    }

    #[test]
    fn test_validate_name() {
        let preset = Preset::new(" ", "Custom", ComponentKind::Button, json!({}));
        assert!(preset.validate().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let preset = find("Mini", ComponentKind::Button);
        let value = serde_json::to_value(&preset).unwrap();
        assert_eq!(value["componentType"], "button");
        assert_eq!(value["state"]["size"], "xs");
        assert!(value.get("theme").is_none());
    }
}
