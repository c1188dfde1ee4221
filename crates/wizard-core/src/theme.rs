//! Color themes and how they apply to configurations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::button::ButtonShape;
use crate::config::ComponentConfig;
use crate::error::ConfigError;
use crate::style::StyleProperty;

/// Semantic color role within a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRole {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
    Info,
    Neutral,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 7] = [
        ThemeRole::Primary,
        ThemeRole::Secondary,
        ThemeRole::Danger,
        ThemeRole::Success,
        ThemeRole::Warning,
        ThemeRole::Info,
        ThemeRole::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeRole::Primary => "primary",
            ThemeRole::Secondary => "secondary",
            ThemeRole::Danger => "danger",
            ThemeRole::Success => "success",
            ThemeRole::Warning => "warning",
            ThemeRole::Info => "info",
            ThemeRole::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeRole {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ConfigError::invalid_value("role", format!("unknown theme role: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColors {
    pub base: String,
    pub hover: String,
    pub text: String,
}

impl RoleColors {
    fn new(base: &str, hover: &str, text: &str) -> Self {
        Self {
            base: base.to_string(),
            hover: hover.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub small: String,
    pub medium: String,
    pub large: String,
    pub pill: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowScale {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// A named palette of semantic color roles plus shared radius and shadow scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub primary: RoleColors,
    pub secondary: RoleColors,
    pub danger: RoleColors,
    pub success: RoleColors,
    pub warning: RoleColors,
    pub info: RoleColors,
    pub neutral: RoleColors,
    pub border_radius: RadiusScale,
    pub font_family: String,
    pub shadows: ShadowScale,
}

impl Theme {
    pub fn role(&self, role: ThemeRole) -> &RoleColors {
        match role {
            ThemeRole::Primary => &self.primary,
            ThemeRole::Secondary => &self.secondary,
            ThemeRole::Danger => &self.danger,
            ThemeRole::Success => &self.success,
            ThemeRole::Warning => &self.warning,
            ThemeRole::Info => &self.info,
            ThemeRole::Neutral => &self.neutral,
        }
    }

    /// Overwrite the color fields of `config` with this theme's `role` colors.
    ///
    /// Buttons take base/hover/text colors and, for rounded and pill shapes,
    /// the theme radius. Cards take base and text colors on `style`, the
    /// hover color on `hoverStyle`, and the medium radius if they set one.
    pub fn apply_to(&self, config: &mut ComponentConfig, role: ThemeRole) {
        let colors = self.role(role);
        match config {
            ComponentConfig::Button(button) => {
                button.text_color = colors.text.clone();
                button.background_color = colors.base.clone();
                button.hover_background_color = colors.hover.clone();
                button.text_hover_color = colors.text.clone();
                match button.shape {
                    ButtonShape::Rounded => {
                        button.border_radius = Some(self.border_radius.medium.clone())
                    }
                    ButtonShape::Pill => {
                        button.border_radius = Some(self.border_radius.pill.clone())
                    }
                    ButtonShape::Square => {}
                }
                button.theme_name = Some(self.name.clone());
            }
            ComponentConfig::Card(card) => {
                card.style.set(StyleProperty::BackgroundColor, colors.base.clone());
                card.style.set(StyleProperty::Color, colors.text.clone());
                card.hover_style
                    .set(StyleProperty::BackgroundColor, colors.hover.clone());
                if card.style.contains(StyleProperty::BorderRadius) {
                    card.style
                        .set(StyleProperty::BorderRadius, self.border_radius.medium.clone());
                }
            }
        }
    }
}

/// The themes shipped with the wizard. The first is the default.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme {
            name: "Default".to_string(),
            description: "Default theme with blue primary color".to_string(),
            primary: RoleColors::new("#3b82f6", "#2563eb", "#ffffff"),
            secondary: RoleColors::new("#6b7280", "#4b5563", "#ffffff"),
            danger: RoleColors::new("#ef4444", "#dc2626", "#ffffff"),
            success: RoleColors::new("#10b981", "#059669", "#ffffff"),
            warning: RoleColors::new("#f59e0b", "#d97706", "#ffffff"),
            info: RoleColors::new("#3b82f6", "#2563eb", "#ffffff"),
            neutral: RoleColors::new("#9ca3af", "#6b7280", "#ffffff"),
            border_radius: RadiusScale {
                small: "0.25rem".to_string(),
                medium: "0.375rem".to_string(),
                large: "0.5rem".to_string(),
                pill: "9999px".to_string(),
            },
            font_family: "'Inter', system-ui, sans-serif".to_string(),
            shadows: ShadowScale {
                small: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".to_string(),
                medium: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
                    .to_string(),
                large: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"
                    .to_string(),
            },
        },
        Theme {
            name: "Dark Mode".to_string(),
            description: "Dark theme with purple accents".to_string(),
            primary: RoleColors::new("#8b5cf6", "#7c3aed", "#ffffff"),
            secondary: RoleColors::new("#4b5563", "#374151", "#ffffff"),
            danger: RoleColors::new("#f87171", "#ef4444", "#ffffff"),
            success: RoleColors::new("#34d399", "#10b981", "#ffffff"),
            warning: RoleColors::new("#fbbf24", "#f59e0b", "#000000"),
            info: RoleColors::new("#60a5fa", "#3b82f6", "#ffffff"),
            neutral: RoleColors::new("#6b7280", "#4b5563", "#ffffff"),
            border_radius: RadiusScale {
                small: "0.25rem".to_string(),
                medium: "0.375rem".to_string(),
                large: "0.5rem".to_string(),
                pill: "9999px".to_string(),
            },
            font_family: "'Inter', system-ui, sans-serif".to_string(),
            shadows: ShadowScale {
                small: "0 1px 2px 0 rgba(0, 0, 0, 0.3)".to_string(),
                medium: "0 4px 6px -1px rgba(0, 0, 0, 0.3), 0 2px 4px -1px rgba(0, 0, 0, 0.2)"
                    .to_string(),
                large: "0 10px 15px -3px rgba(0, 0, 0, 0.3), 0 4px 6px -2px rgba(0, 0, 0, 0.2)"
                    .to_string(),
            },
        },
        Theme {
            name: "Soft UI".to_string(),
            description: "Soft UI design system with rounded elements".to_string(),
            primary: RoleColors::new("#6366f1", "#4f46e5", "#ffffff"),
            secondary: RoleColors::new("#e2e8f0", "#cbd5e1", "#1e293b"),
            danger: RoleColors::new("#fb7185", "#f43f5e", "#ffffff"),
            success: RoleColors::new("#4ade80", "#22c55e", "#ffffff"),
            warning: RoleColors::new("#fdba74", "#fb923c", "#000000"),
            info: RoleColors::new("#93c5fd", "#60a5fa", "#000000"),
            neutral: RoleColors::new("#e2e8f0", "#cbd5e1", "#1e293b"),
            border_radius: RadiusScale {
                small: "0.5rem".to_string(),
                medium: "0.75rem".to_string(),
                large: "1rem".to_string(),
                pill: "9999px".to_string(),
            },
            font_family: "'Plus Jakarta Sans', system-ui, sans-serif".to_string(),
            shadows: ShadowScale {
                small: "0 2px 4px rgba(0, 0, 0, 0.04), 0 0 10px rgba(0, 0, 0, 0.03)".to_string(),
                medium: "0 4px 10px rgba(0, 0, 0, 0.04), 0 0 20px rgba(0, 0, 0, 0.03)"
                    .to_string(),
                large: "0 8px 30px rgba(0, 0, 0, 0.04), 0 0 30px rgba(0, 0, 0, 0.03)".to_string(),
            },
        },
    ]
}

/// Look up a built-in theme by name.
pub fn find_theme(name: &str) -> Option<Theme> {
    builtin_themes().into_iter().find(|theme| theme.name == name)
}
