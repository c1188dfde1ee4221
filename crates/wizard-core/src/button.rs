//! Button configuration schema.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::style::StyleProps;

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
    Link,
    Glass,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Corner treatment. Unknown values fall back to `Rounded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonShape {
    Square,
    #[default]
    Rounded,
    Pill,
}

impl ButtonShape {
    /// CSS border radius for the shape.
    pub fn css_radius(self) -> &'static str {
        match self {
            ButtonShape::Square => "0",
            ButtonShape::Rounded => "0.375rem",
            ButtonShape::Pill => "9999px",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonAnimation {
    #[default]
    None,
    Pulse,
    Bounce,
    Shake,
    Scale,
    SlideFade,
    Custom,
}

/// Font weight. Unknown values fall back to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Normal,
    #[default]
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconPosition {
    Left,
    Right,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::None => "none",
        }
    }
}

/// One stop of a linear gradient. `position` is a percentage in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position: position.clamp(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub inset: bool,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 6.0,
            spread: 0.0,
            color: "rgba(0, 0, 0, 0.1)".to_string(),
            inset: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    pub width: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub style: BorderStyle,
    pub color: String,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 0.0,
            style: BorderStyle::Solid,
            color: "#e2e8f0".to_string(),
        }
    }
}

/// Complete style configuration of a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonConfig {
    pub text: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub variant: ButtonVariant,
    #[serde(deserialize_with = "lenient::or_default")]
    pub size: ButtonSize,
    #[serde(deserialize_with = "lenient::or_default")]
    pub shape: ButtonShape,
    #[serde(deserialize_with = "lenient::or_default")]
    pub animation: ButtonAnimation,
    pub text_color: String,
    pub background_color: String,
    pub hover_background_color: String,
    pub text_hover_color: String,
    pub use_gradient: bool,
    pub gradient: Vec<GradientStop>,
    #[serde(deserialize_with = "lenient::number")]
    pub gradient_direction: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub font_weight: FontWeight,
    #[serde(deserialize_with = "lenient::or_default")]
    pub text_align: TextAlign,
    pub icon_name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub icon_position: IconPosition,
    #[serde(deserialize_with = "lenient::number")]
    pub icon_size: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub padding_x: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub padding_y: f64,
    pub use_shadow: bool,
    pub shadow: Shadow,
    pub border: Border,
    #[serde(deserialize_with = "lenient::number")]
    pub hover_scale: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub opacity: f64,
    pub use_transition: bool,
    #[serde(deserialize_with = "lenient::number")]
    pub transition_duration: f64,
    pub disabled: bool,
    /// Name of a registered custom animation, used when `animation` is `custom`.
    pub custom_animation_name: Option<String>,
    /// Name of the last theme applied.
    pub theme_name: Option<String>,
    /// Explicit radius that overrides the shape's radius (set by themes).
    pub border_radius: Option<String>,
    /// Free-form declarations layered over the typed fields.
    pub style: StyleProps,
    /// Pressed-state overrides.
    pub active_style: StyleProps,
    #[serde(rename = "customCSS")]
    pub custom_css: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: "Button".to_string(),
            variant: ButtonVariant::Solid,
            size: ButtonSize::Md,
            shape: ButtonShape::Rounded,
            animation: ButtonAnimation::None,
            text_color: "#ffffff".to_string(),
            background_color: "#3b82f6".to_string(),
            hover_background_color: "#2563eb".to_string(),
            text_hover_color: "#ffffff".to_string(),
            use_gradient: false,
            gradient: vec![
                GradientStop::new("#3b82f6", 0.0),
                GradientStop::new("#2563eb", 100.0),
            ],
            gradient_direction: 90.0,
            font_weight: FontWeight::Medium,
            text_align: TextAlign::Center,
            icon_name: String::new(),
            icon_position: IconPosition::None,
            icon_size: 16.0,
            padding_x: 16.0,
            padding_y: 8.0,
            use_shadow: false,
            shadow: Shadow::default(),
            border: Border::default(),
            hover_scale: 1.0,
            opacity: 1.0,
            use_transition: true,
            transition_duration: 300.0,
            disabled: false,
            custom_animation_name: None,
            theme_name: None,
            border_radius: None,
            style: StyleProps::new(),
            active_style: StyleProps::new(),
            custom_css: String::new(),
        }
    }
}

impl ButtonConfig {
    /// Radius actually rendered: the explicit override, else the shape's radius.
    pub fn effective_radius(&self) -> &str {
        self.border_radius
            .as_deref()
            .unwrap_or_else(|| self.shape.css_radius())
    }
}
