//! Card configuration schema.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::style::{StyleProperty, StyleProps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Top,
    Bottom,
}

/// Image height, stored as the Tailwind height class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageHeight {
    #[serde(rename = "h-32")]
    Small,
    #[default]
    #[serde(rename = "h-48")]
    Medium,
    #[serde(rename = "h-64")]
    Large,
    #[serde(rename = "h-80")]
    ExtraLarge,
}

impl ImageHeight {
    pub fn pixels(self) -> u32 {
        match self {
            ImageHeight::Small => 128,
            ImageHeight::Medium => 192,
            ImageHeight::Large => 256,
            ImageHeight::ExtraLarge => 320,
        }
    }

    pub fn tailwind_class(self) -> &'static str {
        match self {
            ImageHeight::Small => "h-32",
            ImageHeight::Medium => "h-48",
            ImageHeight::Large => "h-64",
            ImageHeight::ExtraLarge => "h-80",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    #[default]
    Solid,
    Gradient,
    Image,
}

/// Direction of a two-color card gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientDirection {
    #[default]
    #[serde(rename = "to-r")]
    ToRight,
    #[serde(rename = "to-l")]
    ToLeft,
    #[serde(rename = "to-b")]
    ToBottom,
    #[serde(rename = "to-t")]
    ToTop,
    #[serde(rename = "to-tr")]
    ToTopRight,
    #[serde(rename = "to-bl")]
    ToBottomLeft,
}

impl GradientDirection {
    /// Keyword form accepted by `linear-gradient()`.
    pub fn css_keyword(self) -> &'static str {
        match self {
            GradientDirection::ToRight => "to right",
            GradientDirection::ToLeft => "to left",
            GradientDirection::ToBottom => "to bottom",
            GradientDirection::ToTop => "to top",
            GradientDirection::ToTopRight => "to top right",
            GradientDirection::ToBottomLeft => "to bottom left",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Standard,
    Flex,
    Grid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

/// Cross-axis alignment for flex layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlign {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

impl FlexAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexAlign::Stretch => "stretch",
            FlexAlign::FlexStart => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::FlexEnd => "flex-end",
        }
    }
}

/// Main-axis distribution for flex layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexJustify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

impl FlexJustify {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexJustify::FlexStart => "flex-start",
            FlexJustify::Center => "center",
            FlexJustify::FlexEnd => "flex-end",
            FlexJustify::SpaceBetween => "space-between",
            FlexJustify::SpaceAround => "space-around",
        }
    }
}

/// Entrance animation played when the card appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntranceAnimation {
    #[default]
    None,
    Fade,
    Scale,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Rotate,
    Bounce,
    Pulse,
    Shake,
}

impl EntranceAnimation {
    pub fn as_str(self) -> &'static str {
        match self {
            EntranceAnimation::None => "none",
            EntranceAnimation::Fade => "fade",
            EntranceAnimation::Scale => "scale",
            EntranceAnimation::SlideUp => "slide-up",
            EntranceAnimation::SlideDown => "slide-down",
            EntranceAnimation::SlideLeft => "slide-left",
            EntranceAnimation::SlideRight => "slide-right",
            EntranceAnimation::Rotate => "rotate",
            EntranceAnimation::Bounce => "bounce",
            EntranceAnimation::Pulse => "pulse",
            EntranceAnimation::Shake => "shake",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
            FillMode::Both => "both",
        }
    }
}

/// Default transition timing used by cards and their entrance animation.
pub const DEFAULT_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Complete style configuration of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    pub show_header: bool,
    pub header_title: String,
    pub header_subtitle: String,
    pub show_image: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub image_position: ImagePosition,
    #[serde(deserialize_with = "lenient::or_default")]
    pub image_height: ImageHeight,
    pub image_url: String,
    pub image_alt_text: String,
    pub body_content: String,
    pub show_footer: bool,
    pub footer_content: String,

    #[serde(deserialize_with = "lenient::or_default")]
    pub background_type: BackgroundType,
    pub gradient_from: Option<String>,
    pub gradient_to: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub gradient_direction: GradientDirection,
    pub background_image: Option<String>,
    pub background_size: String,
    pub background_overlay: Option<String>,

    pub is_hoverable: bool,
    pub is_pressable: bool,
    pub is_blurred: bool,

    #[serde(deserialize_with = "lenient::or_default")]
    pub layout_type: LayoutType,
    #[serde(deserialize_with = "lenient::or_default")]
    pub flex_direction: FlexDirection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub align_items: FlexAlign,
    #[serde(deserialize_with = "lenient::or_default")]
    pub justify_content: FlexJustify,
    #[serde(deserialize_with = "lenient::number")]
    pub grid_columns: u8,
    #[serde(deserialize_with = "lenient::number")]
    pub grid_gap: f64,

    pub aspect_ratio: Option<String>,
    pub filter: Option<String>,

    #[serde(deserialize_with = "lenient::or_default")]
    pub animation_type: EntranceAnimation,
    #[serde(deserialize_with = "lenient::number")]
    pub animation_delay: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub animation_direction: crate::animation::AnimationDirection,
    pub animation_iteration_count: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub animation_fill_mode: FillMode,
    pub reduce_motion: bool,

    #[serde(rename = "customCSS")]
    pub custom_css: String,
    pub style: StyleProps,
    pub hover_style: StyleProps,
    pub active_style: StyleProps,
}

impl Default for CardConfig {
    fn default() -> Self {
        use StyleProperty::*;

        let style = StyleProps::new()
            .with(BackgroundColor, "#ffffff")
            .with(BorderColor, "#e4e4e7")
            .with(BorderWidth, "1px")
            .with(BorderStyle, "solid")
            .with(BorderRadius, "12px")
            .with(
                BoxShadow,
                "0 4px 6px -1px rgba(0,0,0,0.1), 0 2px 4px -1px rgba(0,0,0,0.06)",
            )
            .with(Width, "100%")
            .with(MaxWidth, "400px")
            .with(Overflow, "hidden")
            .with(PaddingTop, "0px")
            .with(PaddingRight, "0px")
            .with(PaddingBottom, "0px")
            .with(PaddingLeft, "0px")
            .with(TransitionProperty, "all")
            .with(TransitionDuration, "150ms")
            .with(TransitionTimingFunction, DEFAULT_EASING);

        let hover_style = StyleProps::new()
            .with(
                BoxShadow,
                "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -2px rgba(0,0,0,0.05)",
            )
            .with(Transform, "translateY(-4px)");

        Self {
            show_header: true,
            header_title: "Card Title".to_string(),
            header_subtitle: "Card Subtitle".to_string(),
            show_image: true,
            image_position: ImagePosition::Top,
            image_height: ImageHeight::Medium,
            image_url: String::new(),
            image_alt_text: String::new(),
            body_content:
                "This is a sample card content. You can customize this text and add more elements."
                    .to_string(),
            show_footer: true,
            footer_content: String::new(),
            background_type: BackgroundType::Solid,
            gradient_from: None,
            gradient_to: None,
            gradient_direction: GradientDirection::ToRight,
            background_image: None,
            background_size: "cover".to_string(),
            background_overlay: None,
            is_hoverable: false,
            is_pressable: false,
            is_blurred: false,
            layout_type: LayoutType::Standard,
            flex_direction: FlexDirection::Row,
            align_items: FlexAlign::Stretch,
            justify_content: FlexJustify::FlexStart,
            grid_columns: 2,
            grid_gap: 16.0,
            aspect_ratio: None,
            filter: None,
            animation_type: EntranceAnimation::None,
            animation_delay: 0.0,
            animation_direction: crate::animation::AnimationDirection::Normal,
            animation_iteration_count: "1".to_string(),
            animation_fill_mode: FillMode::None,
            reduce_motion: false,
            custom_css: String::new(),
            style,
            hover_style,
            active_style: StyleProps::new(),
        }
    }
}

impl CardConfig {
    /// Entrance animation duration in milliseconds, read from the transition
    /// duration style (`"150ms"` → 150). Falls back to 150.
    pub fn animation_duration_ms(&self) -> f64 {
        self.style
            .get(StyleProperty::TransitionDuration)
            .and_then(|d| d.trim().trim_end_matches("ms").trim().parse::<f64>().ok())
            .unwrap_or(150.0)
    }

    /// Entrance animation easing, read from the transition timing style.
    pub fn animation_easing(&self) -> &str {
        self.style
            .get(StyleProperty::TransitionTimingFunction)
            .unwrap_or(DEFAULT_EASING)
    }

    /// Grid column count clamped to the supported 1..=4 range.
    pub fn grid_column_count(&self) -> u8 {
        self.grid_columns.clamp(1, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let card = CardConfig::default();
        assert!(card.show_header);
        assert_eq!(card.image_height.pixels(), 192);
        assert_eq!(card.style.get(StyleProperty::MaxWidth), Some("400px"));
        assert!(card.active_style.is_empty());
    }

    #[test]
    fn test_form_values_as_strings() {
        let card: CardConfig = serde_json::from_str(
            r#"{"gridColumns":"3","gridGap":"24","imageHeight":"h-80","gradientDirection":"to-tr"}"#,
        )
        .unwrap();
        assert_eq!(card.grid_columns, 3);
        assert_eq!(card.grid_gap, 24.0);
        assert_eq!(card.image_height, ImageHeight::ExtraLarge);
        assert_eq!(card.gradient_direction.css_keyword(), "to top right");
    }

    #[test]
    fn test_animation_timing_from_style() {
        let mut card = CardConfig::default();
        assert_eq!(card.animation_duration_ms(), 150.0);
        card.style.set(StyleProperty::TransitionDuration, "400ms");
        assert_eq!(card.animation_duration_ms(), 400.0);
        card.style.set(StyleProperty::TransitionDuration, "slow");
        assert_eq!(card.animation_duration_ms(), 150.0);
        assert_eq!(card.animation_easing(), DEFAULT_EASING);
    }

    #[test]
    fn test_grid_columns_clamped() {
        let card = CardConfig {
            grid_columns: 9,
            ..CardConfig::default()
        };
        assert_eq!(card.grid_column_count(), 4);
    }
}
