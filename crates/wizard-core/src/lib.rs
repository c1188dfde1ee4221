//! Configuration schema for the component wizard.
//!
//! A [`ComponentConfig`] is one complete, self-consistent snapshot of a
//! component's style settings, tagged by [`ComponentKind`]. This crate also
//! carries the data the wizard ships with: [`builtin_themes`],
//! [`builtin_presets`] and [`animation_presets`].
//!
//! # Example
//!
//! ```
//! use wizard_core::{ComponentConfig, ComponentKind};
//! use serde_json::json;
//!
//! let button = ComponentConfig::default_for(ComponentKind::Button);
//! let pill = button.with_field("shape", json!("pill")).unwrap();
//! assert_eq!(pill.as_button().unwrap().effective_radius(), "9999px");
//! ```

pub mod animation;
pub mod button;
pub mod card;
pub mod config;
pub mod error;
pub mod kind;
mod lenient;
pub mod merge;
pub mod preset;
pub mod style;
pub mod theme;

pub use animation::{
    animation_presets, AnimationDirection, AnimationPreset, AnimationRegistry, CustomAnimation,
    Easing, IterationCount, KeyframeProperties, KeyframeStep,
};
pub use button::{
    Border, BorderStyle, ButtonAnimation, ButtonConfig, ButtonShape, ButtonSize, ButtonVariant,
    FontWeight, GradientStop, IconPosition, Shadow, TextAlign,
};
pub use card::{
    BackgroundType, CardConfig, EntranceAnimation, FillMode, FlexAlign, FlexDirection,
    FlexJustify, GradientDirection, ImageHeight, ImagePosition, LayoutType,
};
pub use config::{ComponentConfig, KIND_FIELD};
pub use error::{ConfigError, Result};
pub use kind::{ComponentInfo, ComponentKind};
pub use preset::{builtin_presets, presets_for, Preset};
pub use style::{StyleProperty, StyleProps};
pub use theme::{builtin_themes, find_theme, RoleColors, Theme, ThemeRole};
