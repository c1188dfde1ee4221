//! Closed set of CSS-like style properties used by style sections.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::lenient;

macro_rules! style_properties {
    ($($variant:ident => $camel:literal, $css:literal;)*) => {
        /// A named style property.
        ///
        /// Serialized with its camelCase name, the way style sections are
        /// persisted and imported.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum StyleProperty {
            $(
                #[serde(rename = $camel)]
                $variant,
            )*
        }

        impl StyleProperty {
            /// Every property, in declaration order.
            pub const ALL: &'static [StyleProperty] = &[$(StyleProperty::$variant),*];

            /// camelCase name used in JSON and JS style objects.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(StyleProperty::$variant => $camel,)*
                }
            }

            /// kebab-case CSS property name.
            pub fn css_name(self) -> &'static str {
                match self {
                    $(StyleProperty::$variant => $css,)*
                }
            }
        }
    };
}

style_properties! {
    Color => "color", "color";
    BackgroundColor => "backgroundColor", "background-color";
    BorderColor => "borderColor", "border-color";
    BorderWidth => "borderWidth", "border-width";
    BorderStyle => "borderStyle", "border-style";
    BorderRadius => "borderRadius", "border-radius";
    FontFamily => "fontFamily", "font-family";
    FontWeight => "fontWeight", "font-weight";
    FontSize => "fontSize", "font-size";
    FontStyle => "fontStyle", "font-style";
    LetterSpacing => "letterSpacing", "letter-spacing";
    TextAlign => "textAlign", "text-align";
    TextTransform => "textTransform", "text-transform";
    TextDecoration => "textDecoration", "text-decoration";
    PaddingTop => "paddingTop", "padding-top";
    PaddingRight => "paddingRight", "padding-right";
    PaddingBottom => "paddingBottom", "padding-bottom";
    PaddingLeft => "paddingLeft", "padding-left";
    Display => "display", "display";
    AlignItems => "alignItems", "align-items";
    JustifyContent => "justifyContent", "justify-content";
    Width => "width", "width";
    Height => "height", "height";
    MaxWidth => "maxWidth", "max-width";
    Overflow => "overflow", "overflow";
    Cursor => "cursor", "cursor";
    BoxShadow => "boxShadow", "box-shadow";
    Opacity => "opacity", "opacity";
    Transform => "transform", "transform";
    TransitionProperty => "transitionProperty", "transition-property";
    TransitionDuration => "transitionDuration", "transition-duration";
    TransitionTimingFunction => "transitionTimingFunction", "transition-timing-function";
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleProperty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s || p.css_name() == s)
            .ok_or_else(|| ConfigError::UnknownStyleProperty(s.to_string()))
    }
}

/// An ordered style section.
///
/// Insertion order is preserved so generated rules list declarations in the
/// order the user set them. Numeric values are stored in their JSON
/// spelling, so `{"opacity": 0.5}` reads as `"0.5"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleProps(IndexMap<StyleProperty, String>);

impl<'de> Deserialize<'de> for StyleProps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<StyleProperty, Value>::deserialize(deserializer)?;
        let mut props = StyleProps::new();
        for (property, value) in raw {
            match lenient::style_text(&value) {
                Some(text) => {
                    props.set(property, text);
                }
                None => {
                    tracing::debug!(property = property.as_str(), %value, "dropping non-scalar style value");
                }
            }
        }
        Ok(props)
    }
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.0.get(&property).map(String::as_str)
    }

    /// Set a property, keeping its position if it was already present.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) -> Option<String> {
        self.0.insert(property, value.into())
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<String> {
        self.0.shift_remove(&property)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.0.contains_key(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Overlay another section on top of this one.
    pub fn merge(&mut self, other: &StyleProps) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }
}

impl FromIterator<(StyleProperty, String)> for StyleProps {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
