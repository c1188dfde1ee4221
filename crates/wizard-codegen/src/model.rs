//! Resolved style model shared by every printer.
//!
//! The resolver turns a configuration into rules, keyframes and markup with
//! all omission rules already applied. Printers only decide syntax.

use std::fmt;

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use wizard_core::{ComponentKind, ImagePosition};

/// A CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// Emitted verbatim in CSS, quoted in JS objects.
    Text(String),
    /// Unitless number, bare in both CSS and JS.
    Number(f64),
    /// An `animation` shorthand. Kept apart so printers can reference the
    /// keyframes by identifier (styled-components) or utility (Tailwind).
    Animation { name: String, timing: String },
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Text(text) => f.write_str(text),
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Animation { name, timing } => write!(f, "{} {}", name, timing),
        }
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Text(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Text(value.to_string())
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

/// Ordered CSS declarations keyed by kebab-case property name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(IndexMap<String, CssValue>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, keeping its position if already present.
    pub fn set(&mut self, property: &str, value: impl Into<CssValue>) {
        self.0.insert(property.to_string(), value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<CssValue> {
        self.0.shift_remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.0.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// camelCase form of a CSS property for JS style objects.
pub fn js_property(css_property: &str) -> String {
    css_property.to_case(Case::Camel)
}

/// kebab-case form of a camelCase property for CSS.
pub fn css_property(js_property: &str) -> String {
    js_property.to_case(Case::Kebab)
}

/// Sub-element of a card that carries its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPart {
    Overlay,
    Header,
    Title,
    Subtitle,
    Image,
    Body,
    Footer,
}

impl CardPart {
    pub fn class_name(self) -> &'static str {
        match self {
            CardPart::Overlay => "card-overlay",
            CardPart::Header => "card-header",
            CardPart::Title => "card-title",
            CardPart::Subtitle => "card-subtitle",
            CardPart::Image => "card-image",
            CardPart::Body => "card-body",
            CardPart::Footer => "card-footer",
        }
    }

    /// Identifier of the part's style object in JS output.
    pub fn style_ident(self) -> &'static str {
        match self {
            CardPart::Overlay => "overlayStyle",
            CardPart::Header => "headerStyle",
            CardPart::Title => "titleStyle",
            CardPart::Subtitle => "subtitleStyle",
            CardPart::Image => "imageStyle",
            CardPart::Body => "bodyStyle",
            CardPart::Footer => "footerStyle",
        }
    }
}

/// Which element and state a rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleState {
    Base,
    Hover,
    Active,
    Disabled,
    Part(CardPart),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub state: RuleState,
    pub declarations: Declarations,
}

/// One frame selector (`"0%, 100%"`, `"from"`) and its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeRule {
    pub selector: String,
    pub declarations: Declarations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesBlock {
    pub name: String,
    pub frames: Vec<KeyframeRule>,
    /// Tailwind utility that plays an equivalent animation, when one exists.
    pub tailwind_utility: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconMarkup {
    pub side: IconSide,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonMarkup {
    pub text: String,
    pub icon: Option<IconMarkup>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardHeader {
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub position: ImagePosition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardMarkup {
    pub overlay: bool,
    pub header: Option<CardHeader>,
    pub image: Option<CardImage>,
    pub body: String,
    pub footer: Option<String>,
}

/// Element content, independent of syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Button(ButtonMarkup),
    Card(CardMarkup),
}

/// A configuration resolved to rules, keyframes and markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub kind: ComponentKind,
    pub class_name: String,
    pub component_name: String,
    /// Base rule first, then state rules, then card part rules.
    pub rules: Vec<StyleRule>,
    pub keyframes: Vec<KeyframesBlock>,
    pub markup: Markup,
    /// Emit a `prefers-reduced-motion` override that stops the animation.
    pub reduce_motion: bool,
}

impl ResolvedComponent {
    pub fn rule(&self, state: RuleState) -> Option<&StyleRule> {
        self.rules.iter().find(|rule| rule.state == state)
    }

    pub fn base(&self) -> Option<&Declarations> {
        self.rule(RuleState::Base).map(|rule| &rule.declarations)
    }

    pub fn has_rule(&self, state: RuleState) -> bool {
        self.rule(state).is_some()
    }

    pub fn keyframes_named(&self, name: &str) -> Option<&KeyframesBlock> {
        self.keyframes.iter().find(|block| block.name == name)
    }

    pub fn button(&self) -> Option<&ButtonMarkup> {
        match &self.markup {
            Markup::Button(button) => Some(button),
            Markup::Card(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_case_conversion() {
        assert_eq!(js_property("background-color"), "backgroundColor");
        assert_eq!(js_property("grid-template-columns"), "gridTemplateColumns");
        assert_eq!(js_property("color"), "color");
        assert_eq!(css_property("backgroundPosition"), "background-position");
        assert_eq!(css_property("boxShadow"), "box-shadow");
    }

    #[test]
    fn test_declarations_order() {
        let mut decls = Declarations::new();
        decls.set("color", "#fff");
        decls.set("opacity", 0.5);
        decls.set("color", "#000");
        let order: Vec<_> = decls.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["color", "opacity"]);
        assert_eq!(decls.get("color"), Some(&CssValue::Text("#000".to_string())));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(CssValue::Number(600.0).to_string(), "600");
        assert_eq!(
            CssValue::Animation {
                name: "pulse".to_string(),
                timing: "2s infinite".to_string()
            }
            .to_string(),
            "pulse 2s infinite"
        );
    }
}
