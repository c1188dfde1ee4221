//! Custom keyframe animations and the registry that names them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Control points used when `cubic-bezier` is selected without explicit points.
pub const DEFAULT_CUBIC_BEZIER: [f64; 4] = [0.42, 0.0, 0.58, 1.0];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::CubicBezier => "cubic-bezier",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl AnimationDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationDirection::Normal => "normal",
            AnimationDirection::Reverse => "reverse",
            AnimationDirection::Alternate => "alternate",
            AnimationDirection::AlternateReverse => "alternate-reverse",
        }
    }
}

/// How many times an animation runs.
///
/// Serialized as a JSON number or the string `"infinite"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationCount {
    Count(f64),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Count(1.0)
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Count(n) => write!(f, "{}", n),
            IterationCount::Infinite => f.write_str("infinite"),
        }
    }
}

impl Serialize for IterationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            IterationCount::Count(n) => serializer.serialize_f64(*n),
            IterationCount::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for IterationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let count = match &value {
            Value::Number(n) => n.as_f64().map(IterationCount::Count),
            Value::String(s) if s == "infinite" => Some(IterationCount::Infinite),
            Value::String(s) => s.trim().parse().ok().map(IterationCount::Count),
            _ => None,
        };
        count.ok_or_else(|| {
            serde::de::Error::custom(format!("invalid iteration count: {}", value))
        })
    }
}

/// Animatable properties of one keyframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
}

impl KeyframeProperties {
    /// Names accepted by [`KeyframeProperties::set`], in output order.
    pub const NAMES: [&'static str; 7] = [
        "transform",
        "opacity",
        "color",
        "backgroundColor",
        "borderColor",
        "boxShadow",
        "backgroundPosition",
    ];

    /// Present properties as `(camelCaseName, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(v) = &self.transform {
            entries.push(("transform", v.clone()));
        }
        if let Some(v) = self.opacity {
            entries.push(("opacity", v.to_string()));
        }
        if let Some(v) = &self.color {
            entries.push(("color", v.clone()));
        }
        if let Some(v) = &self.background_color {
            entries.push(("backgroundColor", v.clone()));
        }
        if let Some(v) = &self.border_color {
            entries.push(("borderColor", v.clone()));
        }
        if let Some(v) = &self.box_shadow {
            entries.push(("boxShadow", v.clone()));
        }
        if let Some(v) = &self.background_position {
            entries.push(("backgroundPosition", v.clone()));
        }
        entries
    }

    /// Set a property by camelCase name. An empty value clears it.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let text = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        match name {
            "transform" => self.transform = text,
            "opacity" => {
                self.opacity = match text {
                    Some(t) => Some(t.trim().parse().map_err(|_| {
                        ConfigError::InvalidAnimation(format!("opacity must be a number: {}", t))
                    })?),
                    None => None,
                }
            }
            "color" => self.color = text,
            "backgroundColor" => self.background_color = text,
            "borderColor" => self.border_color = text,
            "boxShadow" => self.box_shadow = text,
            "backgroundPosition" => self.background_position = text,
            other => {
                return Err(ConfigError::InvalidAnimation(format!(
                    "unknown keyframe property: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// One keyframe. `percent` is kept in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeStep {
    #[serde(deserialize_with = "deserialize_percent")]
    pub percent: f64,
    #[serde(default)]
    pub properties: KeyframeProperties,
}

impl KeyframeStep {
    pub fn new(percent: f64, properties: KeyframeProperties) -> Self {
        Self {
            percent: clamp_percent(percent),
            properties,
        }
    }
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

fn deserialize_percent<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_percent)
}

/// Loaded keyframe lists are kept in percent order, like registered ones.
fn deserialize_keyframes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<KeyframeStep>, D::Error> {
    let mut steps = Vec::<KeyframeStep>::deserialize(deserializer)?;
    steps.sort_by(|a, b| a.percent.total_cmp(&b.percent));
    Ok(steps)
}

/// A user-defined keyframe animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAnimation {
    pub name: String,
    /// Duration in milliseconds.
    pub duration: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub iteration_count: IterationCount,
    #[serde(default)]
    pub direction: AnimationDirection,
    #[serde(deserialize_with = "deserialize_keyframes")]
    pub keyframes: Vec<KeyframeStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cubic_bezier: Option<[f64; 4]>,
}

impl Default for CustomAnimation {
    fn default() -> Self {
        Self {
            name: "custom".to_string(),
            duration: 1000.0,
            easing: Easing::Ease,
            iteration_count: IterationCount::Count(1.0),
            direction: AnimationDirection::Normal,
            keyframes: vec![
                KeyframeStep::new(
                    0.0,
                    KeyframeProperties {
                        transform: Some("scale(1)".to_string()),
                        opacity: Some(1.0),
                        ..Default::default()
                    },
                ),
                KeyframeStep::new(
                    100.0,
                    KeyframeProperties {
                        transform: Some("scale(1.1)".to_string()),
                        opacity: Some(1.0),
                        ..Default::default()
                    },
                ),
            ],
            cubic_bezier: None,
        }
    }
}

impl CustomAnimation {
    /// Minimum number of keyframes an animation keeps.
    pub const MIN_KEYFRAMES: usize = 2;

    /// Check the animation can be saved.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidAnimation(
                "animation name cannot be empty".to_string(),
            ));
        }
        if self.keyframes.len() < Self::MIN_KEYFRAMES {
            return Err(ConfigError::InvalidAnimation(format!(
                "animation '{}' needs at least {} keyframes",
                self.name,
                Self::MIN_KEYFRAMES
            )));
        }
        Ok(())
    }

    /// Stable sort by percent; ties keep insertion order.
    pub fn sort_keyframes(&mut self) {
        for step in &mut self.keyframes {
            step.percent = clamp_percent(step.percent);
        }
        self.keyframes.sort_by(|a, b| a.percent.total_cmp(&b.percent));
    }

    /// Keyframes in percent order without mutating the animation.
    pub fn sorted_keyframes(&self) -> Vec<&KeyframeStep> {
        let mut steps: Vec<&KeyframeStep> = self.keyframes.iter().collect();
        steps.sort_by(|a, b| a.percent.total_cmp(&b.percent));
        steps
    }

    /// Append a keyframe 25% after the last one, copying its properties.
    /// Returns the new keyframe's index after sorting.
    pub fn add_keyframe(&mut self) -> usize {
        let (percent, properties) = match self.keyframes.last() {
            Some(last) => ((last.percent + 25.0).min(100.0), last.properties.clone()),
            None => (0.0, KeyframeProperties::default()),
        };
        self.insert_keyframe(percent, properties)
    }

    /// Insert a keyframe at `percent` and re-sort. Returns its index.
    pub fn insert_keyframe(&mut self, percent: f64, properties: KeyframeProperties) -> usize {
        self.keyframes.push(KeyframeStep::new(percent, properties));
        let inserted = self.keyframes.len() - 1;
        self.reorder_tracking(inserted)
    }

    /// Move a keyframe to a new percent (clamped) and re-sort.
    /// Returns the keyframe's new index.
    pub fn set_keyframe_percent(&mut self, index: usize, percent: f64) -> Result<usize> {
        let step = self.keyframe_mut(index)?;
        step.percent = clamp_percent(percent);
        Ok(self.reorder_tracking(index))
    }

    pub fn set_keyframe_property(&mut self, index: usize, name: &str, value: &str) -> Result<()> {
        self.keyframe_mut(index)?.properties.set(name, value)
    }

    /// Remove a keyframe. Refused when only the minimum remain.
    pub fn remove_keyframe(&mut self, index: usize) -> Result<KeyframeStep> {
        if self.keyframes.len() <= Self::MIN_KEYFRAMES {
            return Err(ConfigError::InvalidAnimation(format!(
                "animation must keep at least {} keyframes",
                Self::MIN_KEYFRAMES
            )));
        }
        self.keyframe_mut(index)?;
        Ok(self.keyframes.remove(index))
    }

    /// CSS timing function for the `animation` shorthand.
    pub fn timing_function(&self) -> String {
        match self.easing {
            Easing::CubicBezier => {
                let [a, b, c, d] = self.cubic_bezier.unwrap_or(DEFAULT_CUBIC_BEZIER);
                format!("cubic-bezier({}, {}, {}, {})", a, b, c, d)
            }
            other => other.as_str().to_string(),
        }
    }

    /// Timing part of the `animation` shorthand (everything after the name).
    pub fn shorthand_timing(&self) -> String {
        format!(
            "{}ms {} {} {}",
            self.duration,
            self.timing_function(),
            self.iteration_count,
            self.direction.as_str()
        )
    }

    fn keyframe_mut(&mut self, index: usize) -> Result<&mut KeyframeStep> {
        let len = self.keyframes.len();
        self.keyframes.get_mut(index).ok_or_else(|| {
            ConfigError::InvalidAnimation(format!("keyframe {} out of range ({})", index, len))
        })
    }

    /// Sort and report where the keyframe previously at `index` ended up.
    fn reorder_tracking(&mut self, index: usize) -> usize {
        let mut tagged: Vec<(usize, KeyframeStep)> =
            std::mem::take(&mut self.keyframes).into_iter().enumerate().collect();
        tagged.sort_by(|a, b| a.1.percent.total_cmp(&b.1.percent));
        let position = tagged.iter().position(|(i, _)| *i == index).unwrap_or(0);
        self.keyframes = tagged.into_iter().map(|(_, step)| step).collect();
        position
    }
}

/// A named, categorized animation template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreset {
    pub name: String,
    pub category: String,
    pub animation: CustomAnimation,
}

impl AnimationPreset {
    /// Copy the template into an editable animation named `<name>-custom`.
    pub fn instantiate(&self) -> CustomAnimation {
        let mut animation = self.animation.clone();
        animation.name = format!("{}-custom", self.animation.name);
        animation
    }
}

fn frame(percent: f64, properties: KeyframeProperties) -> KeyframeStep {
    KeyframeStep::new(percent, properties)
}

fn transform(value: &str) -> KeyframeProperties {
    KeyframeProperties {
        transform: Some(value.to_string()),
        ..Default::default()
    }
}

/// Built-in animation templates.
pub fn animation_presets() -> Vec<AnimationPreset> {
    vec![
        AnimationPreset {
            name: "Pulse".to_string(),
            category: "Basic".to_string(),
            animation: CustomAnimation {
                name: "pulse".to_string(),
                duration: 2000.0,
                easing: Easing::EaseInOut,
                iteration_count: IterationCount::Infinite,
                direction: AnimationDirection::Alternate,
                keyframes: vec![
                    frame(
                        0.0,
                        KeyframeProperties {
                            opacity: Some(1.0),
                            ..transform("scale(1)")
                        },
                    ),
                    frame(
                        100.0,
                        KeyframeProperties {
                            opacity: Some(0.8),
                            ..transform("scale(1.05)")
                        },
                    ),
                ],
                cubic_bezier: None,
            },
        },
        AnimationPreset {
            name: "Bounce".to_string(),
            category: "Basic".to_string(),
            animation: CustomAnimation {
                name: "bounce".to_string(),
                duration: 1000.0,
                easing: Easing::CubicBezier,
                iteration_count: IterationCount::Infinite,
                direction: AnimationDirection::Alternate,
                keyframes: vec![
                    frame(0.0, transform("translateY(0)")),
                    frame(100.0, transform("translateY(-10px)")),
                ],
                cubic_bezier: Some([0.68, -0.55, 0.265, 1.55]),
            },
        },
        AnimationPreset {
            name: "Shine".to_string(),
            category: "Effects".to_string(),
            animation: CustomAnimation {
                name: "shine".to_string(),
                duration: 1500.0,
                easing: Easing::EaseInOut,
                iteration_count: IterationCount::Infinite,
                direction: AnimationDirection::Normal,
                keyframes: vec![
                    frame(
                        0.0,
                        KeyframeProperties {
                            background_position: Some("-100% 0".to_string()),
                            ..Default::default()
                        },
                    ),
                    frame(
                        100.0,
                        KeyframeProperties {
                            background_position: Some("200% 0".to_string()),
                            ..Default::default()
                        },
                    ),
                ],
                cubic_bezier: None,
            },
        },
        AnimationPreset {
            name: "Color Shift".to_string(),
            category: "Effects".to_string(),
            animation: CustomAnimation {
                name: "color-shift".to_string(),
                duration: 3000.0,
                easing: Easing::Ease,
                iteration_count: IterationCount::Infinite,
                direction: AnimationDirection::Alternate,
                keyframes: [
                    (0.0, "#3b82f6", "#2563eb"),
                    (50.0, "#8b5cf6", "#7c3aed"),
                    (100.0, "#ec4899", "#db2777"),
                ]
                .into_iter()
                .map(|(percent, background, border)| {
                    frame(
                        percent,
                        KeyframeProperties {
                            background_color: Some(background.to_string()),
                            border_color: Some(border.to_string()),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
                cubic_bezier: None,
            },
        },
    ]
}

/// Named custom animations, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationRegistry {
    animations: IndexMap<String, CustomAnimation>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an animation, replacing any with the same name.
    pub fn register(&mut self, mut animation: CustomAnimation) -> Result<()> {
        animation.validate()?;
        animation.sort_keyframes();
        self.animations.insert(animation.name.clone(), animation);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CustomAnimation> {
        self.animations.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CustomAnimation> {
        self.animations.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomAnimation> {
        self.animations.values()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
