//! Literal keyframe blocks for the named animations.

use convert_case::{Case, Casing};
use wizard_core::{ButtonAnimation, CustomAnimation, EntranceAnimation};

use crate::model::{css_property, CssValue, Declarations, KeyframeRule, KeyframesBlock};

fn decls(pairs: &[(&str, CssValue)]) -> Declarations {
    let mut out = Declarations::new();
    for (property, value) in pairs {
        out.set(property, value.clone());
    }
    out
}

fn frame(selector: &str, pairs: &[(&str, CssValue)]) -> KeyframeRule {
    KeyframeRule {
        selector: selector.to_string(),
        declarations: decls(pairs),
    }
}

fn text(value: &str) -> CssValue {
    CssValue::Text(value.to_string())
}

/// Keyframes and shorthand timing for a named button animation.
/// `None` for animations without keyframes.
pub fn button_animation(animation: ButtonAnimation) -> Option<(KeyframesBlock, &'static str)> {
    let (block, timing) = match animation {
        ButtonAnimation::Pulse => (
            KeyframesBlock {
                name: "pulse".to_string(),
                frames: vec![
                    frame("0%, 100%", &[("opacity", CssValue::Number(1.0))]),
                    frame("50%", &[("opacity", CssValue::Number(0.7))]),
                ],
                tailwind_utility: Some("animate-pulse"),
            },
            "2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
        ),
        ButtonAnimation::Bounce => (
            KeyframesBlock {
                name: "bounce".to_string(),
                frames: vec![
                    frame("0%, 100%", &[("transform", text("translateY(0)"))]),
                    frame("50%", &[("transform", text("translateY(-10px)"))]),
                ],
                tailwind_utility: Some("animate-bounce"),
            },
            "1s infinite",
        ),
        ButtonAnimation::Shake => (
            KeyframesBlock {
                name: "shake".to_string(),
                frames: vec![
                    frame("10%, 90%", &[("transform", text("translate3d(-1px, 0, 0)"))]),
                    frame("20%, 80%", &[("transform", text("translate3d(2px, 0, 0)"))]),
                    frame("30%, 50%, 70%", &[("transform", text("translate3d(-4px, 0, 0)"))]),
                    frame("40%, 60%", &[("transform", text("translate3d(4px, 0, 0)"))]),
                ],
                tailwind_utility: None,
            },
            "0.82s cubic-bezier(.36,.07,.19,.97) infinite",
        ),
        _ => return None,
    };
    Some((block, timing))
}

/// Keyframes built from a custom animation, frames in percent order.
pub fn custom_animation(animation: &CustomAnimation) -> KeyframesBlock {
    let frames = animation
        .sorted_keyframes()
        .into_iter()
        .map(|step| {
            let mut declarations = Declarations::new();
            for (name, value) in step.properties.entries() {
                declarations.set(&css_property(name), value);
            }
            KeyframeRule {
                selector: format!("{}%", step.percent),
                declarations,
            }
        })
        .collect();
    KeyframesBlock {
        name: animation.name.clone(),
        frames,
        tailwind_utility: None,
    }
}

/// Name of the keyframes block for a card entrance animation (`slideUpAnimation`).
pub fn entrance_name(animation: EntranceAnimation) -> String {
    format!("{}Animation", animation.as_str().to_case(Case::Camel))
}

/// Keyframes for a card entrance animation.
pub fn entrance_animation(animation: EntranceAnimation) -> Option<KeyframesBlock> {
    let enter = |from_transform: &str, to_transform: &str| {
        vec![
            frame(
                "from",
                &[
                    ("transform", text(from_transform)),
                    ("opacity", CssValue::Number(0.0)),
                ],
            ),
            frame(
                "to",
                &[
                    ("transform", text(to_transform)),
                    ("opacity", CssValue::Number(1.0)),
                ],
            ),
        ]
    };

    let frames = match animation {
        EntranceAnimation::None => return None,
        EntranceAnimation::Fade => vec![
            frame("from", &[("opacity", CssValue::Number(0.0))]),
            frame("to", &[("opacity", CssValue::Number(1.0))]),
        ],
        EntranceAnimation::Scale => enter("scale(0.8)", "scale(1)"),
        EntranceAnimation::SlideUp => enter("translateY(20px)", "translateY(0)"),
        EntranceAnimation::SlideDown => enter("translateY(-20px)", "translateY(0)"),
        EntranceAnimation::SlideLeft => enter("translateX(20px)", "translateX(0)"),
        EntranceAnimation::SlideRight => enter("translateX(-20px)", "translateX(0)"),
        EntranceAnimation::Rotate => enter("rotate(-90deg)", "rotate(0)"),
        EntranceAnimation::Bounce => vec![
            frame("0%, 20%, 50%, 80%, 100%", &[("transform", text("translateY(0)"))]),
            frame("40%", &[("transform", text("translateY(-20px)"))]),
            frame("60%", &[("transform", text("translateY(-10px)"))]),
        ],
        EntranceAnimation::Pulse => vec![
            frame("0%", &[("transform", text("scale(1)"))]),
            frame("50%", &[("transform", text("scale(1.05)"))]),
            frame("100%", &[("transform", text("scale(1)"))]),
        ],
        EntranceAnimation::Shake => vec![
            frame("0%, 100%", &[("transform", text("translateX(0)"))]),
            frame("10%, 30%, 50%, 70%, 90%", &[("transform", text("translateX(-5px)"))]),
            frame("20%, 40%, 60%, 80%", &[("transform", text("translateX(5px)"))]),
        ],
    };

    Some(KeyframesBlock {
        name: entrance_name(animation),
        frames,
        tailwind_utility: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_core::{KeyframeProperties, KeyframeStep};

    #[test]
    fn test_named_button_animations() {
        let (pulse, timing) = button_animation(ButtonAnimation::Pulse).unwrap();
        assert_eq!(pulse.frames[0].selector, "0%, 100%");
        assert_eq!(timing, "2s cubic-bezier(0.4, 0, 0.6, 1) infinite");
        assert_eq!(button_animation(ButtonAnimation::Shake).unwrap().0.frames.len(), 4);
        assert!(button_animation(ButtonAnimation::Scale).is_none());
        assert!(button_animation(ButtonAnimation::SlideFade).is_none());
    }

    #[test]
    fn test_custom_animation_sorted_and_kebab() {
        let mut animation = CustomAnimation::default();
        animation.keyframes.push(KeyframeStep::new(
            10.0,
            KeyframeProperties {
                background_color: Some("#fff".to_string()),
                ..Default::default()
            },
        ));
        let block = custom_animation(&animation);
        let selectors: Vec<_> = block.frames.iter().map(|f| f.selector.as_str()).collect();
        assert_eq!(selectors, vec!["0%", "10%", "100%"]);
        assert!(block.frames[1].declarations.contains("background-color"));
    }

    #[test]
    fn test_entrance_names() {
        assert_eq!(entrance_name(EntranceAnimation::SlideUp), "slideUpAnimation");
        assert_eq!(entrance_name(EntranceAnimation::Fade), "fadeAnimation");
        assert!(entrance_animation(EntranceAnimation::None).is_none());
        assert_eq!(
            entrance_animation(EntranceAnimation::Bounce).unwrap().frames.len(),
            3
        );
    }
}
