//! Semantic style resolver.

use wizard_core::{
    BackgroundType, ButtonAnimation, ButtonConfig, ButtonVariant, CardConfig, ComponentConfig,
    CustomAnimation, IconPosition, LayoutType, StyleProperty, TextAlign,
};

use crate::keyframes;
use crate::model::{
    ButtonMarkup, CardHeader, CardImage, CardMarkup, CardPart, CssValue, Declarations,
    IconMarkup, IconSide, KeyframesBlock, Markup, ResolvedComponent, RuleState, StyleRule,
};
use crate::options::ExportOptions;

/// Image shown when a card has no image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://img.heroui.chat/image/landscape?w=600&h=400&u=card-image";

const DEFAULT_BORDER_COLOR: &str = "#e4e4e7";
const DEFAULT_ALT: &str = "Card image";

/// Resolve a configuration into rules, keyframes and markup.
///
/// `animation` is the custom animation referenced by a button whose
/// `animation` is `custom`; anything unresolvable renders without animation.
pub fn resolve(
    config: &ComponentConfig,
    animation: Option<&CustomAnimation>,
    options: &ExportOptions,
) -> ResolvedComponent {
    let kind = config.kind();
    let class_name = options.class_name_for(kind);
    let component_name = options.component_name_for(kind);
    let (rules, keyframes, markup, reduce_motion) = match config {
        ComponentConfig::Button(button) => {
            let (rules, keyframes) = button_rules(button, animation);
            (rules, keyframes, Markup::Button(button_markup(button)), false)
        }
        ComponentConfig::Card(card) => {
            let (rules, keyframes) = card_rules(card);
            let reduce_motion = card.reduce_motion && !keyframes.is_empty();
            (rules, keyframes, Markup::Card(card_markup(card)), reduce_motion)
        }
    };
    ResolvedComponent {
        kind,
        class_name,
        component_name,
        rules,
        keyframes,
        markup,
        reduce_motion,
    }
}

fn rule(state: RuleState, declarations: Declarations) -> StyleRule {
    StyleRule {
        state,
        declarations,
    }
}

fn linear_gradient(button: &ButtonConfig) -> String {
    let stops: Vec<String> = button
        .gradient
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position.clamp(0.0, 100.0)))
        .collect();
    format!(
        "linear-gradient({}deg, {})",
        button.gradient_direction,
        stops.join(", ")
    )
}

/// The custom animation to render, if the reference resolves to a usable one.
fn usable_custom<'a>(
    button: &ButtonConfig,
    animation: Option<&'a CustomAnimation>,
) -> Option<&'a CustomAnimation> {
    let animation = animation?;
    let name_matches = button
        .custom_animation_name
        .as_deref()
        .map_or(true, |name| name == animation.name);
    if name_matches && animation.validate().is_ok() {
        Some(animation)
    } else {
        tracing::debug!(
            requested = ?button.custom_animation_name,
            provided = %animation.name,
            "custom animation does not resolve, rendering without animation"
        );
        None
    }
}

fn button_rules(
    button: &ButtonConfig,
    custom: Option<&CustomAnimation>,
) -> (Vec<StyleRule>, Vec<KeyframesBlock>) {
    let mut keyframes = Vec::new();
    let mut base = Declarations::new();
    base.set("display", "inline-flex");
    base.set("align-items", "center");
    base.set("justify-content", "center");
    if button.icon_position != IconPosition::None {
        base.set("gap", "8px");
    }
    base.set("color", button.text_color.as_str());
    if button.use_gradient {
        if !button.gradient.is_empty() {
            base.set("background", linear_gradient(button));
        }
    } else {
        base.set("background-color", button.background_color.as_str());
    }
    if button.opacity != 1.0 {
        base.set("opacity", button.opacity);
    }
    base.set("border-radius", button.effective_radius());
    base.set(
        "padding",
        format!("{}px {}px", button.padding_y, button.padding_x),
    );
    if button.border.width > 0.0 {
        base.set(
            "border",
            format!(
                "{}px {} {}",
                button.border.width,
                button.border.style.as_str(),
                button.border.color
            ),
        );
    }
    if button.use_shadow {
        let shadow = &button.shadow;
        base.set(
            "box-shadow",
            format!(
                "{}{}px {}px {}px {}px {}",
                if shadow.inset { "inset " } else { "" },
                shadow.offset_x,
                shadow.offset_y,
                shadow.blur,
                shadow.spread,
                shadow.color
            ),
        );
    }
    base.set("font-weight", f64::from(button.font_weight.css_weight()));
    if button.text_align != TextAlign::Center {
        base.set("text-align", button.text_align.as_str());
    }
    if button.use_transition {
        let duration = button.transition_duration;
        let transition = if button.animation == ButtonAnimation::Scale {
            format!("all {}ms, transform {}ms", duration, duration)
        } else {
            format!("all {}ms", duration)
        };
        base.set("transition", transition);
    }
    match button.animation {
        ButtonAnimation::Custom => {
            if let Some(animation) = usable_custom(button, custom) {
                base.set(
                    "animation",
                    CssValue::Animation {
                        name: animation.name.clone(),
                        timing: animation.shorthand_timing(),
                    },
                );
                keyframes.push(keyframes::custom_animation(animation));
            }
        }
        named => {
            if let Some((block, timing)) = keyframes::button_animation(named) {
                base.set(
                    "animation",
                    CssValue::Animation {
                        name: block.name.clone(),
                        timing: timing.to_string(),
                    },
                );
                keyframes.push(block);
            }
        }
    }
    base.set("cursor", "pointer");
    if button.variant == ButtonVariant::Glass {
        base.set("backdrop-filter", "blur(10px)");
    }
    for (property, value) in style_declarations(button.style.iter()).iter() {
        base.set(property, value.clone());
    }

    let mut rules = vec![rule(RuleState::Base, base)];

    let mut hover = Declarations::new();
    if button.animation == ButtonAnimation::Scale && button.hover_scale != 1.0 {
        hover.set("transform", format!("scale({})", button.hover_scale));
    }
    if !button.use_gradient && button.hover_background_color != button.background_color {
        hover.set("background-color", button.hover_background_color.as_str());
    }
    if button.text_hover_color != button.text_color {
        hover.set("color", button.text_hover_color.as_str());
    }
    if !hover.is_empty() {
        rules.push(rule(RuleState::Hover, hover));
    }

    if !button.active_style.is_empty() {
        rules.push(rule(RuleState::Active, style_declarations(button.active_style.iter())));
    }

    let mut disabled = Declarations::new();
    disabled.set("opacity", 0.5);
    disabled.set("cursor", "not-allowed");
    rules.push(rule(RuleState::Disabled, disabled));

    (rules, keyframes)
}

fn style_declarations<'a>(entries: impl Iterator<Item = (StyleProperty, &'a str)>) -> Declarations {
    let mut declarations = Declarations::new();
    for (property, value) in entries {
        if !value.trim().is_empty() {
            declarations.set(property.css_name(), value);
        }
    }
    declarations
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn card_rules(card: &CardConfig) -> (Vec<StyleRule>, Vec<KeyframesBlock>) {
    let mut keyframes = Vec::new();
    let mut base = style_declarations(card.style.iter());

    match card.background_type {
        BackgroundType::Gradient => {
            if let (Some(from), Some(to)) = (present(&card.gradient_from), present(&card.gradient_to)) {
                base.remove("background-color");
                base.set(
                    "background",
                    format!(
                        "linear-gradient({}, {}, {})",
                        card.gradient_direction.css_keyword(),
                        from,
                        to
                    ),
                );
            }
        }
        BackgroundType::Image => {
            if let Some(image) = present(&card.background_image) {
                base.set("background-image", format!("url({})", image));
                let size = card.background_size.trim();
                base.set("background-size", if size.is_empty() { "cover" } else { size });
                base.set("background-position", "center");
                base.set("position", "relative");
            }
        }
        BackgroundType::Solid => {}
    }
    if let Some(ratio) = present(&card.aspect_ratio).filter(|r| *r != "auto") {
        base.set("aspect-ratio", ratio);
    }
    if let Some(filter) = present(&card.filter).filter(|f| *f != "none") {
        base.set("filter", filter);
    }
    if card.is_blurred {
        base.set("backdrop-filter", "blur(12px)");
    }
    if card.is_pressable {
        base.set("cursor", "pointer");
    }
    if let Some(block) = keyframes::entrance_animation(card.animation_type) {
        base.set(
            "animation",
            CssValue::Animation {
                name: block.name.clone(),
                timing: format!(
                    "{}ms {} {}ms {} {} {}",
                    card.animation_duration_ms(),
                    card.animation_easing(),
                    card.animation_delay,
                    card.animation_iteration_count.trim(),
                    card.animation_direction.as_str(),
                    card.animation_fill_mode.as_str()
                ),
            },
        );
        keyframes.push(block);
    }

    let mut rules = vec![rule(RuleState::Base, base)];

    if card.is_hoverable {
        let hover = style_declarations(card.hover_style.iter());
        if !hover.is_empty() {
            rules.push(rule(RuleState::Hover, hover));
        }
    }
    if card.is_pressable {
        let mut active = Declarations::new();
        active.set("transform", "scale(0.98)");
        for (property, value) in style_declarations(card.active_style.iter()).iter() {
            active.set(property, value.clone());
        }
        rules.push(rule(RuleState::Active, active));
    }

    for (part, declarations) in card_parts(card) {
        rules.push(rule(RuleState::Part(part), declarations));
    }

    (rules, keyframes)
}

fn card_parts(card: &CardConfig) -> Vec<(CardPart, Declarations)> {
    let border_width = card
        .style
        .get(StyleProperty::BorderWidth)
        .filter(|w| !w.trim().is_empty())
        .unwrap_or("1px");
    let border_color = card
        .style
        .get(StyleProperty::BorderColor)
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_BORDER_COLOR);
    let divider = format!("{} solid {}", border_width, border_color);

    let mut parts = Vec::new();

    if card.background_type == BackgroundType::Image
        && present(&card.background_image).is_some()
    {
        if let Some(overlay) = present(&card.background_overlay) {
            let mut decls = Declarations::new();
            decls.set("position", "absolute");
            decls.set("inset", "0");
            decls.set("background-color", overlay);
            decls.set("pointer-events", "none");
            parts.push((CardPart::Overlay, decls));
        }
    }

    if card.show_header {
        let mut header = Declarations::new();
        header.set("padding", "16px");
        header.set("border-bottom", divider.as_str());
        parts.push((CardPart::Header, header));

        let mut title = Declarations::new();
        title.set("margin", "0");
        title.set("font-size", "18px");
        title.set("font-weight", 600.0);
        parts.push((CardPart::Title, title));

        if !card.header_subtitle.trim().is_empty() {
            let mut subtitle = Declarations::new();
            subtitle.set("margin", "4px 0 0");
            subtitle.set("font-size", "14px");
            subtitle.set("opacity", 0.7);
            parts.push((CardPart::Subtitle, subtitle));
        }
    }

    if card.show_image {
        let mut image = Declarations::new();
        image.set("display", "block");
        image.set("width", "100%");
        image.set("height", format!("{}px", card.image_height.pixels()));
        image.set("object-fit", "cover");
        parts.push((CardPart::Image, image));
    }

    let mut body = Declarations::new();
    body.set("padding", "16px");
    match card.layout_type {
        LayoutType::Standard => {}
        LayoutType::Flex => {
            body.set("display", "flex");
            body.set("flex-direction", card.flex_direction.as_str());
            body.set("align-items", card.align_items.as_str());
            body.set("justify-content", card.justify_content.as_str());
        }
        LayoutType::Grid => {
            body.set("display", "grid");
            body.set(
                "grid-template-columns",
                format!("repeat({}, minmax(0, 1fr))", card.grid_column_count()),
            );
            body.set("gap", format!("{}px", card.grid_gap));
        }
    }
    parts.push((CardPart::Body, body));

    if card.show_footer {
        let mut footer = Declarations::new();
        footer.set("padding", "16px");
        footer.set("border-top", divider.as_str());
        footer.set("display", "flex");
        footer.set("justify-content", "space-between");
        footer.set("align-items", "center");
        parts.push((CardPart::Footer, footer));
    }

    parts
}

fn button_markup(button: &ButtonConfig) -> ButtonMarkup {
    let icon = match button.icon_position {
        IconPosition::Left => Some(IconSide::Left),
        IconPosition::Right => Some(IconSide::Right),
        IconPosition::None => None,
    }
    .map(|side| IconMarkup {
        side,
        size: button.icon_size,
    });
    ButtonMarkup {
        text: button.text.clone(),
        icon,
        disabled: button.disabled,
    }
}

fn card_markup(card: &CardConfig) -> CardMarkup {
    let header = card.show_header.then(|| CardHeader {
        title: card.header_title.clone(),
        subtitle: Some(card.header_subtitle.clone()).filter(|s| !s.trim().is_empty()),
    });
    let image = card.show_image.then(|| CardImage {
        src: if card.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            card.image_url.clone()
        },
        alt: if card.image_alt_text.trim().is_empty() {
            DEFAULT_ALT.to_string()
        } else {
            card.image_alt_text.clone()
        },
        position: card.image_position,
    });
    let overlay = card.background_type == BackgroundType::Image
        && present(&card.background_image).is_some()
        && present(&card.background_overlay).is_some();
    CardMarkup {
        overlay,
        header,
        image,
        body: card.body_content.clone(),
        footer: card.show_footer.then(|| card.footer_content.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_core::{ComponentKind, EntranceAnimation, KeyframeProperties, KeyframeStep};

    fn button_config(edit: impl FnOnce(&mut ButtonConfig)) -> ComponentConfig {
        let mut button = ButtonConfig::default();
        edit(&mut button);
        ComponentConfig::Button(button)
    }

    fn card_config(edit: impl FnOnce(&mut CardConfig)) -> ComponentConfig {
        let mut card = CardConfig::default();
        edit(&mut card);
        ComponentConfig::Card(card)
    }

    fn text(value: &CssValue) -> String {
        value.to_string()
    }

    #[test]
    fn test_default_button_rules() {
        let resolved = resolve(
            &ComponentConfig::default_for(ComponentKind::Button),
            None,
            &ExportOptions::default(),
        );
        let base = resolved.base().unwrap();
        let order: Vec<_> = base.iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                "display",
                "align-items",
                "justify-content",
                "color",
                "background-color",
                "border-radius",
                "padding",
                "font-weight",
                "transition",
                "cursor"
            ]
        );
        assert_eq!(text(base.get("padding").unwrap()), "8px 16px");
        assert_eq!(text(base.get("transition").unwrap()), "all 300ms");
        assert!(resolved.has_rule(RuleState::Hover));
        assert!(!resolved.has_rule(RuleState::Active));
        assert!(resolved.has_rule(RuleState::Disabled));
        assert!(resolved.keyframes.is_empty());
    }

    #[test]
    fn test_gradient_replaces_background_color() {
        let config = button_config(|b| b.use_gradient = true);
        let resolved = resolve(&config, None, &ExportOptions::default());
        let base = resolved.base().unwrap();
        assert!(!base.contains("background-color"));
        assert_eq!(
            text(base.get("background").unwrap()),
            "linear-gradient(90deg, #3b82f6 0%, #2563eb 100%)"
        );
        // Gradient buttons never emit a hover background.
        assert!(!resolved.has_rule(RuleState::Hover));
    }

    #[test]
    fn test_hover_rule_conditions() {
        let same = button_config(|b| b.hover_background_color = b.background_color.clone());
        assert!(!resolve(&same, None, &ExportOptions::default()).has_rule(RuleState::Hover));

        let scale = button_config(|b| {
            b.hover_background_color = b.background_color.clone();
            b.animation = ButtonAnimation::Scale;
            b.hover_scale = 1.05;
        });
        let resolved = resolve(&scale, None, &ExportOptions::default());
        let hover = &resolved.rule(RuleState::Hover).unwrap().declarations;
        assert_eq!(text(hover.get("transform").unwrap()), "scale(1.05)");
        assert_eq!(
            text(resolved.base().unwrap().get("transition").unwrap()),
            "all 300ms, transform 300ms"
        );

        let text_only = button_config(|b| {
            b.hover_background_color = b.background_color.clone();
            b.text_hover_color = "#000000".to_string();
        });
        let resolved = resolve(&text_only, None, &ExportOptions::default());
        let hover = &resolved.rule(RuleState::Hover).unwrap().declarations;
        assert_eq!(hover.len(), 1);
        assert!(hover.contains("color"));
    }

    #[test]
    fn test_optional_blocks() {
        let config = button_config(|b| {
            b.opacity = 0.9;
            b.border.width = 2.0;
            b.use_shadow = true;
            b.shadow.inset = true;
            b.text_align = TextAlign::Left;
            b.use_transition = false;
            b.variant = ButtonVariant::Glass;
        });
        let resolved = resolve(&config, None, &ExportOptions::default());
        let base = resolved.base().unwrap();
        assert_eq!(base.get("opacity"), Some(&CssValue::Number(0.9)));
        assert_eq!(text(base.get("border").unwrap()), "2px solid #e2e8f0");
        assert_eq!(
            text(base.get("box-shadow").unwrap()),
            "inset 0px 4px 6px 0px rgba(0, 0, 0, 0.1)"
        );
        assert_eq!(text(base.get("text-align").unwrap()), "left");
        assert!(!base.contains("transition"));
        assert_eq!(text(base.get("backdrop-filter").unwrap()), "blur(10px)");
    }

    #[test]
    fn test_style_section_overrides_typed_fields() {
        let config = button_config(|b| {
            b.style.set(StyleProperty::Color, "#111111");
            b.style.set(StyleProperty::LetterSpacing, "0.05em");
        });
        let resolved = resolve(&config, None, &ExportOptions::default());
        let base = resolved.base().unwrap();
        assert_eq!(text(base.get("color").unwrap()), "#111111");
        assert_eq!(text(base.get("letter-spacing").unwrap()), "0.05em");
        let order: Vec<_> = base.iter().map(|(p, _)| p).collect();
        assert_eq!(order[3], "color");
    }

    #[test]
    fn test_named_animation() {
        let config = button_config(|b| b.animation = ButtonAnimation::Shake);
        let resolved = resolve(&config, None, &ExportOptions::default());
        assert_eq!(
            text(resolved.base().unwrap().get("animation").unwrap()),
            "shake 0.82s cubic-bezier(.36,.07,.19,.97) infinite"
        );
        assert_eq!(resolved.keyframes.len(), 1);
    }

    #[test]
    fn test_custom_animation_resolution() {
        let mut animation = CustomAnimation::default();
        animation.name = "wiggle".to_string();
        let config = button_config(|b| {
            b.animation = ButtonAnimation::Custom;
            b.custom_animation_name = Some("wiggle".to_string());
        });
        let resolved = resolve(&config, Some(&animation), &ExportOptions::default());
        assert_eq!(
            text(resolved.base().unwrap().get("animation").unwrap()),
            "wiggle 1000ms ease 1 normal"
        );
        assert_eq!(resolved.keyframes[0].name, "wiggle");

        // Missing, mismatched or invalid animations degrade to no animation.
        let resolved = resolve(&config, None, &ExportOptions::default());
        assert!(!resolved.base().unwrap().contains("animation"));

        animation.name = "other".to_string();
        let resolved = resolve(&config, Some(&animation), &ExportOptions::default());
        assert!(resolved.keyframes.is_empty());

        animation.name = "wiggle".to_string();
        animation.keyframes.truncate(1);
        let resolved = resolve(&config, Some(&animation), &ExportOptions::default());
        assert!(resolved.keyframes.is_empty());
    }

    #[test]
    fn test_custom_keyframes_sorted() {
        let mut animation = CustomAnimation::default();
        animation.keyframes.push(KeyframeStep::new(10.0, KeyframeProperties::default()));
        let config = button_config(|b| b.animation = ButtonAnimation::Custom);
        let resolved = resolve(&config, Some(&animation), &ExportOptions::default());
        let selectors: Vec<_> = resolved.keyframes[0]
            .frames
            .iter()
            .map(|f| f.selector.clone())
            .collect();
        assert_eq!(selectors, vec!["0%", "10%", "100%"]);
    }

    #[test]
    fn test_card_default_rules() {
        let resolved = resolve(
            &ComponentConfig::default_for(ComponentKind::Card),
            None,
            &ExportOptions::default(),
        );
        let base = resolved.base().unwrap();
        assert_eq!(text(base.get("max-width").unwrap()), "400px");
        assert!(!resolved.has_rule(RuleState::Hover));
        assert!(!resolved.has_rule(RuleState::Active));
        assert!(!resolved.has_rule(RuleState::Disabled));
        assert!(resolved.has_rule(RuleState::Part(CardPart::Header)));
        assert!(resolved.has_rule(RuleState::Part(CardPart::Footer)));
        let image = &resolved.rule(RuleState::Part(CardPart::Image)).unwrap().declarations;
        assert_eq!(text(image.get("height").unwrap()), "192px");
    }

    #[test]
    fn test_card_toggles_omit_blocks() {
        let config = card_config(|c| {
            c.show_header = false;
            c.show_footer = false;
            c.show_image = false;
        });
        let resolved = resolve(&config, None, &ExportOptions::default());
        assert!(!resolved.has_rule(RuleState::Part(CardPart::Header)));
        assert!(!resolved.has_rule(RuleState::Part(CardPart::Image)));
        assert!(!resolved.has_rule(RuleState::Part(CardPart::Footer)));
        match &resolved.markup {
            Markup::Card(card) => {
                assert!(card.header.is_none());
                assert!(card.footer.is_none());
            }
            Markup::Button(_) => panic!("expected card markup"),
        }
    }

    #[test]
    fn test_card_hover_and_press() {
        let config = card_config(|c| {
            c.is_hoverable = true;
            c.is_pressable = true;
            c.active_style.set(StyleProperty::Opacity, "0.9");
        });
        let resolved = resolve(&config, None, &ExportOptions::default());
        let hover = &resolved.rule(RuleState::Hover).unwrap().declarations;
        assert_eq!(text(hover.get("transform").unwrap()), "translateY(-4px)");
        let active = &resolved.rule(RuleState::Active).unwrap().declarations;
        assert_eq!(text(active.get("transform").unwrap()), "scale(0.98)");
        assert_eq!(text(active.get("opacity").unwrap()), "0.9");
        assert_eq!(text(resolved.base().unwrap().get("cursor").unwrap()), "pointer");
    }

    #[test]
    fn test_card_backgrounds() {
        let gradient = card_config(|c| {
            c.background_type = BackgroundType::Gradient;
            c.gradient_from = Some("#111".to_string());
            c.gradient_to = Some("#222".to_string());
        });
        let resolved = resolve(&gradient, None, &ExportOptions::default());
        let base = resolved.base().unwrap();
        assert!(!base.contains("background-color"));
        assert_eq!(
            text(base.get("background").unwrap()),
            "linear-gradient(to right, #111, #222)"
        );

        let image = card_config(|c| {
            c.background_type = BackgroundType::Image;
            c.background_image = Some("bg.png".to_string());
            c.background_overlay = Some("rgba(0,0,0,0.4)".to_string());
        });
        let resolved = resolve(&image, None, &ExportOptions::default());
        let base = resolved.base().unwrap();
        assert_eq!(text(base.get("background-image").unwrap()), "url(bg.png)");
        assert!(resolved.has_rule(RuleState::Part(CardPart::Overlay)));

        let incomplete = card_config(|c| c.background_type = BackgroundType::Gradient);
        let resolved = resolve(&incomplete, None, &ExportOptions::default());
        assert!(resolved.base().unwrap().contains("background-color"));
    }

    #[test]
    fn test_card_layouts() {
        let grid = card_config(|c| {
            c.layout_type = LayoutType::Grid;
            c.grid_columns = 3;
            c.grid_gap = 8.0;
        });
        let resolved = resolve(&grid, None, &ExportOptions::default());
        let body = &resolved.rule(RuleState::Part(CardPart::Body)).unwrap().declarations;
        assert_eq!(
            text(body.get("grid-template-columns").unwrap()),
            "repeat(3, minmax(0, 1fr))"
        );
        assert_eq!(text(body.get("gap").unwrap()), "8px");
    }

    #[test]
    fn test_card_aspect_and_filter_skip_defaults() {
        let config = card_config(|c| {
            c.aspect_ratio = Some("auto".to_string());
            c.filter = Some("none".to_string());
        });
        let resolved = resolve(&config, None, &ExportOptions::default());
        let base = resolved.base().unwrap();
        assert!(!base.contains("aspect-ratio"));
        assert!(!base.contains("filter"));
    }

    #[test]
    fn test_card_entrance_animation() {
        let config = card_config(|c| {
            c.animation_type = EntranceAnimation::SlideUp;
            c.animation_delay = 200.0;
            c.reduce_motion = true;
        });
        let resolved = resolve(&config, None, &ExportOptions::default());
        assert_eq!(
            text(resolved.base().unwrap().get("animation").unwrap()),
            "slideUpAnimation 150ms cubic-bezier(0.4, 0, 0.2, 1) 200ms 1 normal none"
        );
        assert!(resolved.reduce_motion);
    }
}
