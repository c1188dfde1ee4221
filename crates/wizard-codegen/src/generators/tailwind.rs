//! Tailwind utility classes on JSX markup.

use super::{arrow_svg, css, markup_lines, CodeGenerator, Slot, MarkupPlan};
use crate::model::{CssValue, Declarations, KeyframesBlock, Markup, ResolvedComponent, RuleState};
use crate::target::ExportTarget;

/// Tailwind generator.
pub struct TailwindGenerator;

const FOCUS_RING: [&str; 3] = ["focus:outline-none", "focus:ring-2", "focus:ring-offset-2"];
const DURATIONS: [u32; 8] = [75, 100, 150, 200, 300, 500, 700, 1000];

impl CodeGenerator for TailwindGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::Tailwind
    }

    fn generate(&self, component: &ResolvedComponent) -> String {
        let attrs = |slot| vec![format!("className=\"{}\"", class_list(component, slot).join(" "))];
        let icon = |side, size| arrow_svg(size, side, true);
        let root_tag = match component.markup {
            Markup::Button(_) => "button",
            Markup::Card(_) => "div",
        };
        let plan = MarkupPlan {
            root_tag,
            attrs: &attrs,
            icon: &icon,
        };
        let markup = markup_lines(component, &plan, 0).join("\n");

        let missing: Vec<String> = component
            .keyframes
            .iter()
            .filter(|block| block.tailwind_utility.is_none())
            .map(css::keyframes_block)
            .collect();
        if missing.is_empty() {
            format!("{}\n", markup)
        } else {
            format!(
                "/* Add these keyframes to your global CSS:\n\n{}\n*/\n\n{}\n",
                missing.join("\n\n"),
                markup
            )
        }
    }
}

/// Utility classes for one element.
pub(crate) fn class_list(component: &ResolvedComponent, slot: Slot) -> Vec<String> {
    let prefixed = |declarations: &Declarations, prefix: &str| -> Vec<String> {
        declarations
            .iter()
            .map(|(property, value)| {
                format!("{}{}", prefix, utility(property, value, &component.keyframes))
            })
            .collect()
    };
    let mut classes = Vec::new();
    match slot {
        Slot::Root => {
            for rule in &component.rules {
                let prefix = match rule.state {
                    RuleState::Base => "",
                    RuleState::Hover => "hover:",
                    RuleState::Active => "active:",
                    RuleState::Disabled => "disabled:",
                    RuleState::Part(_) => continue,
                };
                classes.extend(prefixed(&rule.declarations, prefix));
            }
            if component.button().is_some() {
                classes.extend(FOCUS_RING.iter().map(|c| c.to_string()));
            }
            if component.reduce_motion {
                classes.push("motion-reduce:animate-none".to_string());
            }
        }
        Slot::Part(part) => {
            if let Some(rule) = component.rule(RuleState::Part(part)) {
                classes.extend(prefixed(&rule.declarations, ""));
            }
        }
    }
    classes
}

/// Arbitrary value: spaces become underscores.
fn arbitrary(value: &str) -> String {
    value.trim().replace(' ', "_")
}

fn fixed_utility(property: &str, value: &str) -> Option<String> {
    let class = match (property, value) {
        ("display", "inline-flex" | "flex" | "grid" | "block" | "inline-block") => value,
        ("position", "relative" | "absolute") => value,
        ("align-items", "center") => "items-center",
        ("align-items", "stretch") => "items-stretch",
        ("align-items", "flex-start") => "items-start",
        ("align-items", "flex-end") => "items-end",
        ("align-items", "baseline") => "items-baseline",
        ("justify-content", "center") => "justify-center",
        ("justify-content", "flex-start") => "justify-start",
        ("justify-content", "flex-end") => "justify-end",
        ("justify-content", "space-between") => "justify-between",
        ("justify-content", "space-around") => "justify-around",
        ("justify-content", "space-evenly") => "justify-evenly",
        ("flex-direction", "row") => "flex-row",
        ("flex-direction", "column") => "flex-col",
        ("flex-direction", "row-reverse") => "flex-row-reverse",
        ("flex-direction", "column-reverse") => "flex-col-reverse",
        ("border-radius", "9999px") => "rounded-full",
        ("border-radius", "0" | "0px") => "rounded-none",
        ("border-radius", "0.375rem") => "rounded-md",
        ("border-radius", "0.75rem" | "12px") => "rounded-xl",
        ("font-weight", "400") => "font-normal",
        ("font-weight", "500") => "font-medium",
        ("font-weight", "600") => "font-semibold",
        ("font-weight", "700") => "font-bold",
        ("text-align", "left") => "text-left",
        ("text-align", "center") => "text-center",
        ("text-align", "right") => "text-right",
        ("cursor", "pointer") => "cursor-pointer",
        ("cursor", "not-allowed") => "cursor-not-allowed",
        ("width", "100%") => "w-full",
        ("overflow", "hidden") => "overflow-hidden",
        ("inset", "0") => "inset-0",
        ("object-fit", "cover") => "object-cover",
        ("pointer-events", "none") => "pointer-events-none",
        ("margin", "0") => "m-0",
        ("opacity", _) => return opacity(value),
        ("transition", _) => return transition(value),
        _ => return None,
    };
    Some(class.to_string())
}

fn opacity(value: &str) -> Option<String> {
    let percent = value.parse::<f64>().ok()? * 100.0;
    let rounded = percent.round();
    ((percent - rounded).abs() < 1e-9 && rounded as i64 % 5 == 0)
        .then(|| format!("opacity-{}", rounded as i64))
}

fn transition(value: &str) -> Option<String> {
    let duration = value.strip_prefix("all ")?.strip_suffix("ms")?;
    let duration: u32 = duration.parse().ok()?;
    if DURATIONS.contains(&duration) {
        Some(format!("transition-all duration-{}", duration))
    } else {
        Some(format!("transition-all duration-[{}ms]", duration))
    }
}

fn padding(value: &str) -> String {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [all] => format!("p-[{}]", all),
        [y, x] => format!("py-[{}] px-[{}]", y, x),
        _ => format!("[padding:{}]", arbitrary(value)),
    }
}

/// Tailwind class for one declaration: a fixed utility when one exists,
/// otherwise bracketed arbitrary-value syntax.
pub(crate) fn utility(property: &str, value: &CssValue, keyframes: &[KeyframesBlock]) -> String {
    if let CssValue::Animation { name, .. } = value {
        let fixed = keyframes
            .iter()
            .find(|block| &block.name == name)
            .and_then(|block| block.tailwind_utility);
        return match fixed {
            Some(class) => class.to_string(),
            None => format!("animate-[{}]", arbitrary(&value.to_string())),
        };
    }
    let text = value.to_string();
    if let Some(class) = fixed_utility(property, &text) {
        return class;
    }
    let v = arbitrary(&text);
    match property {
        "color" => format!("text-[{}]", v),
        "background-color" | "background" | "background-image" => format!("bg-[{}]", v),
        "border-radius" => format!("rounded-[{}]", v),
        "width" => format!("w-[{}]", v),
        "height" => format!("h-[{}]", v),
        "max-width" => format!("max-w-[{}]", v),
        "gap" => format!("gap-[{}]", v),
        "box-shadow" => format!("shadow-[{}]", v),
        "opacity" => format!("opacity-[{}]", v),
        "padding" => padding(&text),
        _ => format!("[{}:{}]", property, v),
    }
}
