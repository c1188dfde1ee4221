//! Plain CSS stylesheet.

use super::{selector, CodeGenerator};
use crate::model::{Declarations, KeyframesBlock, ResolvedComponent};
use crate::target::ExportTarget;

/// CSS generator.
pub struct CssGenerator;

impl CodeGenerator for CssGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::Css
    }

    fn generate(&self, component: &ResolvedComponent) -> String {
        stylesheet(component)
    }
}

pub(crate) fn declaration_lines(declarations: &Declarations, depth: usize) -> Vec<String> {
    let pad = "  ".repeat(depth);
    declarations
        .iter()
        .map(|(property, value)| format!("{}{}: {};", pad, property, value))
        .collect()
}

pub(crate) fn block(selector: &str, declarations: &Declarations, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let mut lines = vec![format!("{}{} {{", pad, selector)];
    lines.extend(declaration_lines(declarations, depth + 1));
    lines.push(format!("{}}}", pad));
    lines.join("\n")
}

/// Frame blocks without the `@keyframes` wrapper.
pub(crate) fn keyframes_body(keyframes: &KeyframesBlock, depth: usize) -> String {
    keyframes
        .frames
        .iter()
        .map(|frame| block(&frame.selector, &frame.declarations, depth))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn keyframes_block(keyframes: &KeyframesBlock) -> String {
    format!(
        "@keyframes {} {{\n{}\n}}",
        keyframes.name,
        keyframes_body(keyframes, 1)
    )
}

pub(crate) fn reduced_motion_block(class_name: &str) -> String {
    format!(
        "@media (prefers-reduced-motion: reduce) {{\n  .{} {{\n    animation: none;\n  }}\n}}",
        class_name
    )
}

/// Full stylesheet: rules, keyframes, then the reduced-motion override.
/// Ends with a newline.
pub fn stylesheet(component: &ResolvedComponent) -> String {
    let mut blocks: Vec<String> = component
        .rules
        .iter()
        .map(|rule| {
            block(
                &selector(&component.class_name, rule.state),
                &rule.declarations,
                0,
            )
        })
        .collect();
    blocks.extend(component.keyframes.iter().map(keyframes_block));
    if component.reduce_motion {
        blocks.push(reduced_motion_block(&component.class_name));
    }
    let mut css = blocks.join("\n\n");
    css.push('\n');
    css
}
