//! React function component with inline style objects.

use super::{arrow_svg, css, js_value, markup_lines, CodeGenerator, Slot, MarkupPlan};
use crate::model::{js_property, Declarations, Markup, ResolvedComponent, RuleState};
use crate::target::ExportTarget;

/// React generator.
pub struct ReactGenerator;

impl CodeGenerator for ReactGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::React
    }

    fn generate(&self, component: &ResolvedComponent) -> String {
        let has_hover = component.has_rule(RuleState::Hover);
        let has_active = component.has_rule(RuleState::Active);
        let disabled = component.button().map_or(false, |button| button.disabled);
        let uses_state = has_hover || has_active;

        let mut lines = Vec::new();
        if uses_state {
            lines.push("import React, { useState } from 'react';".to_string());
        } else {
            lines.push("import React from 'react';".to_string());
        }
        lines.push(String::new());

        for rule in &component.rules {
            let ident = match rule.state {
                RuleState::Base => "baseStyle",
                RuleState::Hover => "hoverStyle",
                RuleState::Active => "activeStyle",
                RuleState::Disabled => "disabledStyle",
                RuleState::Part(part) => part.style_ident(),
            };
            lines.push(style_object(ident, &rule.declarations));
            lines.push(String::new());
        }

        let mut sheet = Vec::new();
        sheet.extend(component.keyframes.iter().map(css::keyframes_block));
        if component.reduce_motion {
            sheet.push(css::reduced_motion_block(&component.class_name));
        }
        let has_sheet = !sheet.is_empty();
        if has_sheet {
            lines.push(format!("const keyframes = `\n{}\n`;", template_escape(&sheet.join("\n\n"))));
            lines.push(String::new());
        }

        lines.push(format!("export default function {}() {{", component.component_name));
        if has_hover {
            lines.push("  const [isHovered, setIsHovered] = useState(false);".to_string());
        }
        if has_active {
            lines.push("  const [isActive, setIsActive] = useState(false);".to_string());
        }

        let mut spreads = vec!["...baseStyle".to_string()];
        if has_hover {
            spreads.push("...(isHovered ? hoverStyle : {})".to_string());
        }
        if has_active {
            spreads.push("...(isActive ? activeStyle : {})".to_string());
        }
        if disabled {
            spreads.push("...disabledStyle".to_string());
        }
        let style_ref = if spreads.len() == 1 {
            "baseStyle"
        } else {
            lines.push(String::new());
            lines.push("  const style = {".to_string());
            for spread in &spreads {
                lines.push(format!("    {},", spread));
            }
            lines.push("  };".to_string());
            "style"
        };
        lines.push(String::new());

        let mut handlers = Vec::new();
        if has_hover {
            handlers.push("onMouseEnter={() => setIsHovered(true)}".to_string());
        }
        match (has_hover, has_active) {
            (true, true) => handlers.push(
                "onMouseLeave={() => { setIsHovered(false); setIsActive(false); }}".to_string(),
            ),
            (true, false) => handlers.push("onMouseLeave={() => setIsHovered(false)}".to_string()),
            (false, true) => handlers.push("onMouseLeave={() => setIsActive(false)}".to_string()),
            (false, false) => {}
        }
        if has_active {
            handlers.push("onMouseDown={() => setIsActive(true)}".to_string());
            handlers.push("onMouseUp={() => setIsActive(false)}".to_string());
        }

        let attrs = |slot: Slot| match slot {
            Slot::Root => {
                let mut attrs = vec![
                    format!("className=\"{}\"", component.class_name),
                    format!("style={{{}}}", style_ref),
                ];
                attrs.extend(handlers.iter().cloned());
                attrs
            }
            Slot::Part(part) => vec![
                format!("className=\"{}\"", part.class_name()),
                format!("style={{{}}}", part.style_ident()),
            ],
        };
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

        lines.push("  return (".to_string());
        if has_sheet {
            lines.push("    <>".to_string());
            lines.push("      <style>{keyframes}</style>".to_string());
            lines.extend(markup_lines(component, &plan, 3));
            lines.push("    </>".to_string());
        } else {
            lines.extend(markup_lines(component, &plan, 2));
        }
        lines.push("  );".to_string());
        lines.push("}".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// `const ident = { camelCase: value, ... };`
pub(crate) fn style_object(ident: &str, declarations: &Declarations) -> String {
    let mut lines = vec![format!("const {} = {{", ident)];
    for (property, value) in declarations.iter() {
        lines.push(format!("  {}: {},", js_property(property), js_value(value)));
    }
    lines.push("};".to_string());
    lines.join("\n")
}

fn template_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}
