//! styled-components: one `keyframes` template per animation and a styled
//! root element carrying every rule.

use convert_case::{Case, Casing};

use super::{css, escape_attr, markup_lines, CodeGenerator, Slot, MarkupPlan};
use crate::model::{CssValue, Declarations, IconSide, Markup, ResolvedComponent, RuleState};
use crate::target::ExportTarget;

/// styled-components generator.
pub struct StyledComponentsGenerator;

/// JS identifier for a keyframes template (`pulse` → `pulseAnimation`).
pub(crate) fn animation_ident(name: &str) -> String {
    let mut camel: String = name
        .to_case(Case::Camel)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    if !camel.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$') {
        camel.insert(0, '_');
    }
    if camel.ends_with("Animation") {
        camel
    } else {
        format!("{}Animation", camel)
    }
}

fn declaration_lines(declarations: &Declarations, depth: usize) -> Vec<String> {
    let pad = "  ".repeat(depth);
    declarations
        .iter()
        .map(|(property, value)| match value {
            CssValue::Animation { name, timing } => format!(
                "{}{}: ${{{}}} {};",
                pad,
                property,
                animation_ident(name),
                timing
            ),
            other => format!("{}{}: {};", pad, property, other),
        })
        .collect()
}

fn nested_selector(state: RuleState) -> String {
    match state {
        RuleState::Base => "&".to_string(),
        RuleState::Hover => "&:hover".to_string(),
        RuleState::Active => "&:active".to_string(),
        RuleState::Disabled => "&:disabled".to_string(),
        RuleState::Part(part) => format!("& .{}", part.class_name()),
    }
}

impl CodeGenerator for StyledComponentsGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::StyledComponents
    }

    fn generate(&self, component: &ResolvedComponent) -> String {
        let (element, styled_name) = match component.markup {
            Markup::Button(_) => ("button", "StyledButton"),
            Markup::Card(_) => ("div", "StyledCard"),
        };
        let has_keyframes = !component.keyframes.is_empty();
        let has_icon = component
            .button()
            .map_or(false, |button| button.icon.is_some());

        let mut lines = Vec::new();
        if has_keyframes {
            lines.push("import styled, { keyframes } from 'styled-components';".to_string());
        } else {
            lines.push("import styled from 'styled-components';".to_string());
        }
        lines.push(String::new());

        for block in &component.keyframes {
            lines.push(format!("const {} = keyframes`", animation_ident(&block.name)));
            lines.push(css::keyframes_body(block, 1));
            lines.push("`;".to_string());
            lines.push(String::new());
        }

        lines.push(format!("const {} = styled.{}`", styled_name, element));
        for rule in &component.rules {
            if rule.state == RuleState::Base {
                lines.extend(declaration_lines(&rule.declarations, 1));
                continue;
            }
            lines.push(String::new());
            lines.push(format!("  {} {{", nested_selector(rule.state)));
            lines.extend(declaration_lines(&rule.declarations, 2));
            lines.push("  }".to_string());
        }
        if component.reduce_motion {
            lines.push(String::new());
            lines.push("  @media (prefers-reduced-motion: reduce) {".to_string());
            lines.push("    animation: none;".to_string());
            lines.push("  }".to_string());
        }
        lines.push("`;".to_string());
        lines.push(String::new());

        if has_icon {
            lines.push("const ArrowIcon = ({ size }) => (".to_string());
            lines.push(
                "  <svg width={size} height={size} viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" strokeWidth=\"2\" strokeLinecap=\"round\" strokeLinejoin=\"round\">"
                    .to_string(),
            );
            lines.push("    <path d=\"M5 12h14M12 5l7 7-7 7\" />".to_string());
            lines.push("  </svg>".to_string());
            lines.push(");".to_string());
            lines.push(String::new());
        }

        let attrs = |slot: Slot| match slot {
            Slot::Root => vec![format!("className=\"{}\"", escape_attr(&component.class_name))],
            Slot::Part(part) => vec![format!("className=\"{}\"", part.class_name())],
        };
        let icon = |_side: IconSide, size: f64| format!("<ArrowIcon size={{{}}} />", size);
        let plan = MarkupPlan {
            root_tag: styled_name,
            attrs: &attrs,
            icon: &icon,
        };
        lines.push(format!("export default function {}() {{", component.component_name));
        lines.push("  return (".to_string());
        lines.extend(markup_lines(component, &plan, 2));
        lines.push("  );".to_string());
        lines.push("}".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
