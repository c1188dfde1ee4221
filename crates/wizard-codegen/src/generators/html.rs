//! Static HTML with an embedded stylesheet.

use super::{arrow_svg, class_attr, markup_lines, stylesheet, CodeGenerator, MarkupPlan};
use crate::model::{Markup, ResolvedComponent};
use crate::target::ExportTarget;

/// HTML generator.
pub struct HtmlGenerator;

impl CodeGenerator for HtmlGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::Html
    }

    fn generate(&self, component: &ResolvedComponent) -> String {
        let attrs = |slot| vec![class_attr(component, slot, false)];
        let icon = |side, size| arrow_svg(size, side, false);
        let plan = MarkupPlan {
            root_tag: root_tag(component),
            attrs: &attrs,
            icon: &icon,
        };
        format!(
            "{}\n\n<!-- Include this CSS -->\n<style>\n{}</style>\n",
            markup_lines(component, &plan, 0).join("\n"),
            stylesheet(component)
        )
    }
}

pub(crate) fn root_tag(component: &ResolvedComponent) -> &'static str {
    match component.markup {
        Markup::Button(_) => "button",
        Markup::Card(_) => "div",
    }
}
