//! Svelte component.

use super::html::root_tag;
use super::{arrow_svg, class_attr, indent, markup_lines, stylesheet, CodeGenerator, MarkupPlan};
use crate::model::ResolvedComponent;
use crate::target::ExportTarget;

/// Svelte generator.
pub struct SvelteGenerator;

impl CodeGenerator for SvelteGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::Svelte
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
            "<script>\n  // {}\n</script>\n\n{}\n\n<style>\n{}\n</style>\n",
            component.component_name,
            markup_lines(component, &plan, 0).join("\n"),
            indent(&stylesheet(component), 2)
        )
    }
}
