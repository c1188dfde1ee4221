//! Vue single-file component.

use super::html::root_tag;
use super::{arrow_svg, class_attr, indent, js_string, markup_lines, stylesheet, CodeGenerator, MarkupPlan};
use crate::model::ResolvedComponent;
use crate::target::ExportTarget;

/// Vue generator.
pub struct VueGenerator;

impl CodeGenerator for VueGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::Vue
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
            "<template>\n{}\n</template>\n\n<script>\nexport default {{\n  name: {},\n}};\n</script>\n\n<style scoped>\n{}\n</style>\n",
            markup_lines(component, &plan, 1).join("\n"),
            js_string(&component.component_name),
            indent(&stylesheet(component), 2)
        )
    }
}
