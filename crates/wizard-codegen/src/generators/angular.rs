//! Angular component: TypeScript class, template and stylesheet sections.

use super::html::root_tag;
use super::{arrow_svg, class_attr, markup_lines, stylesheet, CodeGenerator, MarkupPlan};
use crate::model::ResolvedComponent;
use crate::target::ExportTarget;

/// Angular generator.
pub struct AngularGenerator;

impl CodeGenerator for AngularGenerator {
    fn target(&self) -> ExportTarget {
        ExportTarget::Angular
    }

    fn generate(&self, component: &ResolvedComponent) -> String {
        let attrs = |slot| vec![class_attr(component, slot, false)];
        let icon = |side, size| arrow_svg(size, side, false);
        let plan = MarkupPlan {
            root_tag: root_tag(component),
            attrs: &attrs,
            icon: &icon,
        };
        let base = &component.class_name;

        let mut lines = vec![
            format!("// {}.component.ts", base),
            "import { Component } from '@angular/core';".to_string(),
            String::new(),
            "@Component({".to_string(),
            format!("  selector: 'app-{}',", base),
            format!("  templateUrl: './{}.component.html',", base),
            format!("  styleUrls: ['./{}.component.css'],", base),
            "})".to_string(),
            format!("export class {}Component {{}}", component.component_name),
            String::new(),
            format!("<!-- {}.component.html -->", base),
        ];
        lines.extend(markup_lines(component, &plan, 0));
        lines.push(String::new());
        lines.push(format!("/* {}.component.css */", base));

        let mut out = lines.join("\n");
        out.push('\n');
        out.push_str(&stylesheet(component));
        out
    }
}
