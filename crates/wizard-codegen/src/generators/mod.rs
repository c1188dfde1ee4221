//! Printers for each export target.
//!
//! Every printer consumes the same [`ResolvedComponent`]; none of them decide
//! which declarations exist, only how they are spelled.

mod angular;
mod css;
mod html;
mod react;
mod styled;
mod svelte;
mod tailwind;
mod vue;

pub use angular::AngularGenerator;
pub use css::{stylesheet, CssGenerator};
pub use html::HtmlGenerator;
pub use react::ReactGenerator;
pub use styled::StyledComponentsGenerator;
pub use svelte::SvelteGenerator;
pub use tailwind::TailwindGenerator;
pub use vue::VueGenerator;

use crate::model::{CardPart, CssValue, IconSide, Markup, ResolvedComponent, RuleState};
use crate::target::ExportTarget;
use wizard_core::ImagePosition;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target this generator prints.
    fn target(&self) -> ExportTarget;

    /// Print a resolved component.
    fn generate(&self, component: &ResolvedComponent) -> String;
}

/// Generator for a target.
pub fn generator_for(target: ExportTarget) -> Box<dyn CodeGenerator> {
    match target {
        ExportTarget::Css => Box::new(CssGenerator),
        ExportTarget::Html => Box::new(HtmlGenerator),
        ExportTarget::Tailwind => Box::new(TailwindGenerator),
        ExportTarget::React => Box::new(ReactGenerator),
        ExportTarget::Vue => Box::new(VueGenerator),
        ExportTarget::Angular => Box::new(AngularGenerator),
        ExportTarget::Svelte => Box::new(SvelteGenerator),
        ExportTarget::StyledComponents => Box::new(StyledComponentsGenerator),
    }
}

/// Escape element text. Braces are escaped too so the same text is safe in
/// JSX and template interpolation syntaxes.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Single-quoted JS string literal.
pub(crate) fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// A CSS value as a JS object literal value.
pub(crate) fn js_value(value: &CssValue) -> String {
    match value {
        CssValue::Number(n) => n.to_string(),
        other => js_string(&other.to_string()),
    }
}

/// Prefix every non-empty line with `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSS selector for a rule of the component rooted at `class_name`.
pub(crate) fn selector(class_name: &str, state: RuleState) -> String {
    match state {
        RuleState::Base => format!(".{}", class_name),
        RuleState::Hover => format!(".{}:hover", class_name),
        RuleState::Active => format!(".{}:active", class_name),
        RuleState::Disabled => format!(".{}:disabled", class_name),
        RuleState::Part(part) => format!(".{} .{}", class_name, part.class_name()),
    }
}

/// Inline arrow icon, with JSX attribute names when `jsx` is set.
pub(crate) fn arrow_svg(size: f64, side: IconSide, jsx: bool) -> String {
    let (class_attr, width_attr, cap_attr, join_attr) = if jsx {
        ("className", "strokeWidth", "strokeLinecap", "strokeLinejoin")
    } else {
        ("class", "stroke-width", "stroke-linecap", "stroke-linejoin")
    };
    let side_class = match side {
        IconSide::Left => "icon-left",
        IconSide::Right => "icon-right",
    };
    format!(
        "<svg {}=\"icon {}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" {}=\"2\" {}=\"round\" {}=\"round\"><path d=\"M5 12h14M12 5l7 7-7 7\" /></svg>",
        class_attr, side_class, size, size, width_attr, cap_attr, join_attr
    )
}

/// Element of the printed markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Part(CardPart),
}

/// How a target spells the shared markup tree.
pub(crate) struct MarkupPlan<'a> {
    /// Tag used for the root element (`button`, `StyledCard`, ...).
    pub root_tag: &'a str,
    /// Styling attributes for an element, already rendered (`class="x"`).
    pub attrs: &'a dyn Fn(Slot) -> Vec<String>,
    /// Markup for an icon.
    pub icon: &'a dyn Fn(IconSide, f64) -> String,
}

enum Node {
    Element {
        tag: String,
        attrs: Vec<String>,
        children: Vec<Node>,
        void: bool,
    },
    Text(String),
    Raw(String),
}

impl Node {
    fn element(tag: &str, attrs: Vec<String>, children: Vec<Node>) -> Node {
        Node::Element {
            tag: tag.to_string(),
            attrs,
            children,
            void: false,
        }
    }

    fn render(&self, depth: usize, out: &mut Vec<String>) {
        let pad = "  ".repeat(depth);
        match self {
            Node::Text(text) => out.push(format!("{}{}", pad, escape_text(text))),
            Node::Raw(raw) => out.push(format!("{}{}", pad, raw)),
            Node::Element {
                tag,
                attrs,
                children,
                void,
            } => {
                let open = if attrs.is_empty() {
                    tag.clone()
                } else {
                    format!("{} {}", tag, attrs.join(" "))
                };
                if *void {
                    out.push(format!("{}<{} />", pad, open));
                    return;
                }
                match children.as_slice() {
                    [] => out.push(format!("{}<{}></{}>", pad, open, tag)),
                    [Node::Text(text)] => out.push(format!(
                        "{}<{}>{}</{}>",
                        pad,
                        open,
                        escape_text(text),
                        tag
                    )),
                    _ => {
                        out.push(format!("{}<{}>", pad, open));
                        for child in children {
                            child.render(depth + 1, out);
                        }
                        out.push(format!("{}</{}>", pad, tag));
                    }
                }
            }
        }
    }
}

/// Render the component's markup, one line per entry, starting at `depth`
/// two-space indentation levels.
pub(crate) fn markup_lines(component: &ResolvedComponent, plan: &MarkupPlan<'_>, depth: usize) -> Vec<String> {
    let attrs = |slot: Slot| (plan.attrs)(slot);
    let root = match &component.markup {
        Markup::Button(button) => {
            let mut children = Vec::new();
            let icon = button.icon.as_ref();
            if let Some(icon) = icon.filter(|icon| icon.side == IconSide::Left) {
                children.push(Node::Raw((plan.icon)(icon.side, icon.size)));
            }
            if icon.is_some() {
                children.push(Node::element(
                    "span",
                    Vec::new(),
                    vec![Node::Text(button.text.clone())],
                ));
            } else {
                children.push(Node::Text(button.text.clone()));
            }
            if let Some(icon) = icon.filter(|icon| icon.side == IconSide::Right) {
                children.push(Node::Raw((plan.icon)(icon.side, icon.size)));
            }
            let mut root_attrs = attrs(Slot::Root);
            if button.disabled {
                root_attrs.push("disabled".to_string());
            }
            Node::element(plan.root_tag, root_attrs, children)
        }
        Markup::Card(card) => {
            let part = |part: CardPart| attrs(Slot::Part(part));
            let image = card.image.as_ref().map(|image| Node::Element {
                tag: "img".to_string(),
                attrs: {
                    let mut a = part(CardPart::Image);
                    a.push(format!("src=\"{}\"", escape_attr(&image.src)));
                    a.push(format!("alt=\"{}\"", escape_attr(&image.alt)));
                    a
                },
                children: Vec::new(),
                void: true,
            });
            let image_top = card
                .image
                .as_ref()
                .map_or(false, |image| image.position == ImagePosition::Top);

            let mut children = Vec::new();
            if card.overlay {
                children.push(Node::element("div", part(CardPart::Overlay), Vec::new()));
            }
            let (top, bottom) = if image_top { (image, None) } else { (None, image) };
            children.extend(top);
            if let Some(header) = &card.header {
                let mut header_children = vec![Node::element(
                    "h3",
                    part(CardPart::Title),
                    vec![Node::Text(header.title.clone())],
                )];
                if let Some(subtitle) = &header.subtitle {
                    header_children.push(Node::element(
                        "p",
                        part(CardPart::Subtitle),
                        vec![Node::Text(subtitle.clone())],
                    ));
                }
                children.push(Node::element("div", part(CardPart::Header), header_children));
            }
            children.push(Node::element(
                "div",
                part(CardPart::Body),
                vec![Node::Text(card.body.clone())],
            ));
            children.extend(bottom);
            if let Some(footer) = &card.footer {
                let content = if footer.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::Text(footer.clone())]
                };
                children.push(Node::element("div", part(CardPart::Footer), content));
            }
            Node::element(plan.root_tag, attrs(Slot::Root), children)
        }
    };
    let mut out = Vec::new();
    root.render(depth, &mut out);
    out
}

/// `class="..."` or `className="..."` for a slot.
pub(crate) fn class_attr(component: &ResolvedComponent, slot: Slot, jsx: bool) -> String {
    let name = if jsx { "className" } else { "class" };
    let class = match slot {
        Slot::Root => component.class_name.as_str(),
        Slot::Part(part) => part.class_name(),
    };
    format!("{}=\"{}\"", name, class)
}
