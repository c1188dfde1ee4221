//! Export targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wizard_core::ComponentKind;

use crate::error::CodegenError;
use crate::options::ExportOptions;

/// A target syntax the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportTarget {
    Css,
    Html,
    Tailwind,
    React,
    Vue,
    Angular,
    Svelte,
    StyledComponents,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 8] = [
        ExportTarget::Css,
        ExportTarget::Html,
        ExportTarget::Tailwind,
        ExportTarget::React,
        ExportTarget::Vue,
        ExportTarget::Angular,
        ExportTarget::Svelte,
        ExportTarget::StyledComponents,
    ];

    /// Identifier used by export menus.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportTarget::Css => "css",
            ExportTarget::Html => "html",
            ExportTarget::Tailwind => "tailwind",
            ExportTarget::React => "react",
            ExportTarget::Vue => "vue",
            ExportTarget::Angular => "angular",
            ExportTarget::Svelte => "svelte",
            ExportTarget::StyledComponents => "styledComponents",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ExportTarget::Css => "CSS",
            ExportTarget::Html => "HTML",
            ExportTarget::Tailwind => "Tailwind",
            ExportTarget::React => "React",
            ExportTarget::Vue => "Vue",
            ExportTarget::Angular => "Angular",
            ExportTarget::Svelte => "Svelte",
            ExportTarget::StyledComponents => "Styled Components",
        }
    }

    /// Syntax-highlighting language for the generated text.
    pub fn language(self) -> &'static str {
        match self {
            ExportTarget::Css => "css",
            ExportTarget::Html | ExportTarget::Vue | ExportTarget::Svelte => "html",
            ExportTarget::Tailwind | ExportTarget::React | ExportTarget::StyledComponents => "jsx",
            ExportTarget::Angular => "typescript",
        }
    }

    /// Suggested download file name.
    pub fn file_name(self, kind: ComponentKind, options: &ExportOptions) -> String {
        let class = options.class_name_for(kind);
        let component = options.component_name_for(kind);
        match self {
            ExportTarget::Css => format!("{}.css", class),
            ExportTarget::Html => format!("{}.html", class),
            ExportTarget::Tailwind | ExportTarget::React => format!("{}.jsx", component),
            ExportTarget::Vue => format!("{}.vue", component),
            ExportTarget::Angular => format!("{}.component.ts", class),
            ExportTarget::Svelte => format!("{}.svelte", component),
            ExportTarget::StyledComponents => format!("{}.styled.jsx", component),
        }
    }

    /// Text returned when there is no configuration to generate from.
    pub fn placeholder(self) -> &'static str {
        match self {
            ExportTarget::Css => "/* Loading component state... */",
            ExportTarget::Html | ExportTarget::Vue | ExportTarget::Svelte => {
                "<!-- Loading component state... -->"
            }
            ExportTarget::Tailwind
            | ExportTarget::React
            | ExportTarget::Angular
            | ExportTarget::StyledComponents => "// Loading component state...",
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTarget {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| CodegenError::UnknownTarget(s.to_string()))
    }
}
