//! Component kinds and their registry metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The kinds of UI element the wizard can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Card,
}

impl ComponentKind {
    /// Every registered kind, in selector order.
    pub const ALL: [ComponentKind; 2] = [ComponentKind::Button, ComponentKind::Card];

    /// Identifier used in persisted state and imported documents.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Card => "card",
        }
    }

    /// Registry metadata shown by component pickers.
    pub fn info(self) -> ComponentInfo {
        match self {
            ComponentKind::Button => ComponentInfo {
                kind: self,
                name: "Button",
                description: "Interactive button with hover states, icons and animations",
                category: "Inputs",
                icon: "lucide:mouse-pointer-click",
            },
            ComponentKind::Card => ComponentInfo {
                kind: self,
                name: "Card",
                description: "Content container with header, image, body and footer sections",
                category: "Layout",
                icon: "lucide:credit-card",
            },
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(ComponentKind::Button),
            "card" => Ok(ComponentKind::Card),
            other => Err(ConfigError::UnknownKind(other.to_string())),
        }
    }
}

/// Display metadata for a component kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
}
