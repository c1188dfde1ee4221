//! JavaScript-facing shapes.

use serde::{Deserialize, Serialize};
use wizard_codegen::ExportOptions;

/// Position in the active timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryJs {
    pub cursor: usize,
    pub length: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Export naming overrides from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptionsJs {
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
}

impl ExportOptionsJs {
    pub fn into_core(self) -> ExportOptions {
        ExportOptions {
            class_name: self.class_name,
            component_name: self.component_name,
        }
    }
}

/// Generated code together with how to present it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCodeJs {
    pub target: String,
    pub label: String,
    pub language: String,
    pub file_name: String,
    pub code: String,
}
