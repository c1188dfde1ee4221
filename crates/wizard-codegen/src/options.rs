//! Export options.

use wizard_core::ComponentKind;

/// Naming overrides for generated code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// CSS class applied to the root element. Defaults to `custom-<kind>`.
    pub class_name: Option<String>,
    /// Component/identifier name for framework targets. Defaults to `Custom<Kind>`.
    pub component_name: Option<String>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root CSS class name.
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Set the framework component name.
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn class_name_for(&self, kind: ComponentKind) -> String {
        match &self.class_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!("custom-{}", kind.as_str()),
        }
    }

    pub fn component_name_for(&self, kind: ComponentKind) -> String {
        match &self.component_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => match kind {
                ComponentKind::Button => "CustomButton".to_string(),
                ComponentKind::Card => "CustomCard".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::new();
        assert_eq!(options.class_name_for(ComponentKind::Button), "custom-button");
        assert_eq!(options.component_name_for(ComponentKind::Card), "CustomCard");
    }

    #[test]
    fn test_overrides() {
        let options = ExportOptions::new()
            .with_class_name("cta")
            .with_component_name("  ");
        assert_eq!(options.class_name_for(ComponentKind::Card), "cta");
        assert_eq!(options.component_name_for(ComponentKind::Button), "CustomButton");
    }
}
