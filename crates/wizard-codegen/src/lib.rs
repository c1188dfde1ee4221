//! Code generation for component configurations.
//!
//! A configuration is first resolved into a [`ResolvedComponent`] (rules,
//! keyframes and markup with every omission rule applied), then printed by a
//! [`CodeGenerator`] for the requested [`ExportTarget`].
//!
//! # Example
//!
//! ```
//! use wizard_codegen::{generate, ExportOptions, ExportTarget};
//! use wizard_core::{ComponentConfig, ComponentKind};
//!
//! let config = ComponentConfig::default_for(ComponentKind::Button);
//! let css = generate(ExportTarget::Css, Some(&config), None, &ExportOptions::default());
//! assert!(css.starts_with(".custom-button {"));
//! ```

pub mod error;
pub mod generators;
pub mod keyframes;
pub mod model;
pub mod options;
pub mod resolve;
pub mod target;

pub use error::{CodegenError, Result};
pub use generators::{generator_for, stylesheet, CodeGenerator};
pub use model::{CssValue, Declarations, ResolvedComponent, RuleState};
pub use options::ExportOptions;
pub use resolve::resolve;
pub use target::ExportTarget;

use indexmap::IndexMap;
use wizard_core::{ComponentConfig, CustomAnimation};

/// Generate code for one target.
///
/// Without a configuration (state not loaded yet) the target's placeholder
/// comment is returned instead.
pub fn generate(
    target: ExportTarget,
    config: Option<&ComponentConfig>,
    animation: Option<&CustomAnimation>,
    options: &ExportOptions,
) -> String {
    let Some(config) = config else {
        return target.placeholder().to_string();
    };
    let component = resolve(config, animation, options);
    tracing::trace!(export = %target, kind = %component.kind, "generating code");
    generator_for(target).generate(&component)
}

/// Generate code for a target given by its identifier (`"styledComponents"`).
pub fn generate_named(
    target: &str,
    config: Option<&ComponentConfig>,
    animation: Option<&CustomAnimation>,
    options: &ExportOptions,
) -> Result<String> {
    let target: ExportTarget = target.parse()?;
    Ok(generate(target, config, animation, options))
}

/// Generate code for every target, resolving the configuration once.
pub fn generate_all(
    config: &ComponentConfig,
    animation: Option<&CustomAnimation>,
    options: &ExportOptions,
) -> IndexMap<ExportTarget, String> {
    let component = resolve(config, animation, options);
    ExportTarget::ALL
        .into_iter()
        .map(|target| (target, generator_for(target).generate(&component)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wizard_core::ComponentKind;

    fn click_me_pill() -> ComponentConfig {
        ComponentConfig::default_for(ComponentKind::Button)
            .with_field("text", json!("Click me"))
            .and_then(|c| c.with_field("backgroundColor", json!("#3b82f6")))
            .and_then(|c| c.with_field("shape", json!("pill")))
            .and_then(|c| c.with_field("useShadow", json!(false)))
            .unwrap()
    }

    #[test]
    fn test_placeholder_without_config() {
        for target in ExportTarget::ALL {
            let out = generate(target, None, None, &ExportOptions::default());
            assert_eq!(out, target.placeholder());
        }
    }

    #[test]
    fn test_pill_button_across_targets() {
        let config = click_me_pill();
        let options = ExportOptions::default();
        let css = generate(ExportTarget::Css, Some(&config), None, &options);
        assert!(css.contains("border-radius: 9999px;"));
        assert!(!css.contains("box-shadow"));
        let html = generate(ExportTarget::Html, Some(&config), None, &options);
        assert!(html.contains(">Click me<"));
        let tailwind = generate(ExportTarget::Tailwind, Some(&config), None, &options);
        assert!(tailwind.contains("rounded-full"));
    }

    #[test]
    fn test_generate_all_matches_single() {
        let config = click_me_pill();
        let options = ExportOptions::default();
        let all = generate_all(&config, None, &options);
        assert_eq!(all.len(), ExportTarget::ALL.len());
        for (target, code) in &all {
            assert_eq!(code, &generate(*target, Some(&config), None, &options));
        }
    }

    #[test]
    fn test_generate_named() {
        let config = click_me_pill();
        let out = generate_named("css", Some(&config), None, &ExportOptions::default()).unwrap();
        assert!(out.contains(".custom-button"));
        assert!(matches!(
            generate_named("jsx", Some(&config), None, &ExportOptions::default()),
            Err(CodegenError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_generators_do_not_touch_input() {
        let config = click_me_pill();
        let before = config.clone();
        let _ = generate_all(&config, None, &ExportOptions::default());
        assert_eq!(config, before);
    }
}
