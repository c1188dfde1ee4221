//! WebAssembly bindings for the component wizard.
//!
//! Exposes the history store and code generator to a browser UI. State is
//! kept in `localStorage` so a reload resumes where the user left off.
//!
//! ## Example
//!
//! ```js
//! import { WizardEngine } from 'component-wizard';
//!
//! const engine = new WizardEngine();
//! engine.setComponentKind('button');
//! engine.updateState('text', 'Sign up');
//! engine.updateState('shape', 'pill');
//!
//! const css = engine.generateCode('css');
//! engine.undo();
//!
//! const url = engine.shareUrl(window.location.origin);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wizard_codegen::{ExportOptions, ExportTarget};
use wizard_core::{
    animation_presets, builtin_themes, ComponentKind, CustomAnimation, Preset, ThemeRole,
};
use wizard_store::{HistoryStore, PreviewTicket, StoreConfig};

mod storage;
mod types;

pub use storage::BrowserStorage;
pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The wizard state and code generator for JavaScript.
#[wasm_bindgen]
pub struct WizardEngine {
    store: HistoryStore<BrowserStorage>,
    export_options: ExportOptions,
}

#[wasm_bindgen]
impl WizardEngine {
    /// Create an engine backed by `localStorage`, restoring any saved state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_storage(BrowserStorage::detect(), StoreConfig::default())
    }

    /// Create an engine with store settings (`maxRecent`, `historyLimit`, `shareParam`).
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WizardEngine, JsError> {
        let config: StoreConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid store config: {}", e)))?;
        Ok(Self::with_storage(BrowserStorage::detect(), config))
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Whether state survives a reload.
    #[wasm_bindgen(js_name = isPersistent)]
    pub fn is_persistent(&self) -> bool {
        self.store.storage().is_persistent()
    }

    #[wasm_bindgen(js_name = componentKind)]
    pub fn component_kind(&self) -> String {
        self.store.kind().to_string()
    }

    #[wasm_bindgen(js_name = setComponentKind)]
    pub fn set_component_kind(&mut self, kind: &str) -> Result<(), JsError> {
        let kind = parse_kind(kind)?;
        self.store.set_component_kind(kind);
        Ok(())
    }

    /// Registry entries (name, description, category, icon) for every kind.
    #[wasm_bindgen(js_name = componentInfo)]
    pub fn component_info(&self) -> Result<JsValue, JsError> {
        let infos: Vec<_> = ComponentKind::ALL.iter().map(|kind| kind.info()).collect();
        to_js(&infos)
    }

    #[wasm_bindgen(js_name = recentlyUsed)]
    pub fn recently_used(&self) -> Vec<String> {
        self.store
            .recently_used()
            .iter()
            .map(|kind| kind.to_string())
            .collect()
    }

    /// The active snapshot as a plain object.
    #[wasm_bindgen]
    pub fn current(&self) -> Result<JsValue, JsError> {
        to_js(self.store.current())
    }

    /// Cursor, length and undo/redo availability.
    #[wasm_bindgen]
    pub fn history(&self) -> Result<JsValue, JsError> {
        to_js(&self.history_info())
    }

    #[wasm_bindgen(js_name = updateState)]
    pub fn update_state(&mut self, field: &str, value: JsValue) -> Result<(), JsError> {
        let value = from_js(value)?;
        self.store.update_state(field, value).map_err(store_error)
    }

    #[wasm_bindgen(js_name = updateStyle)]
    pub fn update_style(&mut self, property: &str, value: JsValue) -> Result<(), JsError> {
        let value = from_js(value)?;
        self.store.update_style(property, value).map_err(store_error)
    }

    #[wasm_bindgen(js_name = updateNestedState)]
    pub fn update_nested_state(
        &mut self,
        section: &str,
        key: &str,
        value: JsValue,
    ) -> Result<(), JsError> {
        let value = from_js(value)?;
        self.store
            .update_nested_state(section, key, value)
            .map_err(store_error)
    }

    #[wasm_bindgen]
    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    #[wasm_bindgen]
    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.store.jump_to(index)
    }

    #[wasm_bindgen(js_name = resetToDefault)]
    pub fn reset_to_default(&mut self) {
        self.store.reset_to_default();
    }

    /// Built-in and saved presets for a kind.
    #[wasm_bindgen]
    pub fn presets(&self, kind: &str) -> Result<JsValue, JsError> {
        let kind = parse_kind(kind)?;
        to_js(&self.store.presets_for(kind))
    }

    /// Apply the preset called `name` for `kind`, switching kind if needed.
    #[wasm_bindgen(js_name = applyPreset)]
    pub fn apply_preset(&mut self, kind: &str, name: &str) -> Result<(), JsError> {
        let kind = parse_kind(kind)?;
        let preset = self
            .store
            .presets_for(kind)
            .into_iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| JsError::new(&format!("Unknown preset: {}", name)))?;
        self.store.apply_preset(&preset).map_err(store_error)
    }

    #[wasm_bindgen(js_name = savePreset)]
    pub fn save_preset(&mut self, preset: JsValue) -> Result<(), JsError> {
        let preset: Preset = serde_wasm_bindgen::from_value(preset)
            .map_err(|e| JsError::new(&format!("Invalid preset: {}", e)))?;
        self.store.save_preset(preset).map_err(store_error)
    }

    #[wasm_bindgen(js_name = deletePreset)]
    pub fn delete_preset(&mut self, name: &str) -> bool {
        self.store.delete_preset(name)
    }

    #[wasm_bindgen]
    pub fn themes(&self) -> Result<JsValue, JsError> {
        to_js(&builtin_themes())
    }

    /// Name of the last applied theme, if any.
    #[wasm_bindgen(js_name = selectedTheme)]
    pub fn selected_theme(&self) -> Option<String> {
        self.store.selected_theme().map(|theme| theme.name.clone())
    }

    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&mut self, name: &str, role: &str) -> Result<(), JsError> {
        let role = role
            .parse::<ThemeRole>()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        self.store.apply_theme_named(name, role).map_err(store_error)
    }

    #[wasm_bindgen]
    pub fn animations(&self) -> Result<JsValue, JsError> {
        let animations: Vec<&CustomAnimation> = self.store.animations().iter().collect();
        to_js(&animations)
    }

    /// Starting points for the animation builder.
    #[wasm_bindgen(js_name = animationPresets)]
    pub fn animation_presets(&self) -> Result<JsValue, JsError> {
        to_js(&animation_presets())
    }

    #[wasm_bindgen(js_name = saveAnimation)]
    pub fn save_animation(&mut self, animation: JsValue) -> Result<(), JsError> {
        let animation: CustomAnimation = serde_wasm_bindgen::from_value(animation)
            .map_err(|e| JsError::new(&format!("Invalid animation: {}", e)))?;
        self.store.save_animation(animation).map_err(store_error)
    }

    #[wasm_bindgen(js_name = deleteAnimation)]
    pub fn delete_animation(&mut self, name: &str) -> bool {
        self.store.delete_animation(name)
    }

    /// Start previewing a saved animation. Returns a ticket to hand back to
    /// `expirePreview` after `ticket.expiresAfterMs`, or `null`.
    #[wasm_bindgen(js_name = previewAnimation)]
    pub fn preview_animation(&mut self, name: &str) -> Result<JsValue, JsError> {
        match self.store.preview_animation(name) {
            Some(ticket) => to_js(&ticket),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = expirePreview)]
    pub fn expire_preview(&mut self, ticket: JsValue) -> Result<bool, JsError> {
        let ticket: PreviewTicket = serde_wasm_bindgen::from_value(ticket)
            .map_err(|e| JsError::new(&format!("Invalid preview ticket: {}", e)))?;
        Ok(self.store.expire_preview(ticket))
    }

    #[wasm_bindgen(js_name = isPreviewing)]
    pub fn is_previewing(&self) -> bool {
        self.store.is_previewing()
    }

    /// Set the class and component names used by generated code.
    #[wasm_bindgen(js_name = setExportOptions)]
    pub fn set_export_options(&mut self, options: JsValue) -> Result<(), JsError> {
        let options: ExportOptionsJs = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid export options: {}", e)))?;
        self.export_options = options.into_core();
        Ok(())
    }

    /// Code for the active snapshot in one target syntax.
    #[wasm_bindgen(js_name = generateCode)]
    pub fn generate_code(&self, target: &str) -> Result<String, JsError> {
        let target = parse_target(target)?;
        Ok(self.store.generate_code(target, &self.export_options))
    }

    /// Code for every target with labels, languages and file names.
    #[wasm_bindgen(js_name = generateAll)]
    pub fn generate_all(&self) -> Result<JsValue, JsError> {
        let outputs: Vec<GeneratedCodeJs> = ExportTarget::ALL
            .into_iter()
            .map(|target| self.generated(target))
            .collect();
        to_js(&outputs)
    }

    #[wasm_bindgen(js_name = exportSettings)]
    pub fn export_settings(&self) -> Result<String, JsError> {
        self.store.export_settings().map_err(store_error)
    }

    #[wasm_bindgen(js_name = settingsFileName)]
    pub fn settings_file_name(&self) -> String {
        self.store.settings_file_name()
    }

    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self, base: &str) -> Result<String, JsError> {
        self.store.share_url(base).map_err(store_error)
    }

    /// Import a settings document. Returns the kind it was applied to.
    #[wasm_bindgen(js_name = importSettings)]
    pub fn import_settings(&mut self, text: &str) -> Result<String, JsError> {
        self.store
            .import_settings(text)
            .map(|kind| kind.to_string())
            .map_err(store_error)
    }

    #[wasm_bindgen(js_name = importShareUrl)]
    pub fn import_share_url(&mut self, url: &str) -> Result<String, JsError> {
        self.store
            .import_share_url(url)
            .map(|kind| kind.to_string())
            .map_err(store_error)
    }
}

impl WizardEngine {
    /// Create an engine over an explicit storage backend.
    pub fn with_storage(storage: BrowserStorage, config: StoreConfig) -> Self {
        Self {
            store: HistoryStore::open(storage, config),
            export_options: ExportOptions::default(),
        }
    }

    pub fn store(&self) -> &HistoryStore<BrowserStorage> {
        &self.store
    }

    fn history_info(&self) -> HistoryJs {
        let timeline = self.store.timeline();
        HistoryJs {
            cursor: timeline.cursor(),
            length: timeline.len(),
            can_undo: timeline.can_undo(),
            can_redo: timeline.can_redo(),
        }
    }

    fn generated(&self, target: ExportTarget) -> GeneratedCodeJs {
        GeneratedCodeJs {
            target: target.as_str().to_string(),
            label: target.label().to_string(),
            language: target.language().to_string(),
            file_name: target.file_name(self.store.kind(), &self.export_options),
            code: self.store.generate_code(target, &self.export_options),
        }
    }
}

impl Default for WizardEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_kind(kind: &str) -> Result<ComponentKind, JsError> {
    kind.parse::<ComponentKind>()
        .map_err(|e| JsError::new(&format!("{}", e)))
}

fn parse_target(target: &str) -> Result<ExportTarget, JsError> {
    target
        .parse::<ExportTarget>()
        .map_err(|e| JsError::new(&format!("{}", e)))
}

fn store_error(e: wizard_store::StoreError) -> JsError {
    JsError::new(&e.to_string())
}

/// Plain objects rather than `Map`s, so snapshots read like their JSON form.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn from_js(value: JsValue) -> Result<serde_json::Value, JsError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid value: {}", e)))
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_store::MemoryStorage;

    fn engine() -> WizardEngine {
        WizardEngine::with_storage(
            BrowserStorage::Memory(MemoryStorage::new()),
            StoreConfig::default(),
        )
    }

    #[test]
    fn test_engine_starts_on_button() {
        let engine = engine();
        assert_eq!(engine.component_kind(), "button");
        assert!(!engine.is_persistent());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_history_info() {
        let mut engine = engine();
        engine
            .store
            .update_state("text", serde_json::json!("Go"))
            .unwrap();
        let info = engine.history_info();
        assert_eq!(info.cursor, 1);
        assert_eq!(info.length, 2);
        assert!(info.can_undo);
        assert!(!info.can_redo);
        assert!(engine.undo());
        assert!(engine.can_redo());
    }

    #[test]
    fn test_generated_metadata() {
        let engine = engine();
        let output = engine.generated(ExportTarget::StyledComponents);
        assert_eq!(output.target, "styledComponents");
        assert_eq!(output.file_name, "CustomButton.styled.jsx");
        assert!(output.code.contains("styled.button"));
    }

    #[test]
    fn test_version() {
        let version = WizardEngine::version();
        assert!(!version.is_empty());
    }
}
