//! The history store.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wizard_codegen::{generate, ExportOptions, ExportTarget};
use wizard_core::{
    find_theme, presets_for, AnimationRegistry, ComponentConfig, ComponentKind, ConfigError,
    CustomAnimation, Preset, Theme, ThemeRole,
};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::preview::{AnimationPreview, PreviewTicket};
use crate::storage::{keys, StateStorage};
use crate::timeline::HistoryTimeline;
use crate::transfer;

/// Owns the per-kind timelines and everything the wizard persists.
///
/// Every mutation either commits a complete new snapshot or returns an error
/// and leaves the store as it was. Persistence failures are logged and never
/// surface to callers.
pub struct HistoryStore<S: StateStorage> {
    storage: S,
    config: StoreConfig,
    kind: ComponentKind,
    timelines: IndexMap<ComponentKind, HistoryTimeline>,
    recent: Vec<ComponentKind>,
    custom_presets: Vec<Preset>,
    selected_theme: Option<Theme>,
    animations: AnimationRegistry,
    preview: AnimationPreview,
}

impl<S: StateStorage> HistoryStore<S> {
    /// Hydrate a store from `storage`. Unreadable keys fall back to their
    /// defaults; this never fails.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let states: IndexMap<ComponentKind, Vec<ComponentConfig>> =
            load(&storage, keys::COMPONENT_STATES).unwrap_or_default();
        let indices: IndexMap<ComponentKind, usize> =
            load(&storage, keys::CURRENT_INDICES).unwrap_or_default();

        let mut timelines = IndexMap::new();
        for (kind, entries) in states {
            if let Some(mismatch) = entries.iter().find(|entry| entry.kind() != kind) {
                tracing::warn!(
                    %kind,
                    found = %mismatch.kind(),
                    "persisted history holds another kind, using default"
                );
                continue;
            }
            let cursor = indices.get(&kind).copied().unwrap_or(entries.len().saturating_sub(1));
            if let Some(timeline) = HistoryTimeline::from_parts(entries, cursor) {
                timelines.insert(kind, timeline);
            }
        }

        let kind = load(&storage, keys::LAST_COMPONENT_TYPE).unwrap_or(ComponentKind::Button);
        let mut recent: Vec<ComponentKind> =
            load(&storage, keys::RECENTLY_USED).unwrap_or_default();
        recent.truncate(config.max_recent);

        let mut custom_presets: Vec<Preset> =
            load(&storage, keys::CUSTOM_PRESETS).unwrap_or_default();
        custom_presets.retain(|preset| preset.validate().is_ok());

        let selected_theme = load(&storage, keys::SELECTED_THEME);
        let animations = load(&storage, keys::CUSTOM_ANIMATIONS).unwrap_or_default();

        let mut store = Self {
            storage,
            config,
            kind,
            timelines,
            recent,
            custom_presets,
            selected_theme,
            animations,
            preview: AnimationPreview::new(),
        };
        store.ensure_timeline(kind);
        tracing::debug!(
            kind = %store.kind,
            timelines = store.timelines.len(),
            presets = store.custom_presets.len(),
            animations = store.animations.len(),
            "history store hydrated"
        );
        store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The active component kind.
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// The active snapshot.
    pub fn current(&self) -> &ComponentConfig {
        self.active().current()
    }

    /// The active kind's timeline.
    pub fn timeline(&self) -> &HistoryTimeline {
        self.active()
    }

    /// Kinds in most-recently-activated order.
    pub fn recently_used(&self) -> &[ComponentKind] {
        &self.recent
    }

    /// Switch the active kind, seeding its timeline on first use.
    pub fn set_component_kind(&mut self, kind: ComponentKind) {
        let created = self.ensure_timeline(kind);
        self.kind = kind;

        self.recent.retain(|k| *k != kind);
        self.recent.insert(0, kind);
        self.recent.truncate(self.config.max_recent);

        save(&mut self.storage, keys::LAST_COMPONENT_TYPE, &kind);
        save(&mut self.storage, keys::RECENTLY_USED, &self.recent);
        if created {
            self.persist_history();
        }
        tracing::debug!(%kind, "component kind selected");
    }

    /// Append a snapshot of the active kind to its timeline.
    pub fn commit(&mut self, snapshot: ComponentConfig) -> Result<()> {
        if snapshot.kind() != self.kind {
            return Err(ConfigError::KindMismatch {
                from: self.kind,
                to: snapshot.kind(),
            }
            .into());
        }
        let limit = self.config.history_limit;
        let timeline = self.active_mut();
        timeline.commit(snapshot, limit);
        tracing::debug!(
            kind = %self.kind,
            cursor = self.active().cursor(),
            len = self.active().len(),
            "committed snapshot"
        );
        self.persist_history();
        Ok(())
    }

    /// Derive a snapshot from the current one and commit it.
    pub fn commit_with<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&ComponentConfig) -> wizard_core::Result<ComponentConfig>,
    {
        let next = edit(self.current())?;
        self.commit(next)
    }

    /// Replace one top-level field.
    pub fn update_state(&mut self, field: &str, value: Value) -> Result<()> {
        self.commit_with(|current| current.with_field(field, value))
    }

    /// Replace one entry of the `style` section.
    pub fn update_style(&mut self, property: &str, value: Value) -> Result<()> {
        self.commit_with(|current| current.with_style(property, value))
    }

    /// Replace one key inside a nested section such as `hoverStyle`.
    pub fn update_nested_state(&mut self, section: &str, key: &str, value: Value) -> Result<()> {
        self.commit_with(|current| current.with_nested(section, key, value))
    }

    /// Merge a preset, switching to its kind first when needed.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<()> {
        preset.validate()?;
        let next = preset.apply_to(&self.snapshot_for(preset.component_type))?;
        if preset.component_type != self.kind {
            self.set_component_kind(preset.component_type);
        }
        self.commit(next)?;
        tracing::debug!(preset = %preset.name, kind = %self.kind, "preset applied");
        Ok(())
    }

    /// Recolor the active snapshot from a theme role and remember the theme.
    pub fn apply_theme(&mut self, theme: &Theme, role: ThemeRole) -> Result<()> {
        self.commit_with(|current| {
            let mut next = current.clone();
            theme.apply_to(&mut next, role);
            Ok(next)
        })?;
        self.selected_theme = Some(theme.clone());
        save(&mut self.storage, keys::SELECTED_THEME, theme);
        Ok(())
    }

    /// [`apply_theme`](Self::apply_theme) with a built-in theme looked up by name.
    pub fn apply_theme_named(&mut self, name: &str, role: ThemeRole) -> Result<()> {
        let theme = find_theme(name)
            .ok_or_else(|| StoreError::validation(format!("unknown theme '{}'", name)))?;
        self.apply_theme(&theme, role)
    }

    pub fn selected_theme(&self) -> Option<&Theme> {
        self.selected_theme.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.active().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.active().can_redo()
    }

    /// Step back in the active timeline. No-op at the start.
    pub fn undo(&mut self) -> bool {
        let moved = self.active_mut().undo();
        if moved {
            self.persist_history();
        }
        moved
    }

    /// Step forward in the active timeline. No-op at the end.
    pub fn redo(&mut self) -> bool {
        let moved = self.active_mut().redo();
        if moved {
            self.persist_history();
        }
        moved
    }

    /// Move to an entry of the active timeline; out-of-range is ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let moved = self.active_mut().jump_to(index);
        if moved {
            self.persist_history();
        }
        moved
    }

    /// Replace the active timeline with the default snapshot alone.
    pub fn reset_to_default(&mut self) {
        let kind = self.kind;
        self.active_mut().reset(ComponentConfig::default_for(kind));
        tracing::debug!(%kind, "history reset");
        self.persist_history();
    }

    pub fn custom_presets(&self) -> &[Preset] {
        &self.custom_presets
    }

    /// Built-in then custom presets for a kind.
    pub fn presets_for(&self, kind: ComponentKind) -> Vec<Preset> {
        let mut presets = presets_for(kind);
        presets.extend(
            self.custom_presets
                .iter()
                .filter(|preset| preset.component_type == kind)
                .cloned(),
        );
        presets
    }

    /// Store a custom preset, replacing one with the same name and kind.
    pub fn save_preset(&mut self, preset: Preset) -> Result<()> {
        preset.validate()?;
        match self
            .custom_presets
            .iter_mut()
            .find(|p| p.name == preset.name && p.component_type == preset.component_type)
        {
            Some(existing) => *existing = preset,
            None => self.custom_presets.push(preset),
        }
        save(&mut self.storage, keys::CUSTOM_PRESETS, &self.custom_presets);
        Ok(())
    }

    /// Remove custom presets named `name`. Returns whether any existed.
    pub fn delete_preset(&mut self, name: &str) -> bool {
        let before = self.custom_presets.len();
        self.custom_presets.retain(|preset| preset.name != name);
        let removed = self.custom_presets.len() != before;
        if removed {
            save(&mut self.storage, keys::CUSTOM_PRESETS, &self.custom_presets);
        }
        removed
    }

    pub fn animations(&self) -> &AnimationRegistry {
        &self.animations
    }

    pub fn animation(&self, name: &str) -> Option<&CustomAnimation> {
        self.animations.get(name)
    }

    /// Validate and store a custom animation under its name.
    pub fn save_animation(&mut self, animation: CustomAnimation) -> Result<()> {
        self.animations.register(animation)?;
        save(&mut self.storage, keys::CUSTOM_ANIMATIONS, &self.animations);
        Ok(())
    }

    pub fn delete_animation(&mut self, name: &str) -> bool {
        let removed = self.animations.remove(name).is_some();
        if removed {
            save(&mut self.storage, keys::CUSTOM_ANIMATIONS, &self.animations);
        }
        removed
    }

    /// The custom animation the active snapshot refers to, if stored.
    pub fn resolved_animation(&self) -> Option<&CustomAnimation> {
        let name = self.current().as_button()?.custom_animation_name.as_deref()?;
        self.animations.get(name)
    }

    /// Start previewing a stored animation. `None` if it is unknown.
    pub fn preview_animation(&mut self, name: &str) -> Option<PreviewTicket> {
        let duration = self.animations.get(name)?.duration;
        Some(self.preview.trigger(duration, 0.0))
    }

    /// Hand back a preview ticket when its timer fires.
    pub fn expire_preview(&mut self, ticket: PreviewTicket) -> bool {
        self.preview.expire(ticket)
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_playing()
    }

    /// Generated code for the active snapshot.
    pub fn generate_code(&self, target: ExportTarget, options: &ExportOptions) -> String {
        generate(target, Some(self.current()), self.resolved_animation(), options)
    }

    /// The active snapshot as a settings document.
    pub fn export_settings(&self) -> Result<String> {
        transfer::export_settings(self.current())
    }

    pub fn settings_file_name(&self) -> String {
        transfer::settings_file_name(self.kind)
    }

    /// A link carrying the active snapshot.
    pub fn share_url(&self, base: &str) -> Result<String> {
        transfer::share_url(base, &self.config.share_param, self.current())
    }

    /// Merge a settings document into its kind's current snapshot, switching
    /// to that kind, and commit the result as one entry.
    pub fn import_settings(&mut self, text: &str) -> Result<ComponentKind> {
        let (kind, document) = transfer::validate_import(text)?;
        let next = self.snapshot_for(kind).merged_deep(&document)?;
        if kind != self.kind {
            self.set_component_kind(kind);
        }
        self.commit(next)?;
        tracing::debug!(%kind, "settings imported");
        Ok(kind)
    }

    /// Import the settings carried by a share URL.
    pub fn import_share_url(&mut self, url: &str) -> Result<ComponentKind> {
        let value = transfer::find_query_param(url, &self.config.share_param).ok_or_else(|| {
            StoreError::validation(format!(
                "url has no '{}' parameter",
                self.config.share_param
            ))
        })?;
        let text = transfer::decode_share_value(value)?;
        self.import_settings(&text)
    }

    fn active(&self) -> &HistoryTimeline {
        &self.timelines[&self.kind]
    }

    fn active_mut(&mut self) -> &mut HistoryTimeline {
        let kind = self.kind;
        self.timelines
            .entry(kind)
            .or_insert_with(|| HistoryTimeline::new(ComponentConfig::default_for(kind)))
    }

    /// Seed a timeline for `kind` if there is none. Returns whether one was created.
    fn ensure_timeline(&mut self, kind: ComponentKind) -> bool {
        if self.timelines.contains_key(&kind) {
            return false;
        }
        self.timelines
            .insert(kind, HistoryTimeline::new(ComponentConfig::default_for(kind)));
        true
    }

    fn snapshot_for(&self, kind: ComponentKind) -> ComponentConfig {
        self.timelines
            .get(&kind)
            .map(|timeline| timeline.current().clone())
            .unwrap_or_else(|| ComponentConfig::default_for(kind))
    }

    fn persist_history(&mut self) {
        let states: IndexMap<ComponentKind, &[ComponentConfig]> = self
            .timelines
            .iter()
            .map(|(kind, timeline)| (*kind, timeline.entries()))
            .collect();
        let indices: IndexMap<ComponentKind, usize> = self
            .timelines
            .iter()
            .map(|(kind, timeline)| (*kind, timeline.cursor()))
            .collect();
        save(&mut self.storage, keys::COMPONENT_STATES, &states);
        save(&mut self.storage, keys::CURRENT_INDICES, &indices);
    }
}

fn load<T: DeserializeOwned>(storage: &impl StateStorage, key: &str) -> Option<T> {
    let text = match storage.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted state, using default");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to parse persisted state, using default");
            None
        }
    }
}

fn save<T: Serialize + ?Sized>(storage: &mut impl StateStorage, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|text| storage.set(key, &text));
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "failed to persist state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use wizard_core::StyleProperty;

    fn open() -> HistoryStore<MemoryStorage> {
        HistoryStore::open(MemoryStorage::new(), StoreConfig::default())
    }

    #[test]
    fn test_open_empty_defaults_to_button() {
        let store = open();
        assert_eq!(store.kind(), ComponentKind::Button);
        assert_eq!(store.current(), &ComponentConfig::default_for(ComponentKind::Button));
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_update_style_keeps_other_entries() {
        let mut store = open();
        store.set_component_kind(ComponentKind::Card);
        let before = store.current().as_card().unwrap().clone();
        store.update_style("color", json!("#fff")).unwrap();

        let after = store.current().as_card().unwrap();
        assert_eq!(after.style.get(StyleProperty::Color), Some("#fff"));
        assert_eq!(
            after.style.get(StyleProperty::BackgroundColor),
            before.style.get(StyleProperty::BackgroundColor)
        );
        assert_eq!(after.hover_style, before.hover_style);
        assert_eq!(store.timeline().len(), 2);
    }

    #[test]
    fn test_rejected_edit_leaves_state() {
        let mut store = open();
        assert!(store.update_state("noSuchField", json!(1)).is_err());
        assert!(store.update_state("text", json!(42)).is_err());
        assert_eq!(store.timeline().len(), 1);
    }

    #[test]
    fn test_commit_wrong_kind_rejected() {
        let mut store = open();
        let card = ComponentConfig::default_for(ComponentKind::Card);
        assert!(matches!(
            store.commit(card),
            Err(StoreError::Config(ConfigError::KindMismatch { .. }))
        ));
    }

    #[test]
    fn test_timelines_are_per_kind() {
        let mut store = open();
        store.update_state("text", json!("First")).unwrap();
        store.set_component_kind(ComponentKind::Card);
        assert_eq!(store.timeline().len(), 1);
        store.set_component_kind(ComponentKind::Button);
        assert_eq!(store.timeline().len(), 2);
        assert_eq!(store.current().as_button().unwrap().text, "First");
    }

    #[test]
    fn test_recently_used() {
        let mut store = HistoryStore::open(
            MemoryStorage::new(),
            StoreConfig::default().with_max_recent(2),
        );
        store.set_component_kind(ComponentKind::Card);
        store.set_component_kind(ComponentKind::Button);
        store.set_component_kind(ComponentKind::Card);
        assert_eq!(
            store.recently_used(),
            &[ComponentKind::Card, ComponentKind::Button]
        );
    }

    #[test]
    fn test_state_survives_reopen() {
        let mut store = open();
        store.set_component_kind(ComponentKind::Card);
        store.update_state("headerTitle", json!("Persisted")).unwrap();
        store.update_state("headerTitle", json!("Undone")).unwrap();
        store.undo();
        store
            .save_preset(Preset::new("Mine", "Custom", ComponentKind::Card, json!({})))
            .unwrap();

        let store = HistoryStore::open(store.into_storage(), StoreConfig::default());
        assert_eq!(store.kind(), ComponentKind::Card);
        assert_eq!(store.timeline().len(), 3);
        assert_eq!(store.timeline().cursor(), 1);
        assert!(store.can_redo());
        assert_eq!(store.current().as_card().unwrap().header_title, "Persisted");
        assert_eq!(store.custom_presets().len(), 1);
        assert_eq!(store.recently_used(), &[ComponentKind::Card]);
    }

    #[test]
    fn test_corrupt_keys_fall_back() {
        let mut storage = MemoryStorage::new();
        storage.set(keys::COMPONENT_STATES, "{not json").unwrap();
        storage.set(keys::CURRENT_INDICES, r#"{"button": 7}"#).unwrap();
        storage.set(keys::LAST_COMPONENT_TYPE, r#""slider""#).unwrap();
        storage.set(keys::CUSTOM_PRESETS, "42").unwrap();

        let store = HistoryStore::open(storage, StoreConfig::default());
        assert_eq!(store.kind(), ComponentKind::Button);
        assert_eq!(store.timeline().len(), 1);
        assert!(store.custom_presets().is_empty());
    }

    #[test]
    fn test_cursor_clamped_on_load() {
        let mut storage = MemoryStorage::new();
        let states = json!({ "button": [ComponentConfig::default_for(ComponentKind::Button)] });
        storage.set(keys::COMPONENT_STATES, &states.to_string()).unwrap();
        storage.set(keys::CURRENT_INDICES, r#"{"button": 7}"#).unwrap();

        let store = HistoryStore::open(storage, StoreConfig::default());
        assert_eq!(store.timeline().cursor(), 0);
    }

    #[test]
    fn test_apply_preset_switches_kind() {
        let mut store = open();
        store.set_component_kind(ComponentKind::Card);
        store.update_state("headerTitle", json!("Kept")).unwrap();
        store.set_component_kind(ComponentKind::Button);

        let preset = Preset::new(
            "Wide",
            "Layout",
            ComponentKind::Card,
            json!({ "bodyContent": "From preset" }),
        );
        store.apply_preset(&preset).unwrap();
        assert_eq!(store.kind(), ComponentKind::Card);
        let card = store.current().as_card().unwrap();
        assert_eq!(card.header_title, "Kept");
        assert_eq!(card.body_content, "From preset");
        assert_eq!(store.timeline().len(), 3);
    }

    #[test]
    fn test_bad_preset_does_not_switch_kind() {
        let mut store = open();
        let preset = Preset::new("Broken", "X", ComponentKind::Card, json!({ "headerTitle": 3 }));
        assert!(store.apply_preset(&preset).is_err());
        assert_eq!(store.kind(), ComponentKind::Button);
    }

    #[test]
    fn test_preset_management() {
        let mut store = open();
        assert!(store
            .save_preset(Preset::new(" ", "X", ComponentKind::Button, json!({})))
            .is_err());

        let builtin = store.presets_for(ComponentKind::Button).len();
        store
            .save_preset(Preset::new("Mine", "A", ComponentKind::Button, json!({})))
            .unwrap();
        store
            .save_preset(Preset::new("Mine", "B", ComponentKind::Button, json!({})))
            .unwrap();
        assert_eq!(store.custom_presets().len(), 1);
        assert_eq!(store.custom_presets()[0].category, "B");
        assert_eq!(store.presets_for(ComponentKind::Button).len(), builtin + 1);

        assert!(store.delete_preset("Mine"));
        assert!(!store.delete_preset("Mine"));
    }

    #[test]
    fn test_apply_theme_named() {
        let mut store = open();
        let theme = wizard_core::builtin_themes().remove(1);
        store.apply_theme_named(&theme.name, ThemeRole::Danger).unwrap();
        let button = store.current().as_button().unwrap();
        assert_eq!(button.background_color, theme.danger.base);
        assert_eq!(store.selected_theme().map(|t| t.name.as_str()), Some(theme.name.as_str()));
        assert!(store.apply_theme_named("Nope", ThemeRole::Primary).is_err());
    }

    #[test]
    fn test_animations_and_codegen() {
        let mut store = open();
        let mut animation = CustomAnimation::default();
        animation.name = "wiggle".to_string();
        store.save_animation(animation).unwrap();

        store.update_state("animation", json!("custom")).unwrap();
        store
            .update_state("customAnimationName", json!("wiggle"))
            .unwrap();
        assert_eq!(store.resolved_animation().map(|a| a.name.as_str()), Some("wiggle"));

        let css = store.generate_code(ExportTarget::Css, &ExportOptions::default());
        assert!(css.contains("@keyframes wiggle"));

        let ticket = store.preview_animation("wiggle").unwrap();
        assert!(store.is_previewing());
        assert!(store.expire_preview(ticket));
        assert!(store.preview_animation("missing").is_none());

        assert!(store.delete_animation("wiggle"));
        assert!(store.resolved_animation().is_none());
    }

    #[test]
    fn test_import_share_url() {
        let mut source = open();
        source.update_state("text", json!("Shared")).unwrap();
        let url = source.share_url("https://example.com/").unwrap();

        let mut store = open();
        assert_eq!(store.import_share_url(&url).unwrap(), ComponentKind::Button);
        assert_eq!(store.current().as_button().unwrap().text, "Shared");
        assert!(store.import_share_url("https://example.com/").is_err());
    }

    #[test]
    fn test_history_limit() {
        let mut store = HistoryStore::open(
            MemoryStorage::new(),
            StoreConfig::default().with_history_limit(3),
        );
        for i in 0..5 {
            store.update_state("text", json!(format!("v{}", i))).unwrap();
        }
        assert_eq!(store.timeline().len(), 3);
        assert_eq!(store.timeline().cursor(), 2);
        assert_eq!(store.current().as_button().unwrap().text, "v4");
    }
}
