//! Behavioral tests for the history store.

use proptest::prelude::*;
use serde_json::json;
use wizard_core::{
    builtin_themes, ButtonAnimation, ButtonShape, ComponentConfig, ComponentKind, IconPosition,
    StyleProperty, ThemeRole,
};
use wizard_codegen::{ExportOptions, ExportTarget};
use wizard_store::{HistoryStore, MemoryStorage, StateStorage, StoreConfig, StoreError};

fn open() -> HistoryStore<MemoryStorage> {
    HistoryStore::open(MemoryStorage::new(), StoreConfig::default())
}

fn button_text<S: StateStorage>(store: &HistoryStore<S>) -> String {
    store.current().as_button().unwrap().text.clone()
}

proptest! {
    #[test]
    fn commits_extend_history_linearly(texts in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 0..20)) {
        let mut store = open();
        for text in &texts {
            store.update_state("text", json!(text)).unwrap();
        }
        prop_assert_eq!(store.timeline().len(), texts.len() + 1);
        prop_assert_eq!(store.timeline().cursor(), texts.len());
        let expected = texts.last().cloned().unwrap_or_else(|| "Button".to_string());
        prop_assert_eq!(button_text(&store), expected);
    }

    #[test]
    fn undo_then_redo_restores_snapshot(count in 1usize..10, back in 0usize..12) {
        let mut store = open();
        for i in 0..count {
            store.update_state("text", json!(format!("v{}", i))).unwrap();
        }
        let latest = store.current().clone();

        let steps = back.min(count);
        for _ in 0..back {
            store.undo();
        }
        prop_assert_eq!(store.timeline().cursor(), count - steps);
        prop_assert_eq!(store.can_undo(), count - steps > 0);
        prop_assert!(store.can_redo() || steps == 0);

        for _ in 0..back {
            store.redo();
        }
        prop_assert_eq!(store.current(), &latest);
        prop_assert!(!store.can_redo());
    }
}

#[test]
fn commit_after_undo_truncates_branch() {
    let mut store = open();
    store.update_state("text", json!("B")).unwrap();
    store.update_state("text", json!("C")).unwrap();
    assert_eq!(store.timeline().cursor(), 2);
    assert_eq!(store.timeline().len(), 3);

    store.undo();
    store.undo();
    assert_eq!(store.timeline().cursor(), 0);

    store.update_state("text", json!("D")).unwrap();
    assert_eq!(store.timeline().len(), 2);
    assert_eq!(store.timeline().cursor(), 1);
    assert_eq!(button_text(&store), "D");
    assert!(store
        .timeline()
        .entries()
        .iter()
        .all(|entry| !["B", "C"].contains(&entry.as_button().unwrap().text.as_str())));
}

#[test]
fn reset_discards_history() {
    let mut store = open();
    for text in ["a", "b", "c"] {
        store.update_state("text", json!(text)).unwrap();
    }
    store.undo();
    store.reset_to_default();
    assert_eq!(store.timeline().len(), 1);
    assert_eq!(store.timeline().cursor(), 0);
    assert_eq!(store.current(), &ComponentConfig::default_for(ComponentKind::Button));
}

#[test]
fn undo_and_redo_are_noops_at_the_ends() {
    let mut store = open();
    assert!(!store.undo());
    assert!(!store.redo());
    store.update_state("text", json!("x")).unwrap();
    assert!(!store.redo());
    assert!(store.undo());
    assert!(!store.undo());
}

#[test]
fn malformed_import_is_rejected_without_change() {
    let mut store = open();
    store.update_state("text", json!("Keep")).unwrap();
    let before = store.timeline().clone();

    let err = store.import_settings(r#"{"foo":"bar"}"#).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.timeline(), &before);
    assert_eq!(store.kind(), ComponentKind::Button);
}

#[test]
fn card_import_switches_kind_and_applies_fields() {
    let mut store = open();
    let document = json!({
        "componentType": "card",
        "headerTitle": "Imported",
        "showFooter": false,
        "isHoverable": true,
        "style": { "paddingTop": "32px", "backgroundColor": "#101010" }
    });

    let kind = store.import_settings(&document.to_string()).unwrap();
    assert_eq!(kind, ComponentKind::Card);
    assert_eq!(store.kind(), ComponentKind::Card);

    let card = store.current().as_card().unwrap();
    assert_eq!(card.header_title, "Imported");
    assert!(!card.show_footer);
    assert!(card.is_hoverable);
    assert_eq!(card.style.get(wizard_core::StyleProperty::PaddingTop), Some("32px"));
    assert_eq!(
        card.style.get(wizard_core::StyleProperty::BackgroundColor),
        Some("#101010")
    );
}

#[test]
fn export_then_import_round_trips() {
    let mut source = open();
    source.set_component_kind(ComponentKind::Card);
    source.update_state("headerTitle", json!("Round trip")).unwrap();
    let text = source.export_settings().unwrap();
    assert_eq!(source.settings_file_name(), "card-settings.json");

    let mut target = open();
    target.import_settings(&text).unwrap();
    assert_eq!(target.current(), source.current());
}

#[test]
fn theme_changes_only_colors() {
    let mut store = open();
    store.update_state("text", json!("Themed")).unwrap();
    store.update_state("iconName", json!("arrow")).unwrap();
    store.update_state("iconPosition", json!("right")).unwrap();
    store.update_state("animation", json!("pulse")).unwrap();
    store.update_state("shape", json!("pill")).unwrap();
    let before = store.current().as_button().unwrap().clone();

    let theme = builtin_themes().remove(1);
    store.apply_theme(&theme, ThemeRole::Success).unwrap();
    let after = store.current().as_button().unwrap();

    assert_eq!(after.background_color, theme.success.base);
    assert_eq!(after.hover_background_color, theme.success.hover);
    assert_eq!(after.text_color, theme.success.text);
    assert_eq!(after.text_hover_color, theme.success.text);
    assert_eq!(after.border_radius.as_deref(), Some(theme.border_radius.pill.as_str()));

    assert_eq!(after.text, before.text);
    assert_eq!(after.icon_name, before.icon_name);
    assert_eq!(after.icon_position, IconPosition::Right);
    assert_eq!(after.animation, ButtonAnimation::Pulse);
    assert_eq!(after.shape, ButtonShape::Pill);
    assert_eq!(after.padding_x, before.padding_x);
}

#[test]
fn square_buttons_keep_their_radius_under_a_theme() {
    let mut store = open();
    store.update_state("shape", json!("square")).unwrap();
    let theme = builtin_themes().remove(0);
    store.apply_theme(&theme, ThemeRole::Primary).unwrap();
    assert_eq!(store.current().as_button().unwrap().border_radius, None);
}

#[test]
fn shape_edit_after_theme_uses_new_shape_radius() {
    let mut store = open();
    let theme = builtin_themes().remove(0);
    store.apply_theme(&theme, ThemeRole::Primary).unwrap();
    assert!(store.current().as_button().unwrap().border_radius.is_some());

    store.update_state("shape", json!("pill")).unwrap();
    let options = ExportOptions::default();
    let css = store.generate_code(ExportTarget::Css, &options);
    assert!(css.contains("border-radius: 9999px;"));
    let tailwind = store.generate_code(ExportTarget::Tailwind, &options);
    assert!(tailwind.contains("rounded-full"));

    store.update_state("shape", json!("square")).unwrap();
    let css = store.generate_code(ExportTarget::Css, &options);
    assert!(css.contains("border-radius: 0;"));
}

#[test]
fn numeric_style_values_are_kept_as_text() {
    let mut store = open();
    store.update_style("opacity", json!(0.5)).unwrap();
    assert_eq!(
        store.current().as_button().unwrap().style.get(StyleProperty::Opacity),
        Some("0.5")
    );

    let kind = store
        .import_settings(r#"{"componentType":"card","style":{"fontWeight":600}}"#)
        .unwrap();
    assert_eq!(kind, ComponentKind::Card);
    let card = store.current().as_card().unwrap();
    assert_eq!(card.style.get(StyleProperty::FontWeight), Some("600"));
}

#[test]
fn file_storage_restores_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard-state.json");
    {
        let storage = wizard_store::JsonFileStorage::open(&path).unwrap();
        let mut store = HistoryStore::open(storage, StoreConfig::default());
        store.update_state("text", json!("On disk")).unwrap();
    }
    let storage = wizard_store::JsonFileStorage::open(&path).unwrap();
    let store = HistoryStore::open(storage, StoreConfig::default());
    assert_eq!(button_text(&store), "On disk");
    assert!(store.can_undo());
}
