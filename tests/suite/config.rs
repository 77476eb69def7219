//! Settings persistence through the public store and the app.

use std::fs;

use crossterm::event::KeyCode;
use serde_json::{Value, json};
use tempfile::tempdir;

use tjd_core::{CONFIG_FILE_NAME, ConfigStore, ToolkitError};
use tjd_engine::{StatusKind, ThemeMode, ui_options_from_config};

use crate::common::{persisted_app, press};

fn read_document(dir: &std::path::Path) -> Value {
    let raw = fs::read_to_string(dir.join(CONFIG_FILE_NAME)).expect("read config");
    serde_json::from_str(&raw).expect("config is JSON")
}

#[test]
fn first_open_writes_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = ConfigStore::open(dir.path()).expect("open");

    assert!(!config.is_ephemeral());
    let doc = read_document(dir.path());
    assert_eq!(doc["theme"], json!("system"));
    assert_eq!(doc["tools"]["feature_eins"], json!(true));
    assert_eq!(doc["logging"]["max_log_size"], json!("10MB"));
}

#[test]
fn user_values_survive_and_missing_defaults_are_filled() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{ "theme": "dark", "ui": { "show_tooltips": false }, "custom": 7 }"#,
    )
    .expect("write");

    let config = ConfigStore::open(dir.path()).expect("open");

    assert_eq!(config.get_or("theme", String::new()), "dark");
    assert!(!config.get_or("ui.show_tooltips", true));
    assert!(config.get_or("ui.confirm_destructive_actions", false));
    assert_eq!(config.get_or("custom", 0), 7);
    assert!(config.has("window.width"));
}

#[test]
fn invalid_documents_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE_NAME);

    fs::write(&path, "{ not json").expect("write");
    assert!(matches!(
        ConfigStore::open(dir.path()),
        Err(ToolkitError::JsonParsing { .. })
    ));

    fs::write(&path, "[1, 2, 3]").expect("write");
    assert!(matches!(
        ConfigStore::open(dir.path()),
        Err(ToolkitError::Configuration { .. })
    ));
}

#[test]
fn edits_persist_across_reopen() {
    let dir = tempdir().expect("tempdir");
    {
        let mut config = ConfigStore::open(dir.path()).expect("open");
        config.set("ui.ascii_only", true).expect("set");
        config.set("profiles.work.browser", "firefox").expect("set");
        assert!(config.delete("auto_check_updates").expect("delete"));
    }

    let config = ConfigStore::open(dir.path()).expect("reopen");
    assert!(ui_options_from_config(&config).ascii_only);
    assert_eq!(
        config.get_or("profiles.work.browser", String::new()),
        "firefox"
    );
    // Deleted default keys come back through the merge.
    assert!(config.has("auto_check_updates"));
}

#[test]
fn setting_through_a_scalar_is_a_validation_error() {
    let mut config = ConfigStore::ephemeral();
    let err = config.set("theme.variant", "x").expect_err("theme is a string");
    assert!(matches!(err, ToolkitError::Validation { .. }));
    assert_eq!(config.get_or("theme", String::new()), "system");
}

#[test]
fn theme_key_cycles_and_persists() {
    let dir = tempdir().expect("tempdir");
    let now = std::time::Instant::now();
    {
        let mut app = persisted_app(dir.path(), &["apple"]);
        assert_eq!(app.ui_options().theme, ThemeMode::System);
        press(&mut app, &[KeyCode::Char('t')], now);
        assert_eq!(app.ui_options().theme, ThemeMode::Light);
        let status = app.status().expect("status");
        assert_eq!(status.kind, StatusKind::Info);
        assert_eq!(status.text, "Theme: light");
    }

    assert_eq!(read_document(dir.path())["theme"], json!("light"));
    let app = persisted_app(dir.path(), &["apple"]);
    assert_eq!(app.ui_options().theme, ThemeMode::Light);
}

#[test]
fn reset_asks_first_and_restores_defaults() {
    let dir = tempdir().expect("tempdir");
    let now = std::time::Instant::now();
    let mut app = persisted_app(dir.path(), &["apple"]);
    press(&mut app, &[KeyCode::Char('t'), KeyCode::Char('t')], now);
    assert_eq!(app.ui_options().theme, ThemeMode::Dark);

    press(&mut app, &[KeyCode::Char('r')], now);
    assert!(app.pending_confirm().is_some());
    press(&mut app, &[KeyCode::Char('n')], now);
    assert!(app.pending_confirm().is_none());
    assert_eq!(app.ui_options().theme, ThemeMode::Dark);

    press(&mut app, &[KeyCode::Char('r'), KeyCode::Char('y')], now);
    assert_eq!(app.ui_options().theme, ThemeMode::System);
    assert_eq!(read_document(dir.path())["theme"], json!("system"));
}
