//! Unit tests for the RPC handler: the JSON-RPC methods dispatched by
//! `handle_method` and `handle_request`.
//!
//! These tests go through the same code path as the `tabspace-rpc` binary,
//! with settings stored in a temporary directory and jitter disabled.

use std::sync::Mutex;

use serde_json::json;
use tempfile::TempDir;

use tabspace::app::App;
use tabspace::managers::tab_store::{NoJitter, TabStoreTrait};
use tabspace::rpc_handler::{handle_method, handle_request};
use tabspace::services::settings_engine::SettingsEngine;

/// Create a fresh App whose settings live in a temp directory.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let app = app_at(&tmp);
    (app, tmp)
}

/// Open an App on the settings file inside `dir`.
fn app_at(dir: &TempDir) -> Mutex<App> {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load_or_default();
    Mutex::new(App::with_parts(engine, Box::new(NoJitter)))
}

fn create(app: &Mutex<App>, url: &str) -> String {
    let res = handle_method(app, "tab.create", &json!({"url": url})).unwrap();
    res["id"].as_str().unwrap().to_string()
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

// ─── Unknown method ───

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Tabs ───

#[test]
fn test_tab_create_and_list() {
    let (app, _tmp) = setup();

    let res = handle_method(&app, "tab.create", &json!({"url": "https://github.com"})).unwrap();
    assert_eq!(res["url"], "https://github.com");
    assert_eq!(res["title"], "github.com");
    assert!(res["createdAt"].as_i64().unwrap() > 0);
    assert_eq!(res["position"], json!({"x": 200.0, "y": 200.0}));

    let blank = handle_method(&app, "tab.create", &json!({})).unwrap();
    assert_eq!(blank["url"], "about:blank");
    assert_eq!(blank["title"], "New Tab");

    let list = handle_method(&app, "tab.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 2);

    let active = handle_method(&app, "tab.active", &json!({})).unwrap();
    assert_eq!(active["id"], blank["id"]);
}

#[test]
fn test_tab_switch_and_close() {
    let (app, _tmp) = setup();
    let a = create(&app, "https://a.example");
    let b = create(&app, "https://b.example");

    let res = handle_method(&app, "tab.switch", &json!({"id": a})).unwrap();
    assert_eq!(res, json!({"ok": true, "activeTabId": a}));

    let res = handle_method(&app, "tab.close", &json!({"id": a})).unwrap();
    assert_eq!(res, json!({"ok": true, "activeTabId": b}));

    let res = handle_method(&app, "tab.close", &json!({"id": "missing"})).unwrap();
    assert_eq!(res["ok"], false);

    let res = handle_method(&app, "tab.close", &json!({"id": b})).unwrap();
    assert_eq!(res, json!({"ok": true, "activeTabId": null}));
    assert_eq!(handle_method(&app, "tab.active", &json!({})).unwrap(), json!(null));
}

#[test]
fn test_tab_move_clamps_position() {
    let (app, _tmp) = setup();
    let id = create(&app, "https://a.example");

    let res = handle_method(&app, "tab.move", &json!({"id": id, "x": -500.0, "y": 99999.0})).unwrap();
    assert_eq!(res["ok"], true);
    // Default workspace 1280x800, margins 20, tab 120x120.
    assert_eq!(res["position"], json!({"x": 20.0, "y": 660.0}));

    let res = handle_method(&app, "tab.move", &json!({"id": "missing", "x": 1.0, "y": 1.0})).unwrap();
    assert_eq!(res, json!({"ok": false, "position": null}));

    assert!(handle_method(&app, "tab.move", &json!({"id": id, "x": 1.0})).is_err());
}

#[test]
fn test_tab_navigate_and_update_metadata() {
    let (app, _tmp) = setup();
    let id = create(&app, "about:blank");

    let res = handle_method(&app, "tab.navigate", &json!({"id": id, "url": "https://youtube.com"})).unwrap();
    assert_eq!(res["ok"], true);

    let res = handle_method(
        &app,
        "tab.update_metadata",
        &json!({"id": id, "patch": {"bookmarked": true, "note": "later"}}),
    )
    .unwrap();
    assert_eq!(res["ok"], true);
    handle_method(&app, "tab.update_metadata", &json!({"id": id, "patch": {"note": null}})).unwrap();

    let tab = handle_method(&app, "tab.active", &json!({})).unwrap();
    assert_eq!(tab["url"], "https://youtube.com");
    assert_eq!(tab["title"], "youtube.com");
    assert_eq!(tab["metadata"], json!({"bookmarked": true}));

    assert!(handle_method(&app, "tab.update_metadata", &json!({"id": id})).is_err());
}

// ─── Workspace & view ───

#[test]
fn test_workspace_resize_validates_size() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "workspace.resize", &json!({"width": 800.0, "height": 600.0})).unwrap();
    assert_eq!(res["size"], json!({"width": 800.0, "height": 600.0}));

    let err = handle_method(&app, "workspace.resize", &json!({"width": 0.0, "height": 600.0})).unwrap_err();
    assert!(err.contains("invalid size"));
}

#[test]
fn test_view_set_and_project() {
    let (app, _tmp) = setup();
    create(&app, "https://github.com");
    create(&app, "https://youtube.com");
    create(&app, "https://gitlab.com");

    let view = handle_method(&app, "view.set", &json!({"searchTerm": "git", "viewMode": "groups"})).unwrap();
    assert_eq!(view["searchTerm"], "git");

    let projected = handle_method(&app, "view.project", &json!({})).unwrap();
    assert_eq!(projected["visibleTabs"].as_array().unwrap().len(), 2);
    assert_eq!(projected["totalTabs"], 3);
    assert_eq!(projected["viewMode"], "groups");
    assert_eq!(projected["groups"][0]["category"], "work");

    assert!(handle_method(&app, "view.set", &json!({"filterBy": "starred"})).is_err());
}

#[test]
fn test_view_project_recent_filter_uses_supplied_now() {
    let (app, _tmp) = setup();
    create(&app, "https://github.com");
    handle_method(&app, "view.set", &json!({"filterBy": "recent"})).unwrap();

    let far_future = 4_000_000_000i64;
    let projected = handle_method(&app, "view.project", &json!({"now": far_future})).unwrap();
    assert!(projected["visibleTabs"].as_array().unwrap().is_empty());
}

#[test]
fn test_layout_apply() {
    let (app, _tmp) = setup();
    for _ in 0..4 {
        create(&app, "https://example.org");
    }
    let tabs = handle_method(&app, "layout.apply", &json!({"strategy": "grid"})).unwrap();
    let tabs = tabs.as_array().unwrap();
    assert_eq!(tabs[0]["position"], json!({"x": 100.0, "y": 100.0}));
    assert_eq!(tabs[2]["position"]["y"], 280.0);

    let err = handle_method(&app, "layout.apply", &json!({"strategy": "hexagon"})).unwrap_err();
    assert!(err.contains("unknown layout"));
}

// ─── Shortcuts ───

#[test]
fn test_shortcut_dispatch() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "shortcut.dispatch", &json!({"keys": "Ctrl+T"})).unwrap();
    assert_eq!(res, json!({"command": {"command": "new_tab"}, "applied": true}));

    let res = handle_method(&app, "shortcut.dispatch", &json!({"keys": "Ctrl+Shift+G"})).unwrap();
    assert_eq!(res["command"], json!({"command": "apply_layout", "arg": "grid"}));

    let res = handle_method(&app, "shortcut.dispatch", &json!({"keys": "Ctrl+Q"})).unwrap();
    assert_eq!(res, json!({"command": null, "applied": false}));
}

#[test]
fn test_shortcut_register_persists_override() {
    let (app, tmp) = setup();
    let res = handle_method(&app, "shortcut.register", &json!({"action": "new_tab", "keys": "Alt+N"})).unwrap();
    assert_eq!(res["keys"], "Alt+N");

    let list = handle_method(&app, "shortcut.list", &json!({})).unwrap();
    assert_eq!(list["new_tab"], "Alt+N");

    let raw = std::fs::read_to_string(tmp.path().join("settings.json")).unwrap();
    assert!(raw.contains("Alt+N"));

    let err = handle_method(&app, "shortcut.register", &json!({"action": "new_tab", "keys": "Ctrl+W"})).unwrap_err();
    assert!(err.contains("conflict"));
}

#[test]
fn test_shortcut_register_can_take_a_chord_freed_by_another_override() {
    let (app, tmp) = setup();
    let res = handle_method(&app, "shortcut.register", &json!({"action": "new_tab", "keys": "Alt+N"})).unwrap();
    assert_eq!(res["ok"], true);
    let res = handle_method(&app, "shortcut.register", &json!({"action": "close_tab", "keys": "Ctrl+T"})).unwrap();
    assert_eq!(res["ok"], true);

    for app in [app, app_at(&tmp)] {
        let list = handle_method(&app, "shortcut.list", &json!({})).unwrap();
        assert_eq!(list["new_tab"], "Alt+N");
        assert_ne!(list["close_tab"], json!(null));

        let res = handle_method(&app, "shortcut.dispatch", &json!({"keys": "Ctrl+T"})).unwrap();
        assert_eq!(res["command"], json!({"command": "close_tab"}));
        let res = handle_method(&app, "shortcut.dispatch", &json!({"keys": "Ctrl+W"})).unwrap();
        assert_eq!(res["command"], json!(null));
    }
}

#[test]
fn test_resize_survives_settings_set() {
    let (app, _tmp) = setup();
    let id = create(&app, "https://a.example");
    handle_method(&app, "workspace.resize", &json!({"width": 600.0, "height": 400.0})).unwrap();
    handle_method(&app, "settings.set", &json!({"key": "accessibility.high_contrast", "value": true})).unwrap();

    let res = handle_method(&app, "tab.move", &json!({"id": id, "x": 5000.0, "y": 5000.0})).unwrap();
    assert_eq!(res["position"], json!({"x": 460.0, "y": 260.0}));
}

// ─── Address bar ───

#[test]
fn test_address_resolve_and_submit() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "address.resolve", &json!({"input": "rust.org"})).unwrap();
    assert_eq!(res, json!({"kind": "navigate", "url": "https://rust.org"}));

    let res = handle_method(&app, "address.resolve", &json!({"input": "hello world"})).unwrap();
    assert_eq!(res["kind"], "search");

    handle_method(&app, "address.submit", &json!({"input": "rust.org"})).unwrap();
    let tab = handle_method(&app, "tab.active", &json!({})).unwrap();
    assert_eq!(tab["url"], "https://rust.org");
}

// ─── Settings & context ───

#[test]
fn test_settings_get_and_set() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "settings.set", &json!({"key": "accessibility.high_contrast", "value": true})).unwrap();
    assert_eq!(res, json!({"ok": true}));

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["accessibility"]["high_contrast"], true);

    let context = handle_method(&app, "context.get", &json!({})).unwrap();
    assert_eq!(context["accessibility"]["high_contrast"], true);

    assert!(handle_method(&app, "settings.set", &json!({"key": "bogus.key", "value": 1})).is_err());
    assert!(handle_method(&app, "settings.set", &json!({"key": "general.homepage"})).is_err());
}

// ─── Backend methods without a client ───

#[tokio::test]
async fn test_tab_open_without_backend_creates_locally() {
    let (app, _tmp) = setup();
    let res = handle_request(&app, None, "tab.open", &json!({"url": "https://github.com"}))
        .await
        .unwrap();
    assert_eq!(res["url"], "https://github.com");
    assert_eq!(app.lock().unwrap().tab_store.tab_count(), 1);
}

#[tokio::test]
async fn test_ai_methods_require_backend() {
    let (app, _tmp) = setup();
    let err = handle_request(&app, None, "ai.analyze_tabs", &json!({})).await.unwrap_err();
    assert_eq!(err, "no backend configured");

    let res = handle_request(&app, None, "ping", &json!({})).await.unwrap();
    assert_eq!(res, json!({"pong": true}));
}
