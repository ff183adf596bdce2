//! RPC method handler for the Tabspace JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches local workspace methods; `handle_request`
//! additionally serves the methods that call the backend.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::warn;

use crate::app::{self, App};
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::managers::tab_store::TabStoreTrait;
use crate::services::address_resolver::resolve_input;
use crate::services::backend_client::BackendClient;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::tab::MetadataPatch;
use crate::types::view::{FilterBy, LayoutStrategy, ViewMode};

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn f64_param(params: &Value, name: &str) -> Result<f64, String> {
    params
        .get(name)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| format!("missing {}", name))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call that only touches local state.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Unknown tab ids are not errors: the result reports `"ok": false`.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Tabs ───
        "tab.create" => {
            let url = params.get("url").and_then(|v| v.as_str());
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let tab = a.tab_store.create_tab(url);
            to_json(&tab)
        }
        "tab.close" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.tab_store.close_tab(id);
            Ok(json!({"ok": ok, "activeTabId": a.tab_store.active_id()}))
        }
        "tab.switch" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.tab_store.switch_tab(id);
            Ok(json!({"ok": ok, "activeTabId": a.tab_store.active_id()}))
        }
        "tab.move" => {
            let id = str_param(params, "id")?;
            let x = f64_param(params, "x")?;
            let y = f64_param(params, "y")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.tab_store.move_tab(id, x, y);
            let position = a.tab_store.get_tab(id).map(|t| t.position);
            Ok(json!({"ok": ok, "position": position}))
        }
        "tab.navigate" => {
            let id = str_param(params, "id")?;
            let url = str_param(params, "url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.tab_store.navigate_tab(id, url);
            Ok(json!({"ok": ok}))
        }
        "tab.update_metadata" => {
            let id = str_param(params, "id")?;
            let patch = params
                .get("patch")
                .and_then(|v| v.as_object())
                .cloned()
                .ok_or("missing patch")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.tab_store.update_metadata(id, MetadataPatch::from(patch));
            Ok(json!({"ok": ok}))
        }
        "tab.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(&a.tab_store.list())
        }
        "tab.active" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(&a.tab_store.active())
        }

        // ─── Workspace & view ───
        "workspace.resize" => {
            let width = f64_param(params, "width")?;
            let height = f64_param(params, "height")?;
            if !(width > 0.0 && height > 0.0) {
                return Err("invalid size: width and height must be positive".to_string());
            }
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.resize_workspace(width, height);
            to_json(a.tab_store.workspace())
        }
        "view.set" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if let Some(term) = params.get("searchTerm").and_then(|v| v.as_str()) {
                a.set_search_term(term);
            }
            if let Some(filter) = params.get("filterBy").and_then(|v| v.as_str()) {
                let filter = FilterBy::parse(filter).ok_or_else(|| format!("invalid filterBy: {}", filter))?;
                a.set_filter(filter);
            }
            if let Some(mode) = params.get("viewMode").and_then(|v| v.as_str()) {
                let mode = ViewMode::parse(mode).ok_or_else(|| format!("invalid viewMode: {}", mode))?;
                a.set_view_mode(mode);
            }
            to_json(a.view())
        }
        "view.project" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let view = match params.get("now").and_then(|v| v.as_i64()) {
                Some(now) => a.project_at(now),
                None => a.project(),
            };
            to_json(&view)
        }
        "layout.apply" => {
            let name = str_param(params, "strategy")?;
            let strategy = LayoutStrategy::parse(name).ok_or_else(|| format!("unknown layout: {}", name))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.apply_layout(strategy);
            to_json(&a.tab_store.list())
        }

        // ─── Shortcuts ───
        "shortcut.dispatch" => {
            let keys = str_param(params, "keys")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.handle_shortcut(keys) {
                Some(outcome) => to_json(&outcome),
                None => Ok(json!({"command": null, "applied": false})),
            }
        }
        "shortcut.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.shortcut_manager.list_shortcuts())
        }
        "shortcut.register" => {
            let action = str_param(params, "action")?;
            let keys = str_param(params, "keys")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.shortcut_manager
                .register_shortcut(action, keys)
                .map_err(|e| e.to_string())?;
            let requested = a.shortcut_manager.get_shortcut(action).unwrap_or_default().to_string();
            // Persist as an override so it survives a restart; this rebuilds the manager.
            a.set_setting(&format!("shortcuts.{}", action), json!(requested))
                .map_err(|e| e.to_string())?;
            let bound = a.shortcut_manager.get_shortcut(action).map(str::to_string);
            let ok = bound.as_deref() == Some(requested.as_str());
            Ok(json!({"ok": ok, "action": action, "keys": bound}))
        }

        // ─── Address bar ───
        "address.resolve" => {
            let input = str_param(params, "input")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let resolved = resolve_input(input, &a.settings_engine.get_settings().general.search_url);
            to_json(&resolved)
        }
        "address.submit" => {
            let input = str_param(params, "input")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let resolved = a.submit_address(input);
            to_json(&resolved)
        }

        // ─── Settings & context ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.settings_engine.get_settings())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "context.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.context())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Dispatch any JSON-RPC method, including the ones that call the backend.
///
/// Without a backend client, `tab.open` degrades to a local `tab.create` and
/// the AI methods report that no backend is configured.
pub async fn handle_request(
    app: &Mutex<App>,
    client: Option<&BackendClient>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "tab.open" => {
            let url = params.get("url").and_then(|v| v.as_str());
            match client {
                Some(client) => {
                    let tab = app::open_tab_with_backend(app, client, url).await?;
                    to_json(&tab)
                }
                None => handle_method(app, "tab.create", params),
            }
        }
        "ai.analyze_tabs" => {
            let client = client.ok_or("no backend configured")?;
            let updated = app::analyze_tabs_with_backend(app, client).await?;
            Ok(json!({"updated": updated}))
        }
        "ai.parse_navigation" => {
            let client = client.ok_or("no backend configured")?;
            let input = str_param(params, "input")?;
            match client.parse_navigation(input).await {
                Ok(intent) => to_json(&intent),
                Err(e) => {
                    warn!(error = %e, "navigation parse failed, resolving locally");
                    let a = app.lock().map_err(|e| e.to_string())?;
                    let resolved =
                        resolve_input(input, &a.settings_engine.get_settings().general.search_url);
                    Ok(json!({"url": resolved.url(), "action": "navigate", "confidence": null, "fallback": true}))
                }
            }
        }
        _ => handle_method(app, method, params),
    }
}
