//! RPC method handler for the linksnip JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the matching [`App`] command.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::{App, ViewUpdate};
use crate::types::entry::{EntryFields, EntryType, ItemCandidate};

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Folder items ───
        "item.add" => {
            let candidate = ItemCandidate::new(
                str_param(params, "title")?,
                str_param(params, "target")?,
                opt_str_param(params, "description")?.unwrap_or(""),
                opt_str_param(params, "thumbnail")?.unwrap_or(""),
            );
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updates = a.submit_add(candidate).map_err(|e| e.to_string())?;
            Ok(items_with_updates(&a, &updates))
        }
        "item.remove" => {
            let index = match params.get("index") {
                None | Some(Value::Null) => return Err("missing index".to_string()),
                Some(v) => v
                    .as_u64()
                    .and_then(|i| usize::try_from(i).ok())
                    .ok_or_else(|| format!("invalid index: {}", v))?,
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updates = a.submit_remove(index).map_err(|e| e.to_string())?;
            Ok(items_with_updates(&a, &updates))
        }
        "item.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.items(), "view": a.item_list()}))
        }

        // ─── Entry ───
        "entry.change_type" => {
            let entry_type = str_param(params, "type")?
                .parse::<EntryType>()
                .map_err(|e| e.to_string())?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updates = a.change_type(entry_type);
            Ok(json!({"type": entry_type, "updates": updates}))
        }
        "entry.generate" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let fields = entry_fields(params, a.entry_type())?;
            let code = a.submit_generate(&fields).map_err(|e| e.to_string())?;
            Ok(json!({"code": code}))
        }
        "entry.preview" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let fields = entry_fields(params, a.entry_type())?;
            let render = a.preview(&fields).map_err(|e| e.to_string())?;
            Ok(json!({"hidden": render.is_hidden(), "render": render}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updates = a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "updates": updates}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updates = a.reset_settings();
            Ok(json!({"ok": true, "updates": updates}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

fn items_with_updates(app: &App, updates: &[ViewUpdate]) -> Value {
    json!({"items": app.items(), "updates": updates})
}

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn opt_str_param<'a>(params: &'a Value, name: &str) -> Result<Option<&'a str>, String> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(format!("invalid {}: expected a string", name)),
    }
}

/// Reads main-entry form values. `type` defaults to the app's current type
/// and `isVisible` to `true`; visibility may be a bool or its select literal.
fn entry_fields(params: &Value, current_type: EntryType) -> Result<EntryFields, String> {
    let is_visible = match params.get("isVisible") {
        None | Some(Value::Null) => "true".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err("invalid isVisible: expected a bool or string".to_string()),
    };
    Ok(EntryFields {
        title: opt_str_param(params, "title")?.unwrap_or("").to_string(),
        target: opt_str_param(params, "target")?.unwrap_or("").to_string(),
        description: opt_str_param(params, "description")?.unwrap_or("").to_string(),
        thumbnail: opt_str_param(params, "thumbnail")?.unwrap_or("").to_string(),
        entry_type: opt_str_param(params, "type")?
            .unwrap_or(current_type.as_literal())
            .to_string(),
        is_visible,
    })
}
