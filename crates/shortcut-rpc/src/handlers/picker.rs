//! File and folder picker handlers.
//!
//! The UI opens the native dialog described by `get_picker_request`, then
//! reports what the user chose through `apply_picker_result`.

use super::{get_param, require_str_param};
use crate::server::AppState;
use serde_json::{json, Value};
use shortcut_core::{PickerTarget, ShortcutError};

pub async fn get_picker_request(state: &AppState, params: &Value) -> shortcut_core::Result<Value> {
    let target: PickerTarget = require_str_param(params, "target", "target")?.parse()?;
    let session = state.session.read().await;
    let request = session.picker_request(target);

    Ok(json!({
        "success": true,
        "target": target.as_str(),
        "title": request.title,
        "directory": request.directory,
        "allow_multiple": request.allow_multiple
    }))
}

pub async fn apply_picker_result(
    state: &AppState,
    params: &Value,
) -> shortcut_core::Result<Value> {
    let target: PickerTarget = require_str_param(params, "target", "target")?.parse()?;
    // A missing or null selection means the dialog was cancelled
    let selection = match get_param(params, "selection", "selection") {
        None => None,
        Some(Value::String(selection)) => Some(selection.as_str()),
        Some(other) => {
            return Err(ShortcutError::InvalidParams {
                message: format!("selection must be a string or null, got {}", other),
            })
        }
    };

    let mut session = state.session.write().await;
    let changed = session.apply_picker_result(target, selection)?;

    Ok(json!({
        "success": true,
        "changed": changed,
        "preview": session.preview(),
        "export_directory": session.target().directory().to_string_lossy()
    }))
}
