//! Shortcut editing handlers.

use super::{get_param, require_str_param};
use crate::server::AppState;
use serde_json::{json, Value};
use shortcut_core::{FieldValue, SaveOutcome, ShortcutError, ShortcutField};

pub async fn get_shortcut(state: &AppState, _params: &Value) -> shortcut_core::Result<Value> {
    let session = state.session.read().await;
    let mut shortcut = serde_json::to_value(session.entry())?;
    shortcut["export_directory"] = json!(session.target().directory().to_string_lossy());
    shortcut["file_name"] = json!(shortcut_core::ExportTarget::file_name_for(
        session.entry().name()
    ));
    Ok(shortcut)
}

pub async fn set_field(state: &AppState, params: &Value) -> shortcut_core::Result<Value> {
    let field: ShortcutField = require_str_param(params, "field", "field")?.parse()?;
    let raw_value = get_param(params, "value", "value").ok_or_else(|| {
        ShortcutError::InvalidParams {
            message: "Missing required parameter: value".to_string(),
        }
    })?;
    let value: FieldValue =
        serde_json::from_value(raw_value.clone()).map_err(|_| ShortcutError::InvalidParams {
            message: format!("Field '{}' expects a string or boolean value", field),
        })?;

    let mut session = state.session.write().await;
    session.set_field(field, value)?;

    Ok(json!({
        "success": true,
        "preview": session.preview()
    }))
}

pub async fn set_export_directory(
    state: &AppState,
    params: &Value,
) -> shortcut_core::Result<Value> {
    let path = require_str_param(params, "path", "path")?;

    let mut session = state.session.write().await;
    session.set_export_directory(&path)?;

    Ok(json!({
        "success": true,
        "export_directory": session.target().directory().to_string_lossy()
    }))
}

pub async fn render_preview(state: &AppState, _params: &Value) -> shortcut_core::Result<Value> {
    let session = state.session.read().await;
    Ok(json!(session.preview()))
}

pub async fn validate(state: &AppState, _params: &Value) -> shortcut_core::Result<Value> {
    let session = state.session.read().await;
    let problems = session.validate(&state.fs);
    Ok(serde_json::to_value(problems)?)
}

pub async fn save(state: &AppState, _params: &Value) -> shortcut_core::Result<Value> {
    let session = state.session.read().await;

    // Write failures are reported in the payload, not as RPC errors
    let response = match session.save(&state.fs) {
        SaveOutcome::Saved { path } => json!({
            "success": true,
            "path": path.to_string_lossy()
        }),
        SaveOutcome::Invalid { problems } => json!({
            "success": false,
            "problems": problems
        }),
        SaveOutcome::Failed { path, message } => json!({
            "success": false,
            "path": path.to_string_lossy(),
            "error": message
        }),
    };

    Ok(response)
}
