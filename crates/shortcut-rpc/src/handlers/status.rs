//! Status and layout handlers.

use super::require_f64_param;
use crate::server::AppState;
use serde_json::{json, Value};
use shortcut_core::{platform, AppConfig, Orientation};

pub async fn get_status(_state: &AppState, _params: &Value) -> shortcut_core::Result<Value> {
    Ok(json!({
        "success": true,
        "app": AppConfig::APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "platform": platform::current_platform()
    }))
}

pub async fn get_layout(_state: &AppState, params: &Value) -> shortcut_core::Result<Value> {
    let width = require_f64_param(params, "width", "width")?;
    let height = require_f64_param(params, "height", "height")?;

    Ok(json!(Orientation::for_client_size(width, height).as_str()))
}
