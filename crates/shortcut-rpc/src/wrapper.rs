//! Response wrapping for frontend compatibility.
//!
//! The form UI expects responses in the format `{success: bool, ...data, error?: string}`.
//! Some handlers return raw data; this module wraps those appropriately.

use serde_json::{json, Value};

/// Wrap handler results to match the frontend's expected format.
pub fn wrap_response(method: &str, result: Value) -> Value {
    match method {
        "get_shortcut" => {
            json!({
                "success": true,
                "shortcut": result
            })
        }

        "render_preview" => {
            json!({
                "success": true,
                "content": result
            })
        }

        "validate" => {
            let valid = result.as_array().is_some_and(|p| p.is_empty());
            json!({
                "success": true,
                "valid": valid,
                "problems": result
            })
        }

        "get_layout" => {
            json!({
                "success": true,
                "orientation": result
            })
        }

        // Default: return as-is (handlers that build their own payload)
        _ => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_validate_with_problems() {
        let wrapped = wrap_response("validate", json!(["Name cannot be empty"]));
        assert!(wrapped["success"].as_bool().unwrap());
        assert!(!wrapped["valid"].as_bool().unwrap());
        assert_eq!(wrapped["problems"], json!(["Name cannot be empty"]));
    }

    #[test]
    fn test_wrap_validate_empty() {
        let wrapped = wrap_response("validate", json!([]));
        assert!(wrapped["valid"].as_bool().unwrap());
        assert_eq!(wrapped["problems"], json!([]));
    }

    #[test]
    fn test_wrap_preview() {
        let wrapped = wrap_response("render_preview", json!("[Desktop Entry]\n"));
        assert_eq!(wrapped["content"], "[Desktop Entry]\n");
    }

    #[test]
    fn test_passthrough_method() {
        let data = json!({"success": false, "problems": ["Icon path cannot be empty"]});
        let wrapped = wrap_response("save", data.clone());
        assert_eq!(wrapped, data);
    }
}
