//! Error types for the shortcut builder.
//!
//! Validation problems are not errors: they are collected by the validator and
//! returned as data, and write failures come back as `SaveOutcome::Failed`.
//! `ShortcutError` covers bad requests, bad paths and startup configuration.

use thiserror::Error;

/// Main error type for the shortcut builder.
#[derive(Debug, Error)]
pub enum ShortcutError {
    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Request errors
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    #[error("Invalid path '{input}': {message}")]
    InvalidPath { input: String, message: String },
}

/// Result type alias for shortcut builder operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl From<serde_json::Error> for ShortcutError {
    fn from(err: serde_json::Error) -> Self {
        ShortcutError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ShortcutError {
    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32601: Method not found
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32005: Invalid path
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            ShortcutError::MethodNotFound { .. } => -32601,
            ShortcutError::InvalidParams { .. } => -32602,
            ShortcutError::InvalidPath { .. } => -32005,
            _ => -32603,
        }
    }
}
