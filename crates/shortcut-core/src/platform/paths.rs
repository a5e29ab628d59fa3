//! Platform-specific path utilities.
//!
//! This module provides:
//! - The application menu/shortcut directory used as the default export target
//! - Conversion of picker selections (plain paths or `file://` URIs) to paths

use crate::error::{Result, ShortcutError};
use std::path::PathBuf;
use url::Url;

/// Get the user's applications/shortcuts directory.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/applications` (XDG spec)
/// - **Other**: `<data dir>/applications`, which is where XDG-aware tools
///   running elsewhere look
pub fn apps_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = dirs::home_dir().ok_or_else(|| ShortcutError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(home.join(".local").join("share").join("applications"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let data_dir = dirs::data_dir().ok_or_else(|| ShortcutError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("applications"))
    }
}

/// Convert a picker selection into a filesystem path.
///
/// Native pickers hand back either an absolute path or a `file://` URI.
/// URIs are decoded to a local path; anything else that looks like a URI is
/// rejected, and plain strings are taken verbatim.
pub fn selection_to_path(selection: &str) -> Result<PathBuf> {
    if selection.starts_with("file:") {
        let url = Url::parse(selection).map_err(|e| ShortcutError::InvalidPath {
            input: selection.to_string(),
            message: e.to_string(),
        })?;
        return url.to_file_path().map_err(|_| ShortcutError::InvalidPath {
            input: selection.to_string(),
            message: "file URI does not name a local path".to_string(),
        });
    }

    if selection.contains("://") {
        return Err(ShortcutError::InvalidPath {
            input: selection.to_string(),
            message: "only local paths and file:// URIs are supported".to_string(),
        });
    }

    Ok(PathBuf::from(selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apps_dir() {
        let dir = apps_dir().unwrap();
        assert!(dir.ends_with("applications"));
        #[cfg(target_os = "linux")]
        assert!(dir.ends_with(".local/share/applications"));
    }

    #[test]
    fn test_plain_path_is_verbatim() {
        assert_eq!(
            selection_to_path("/usr/bin/htop").unwrap(),
            PathBuf::from("/usr/bin/htop")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_uri_is_decoded() {
        assert_eq!(
            selection_to_path("file:///home/me/My%20Apps/run.sh").unwrap(),
            PathBuf::from("/home/me/My Apps/run.sh")
        );
    }

    #[test]
    fn test_remote_uri_is_rejected() {
        let err = selection_to_path("https://example.com/icon.png").unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidPath { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_uri_with_remote_host_is_rejected() {
        let err = selection_to_path("file://fileserver/share/app").unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidPath { .. }));
    }
}
