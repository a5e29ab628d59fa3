//! File and folder picker requests.
//!
//! The dialogs themselves belong to the UI. This module describes which
//! dialog each form button opens.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::PickerConfig;
use crate::error::{Result, ShortcutError};

/// What a picker result is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Executable,
    Icon,
    ExportDirectory,
}

/// Dialog parameters for one picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerRequest {
    pub title: &'static str,
    /// Pick a directory instead of a file.
    pub directory: bool,
    /// Single selection only.
    pub allow_multiple: bool,
}

impl PickerTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickerTarget::Executable => "executable",
            PickerTarget::Icon => "icon",
            PickerTarget::ExportDirectory => "export_directory",
        }
    }

    pub fn request(&self) -> PickerRequest {
        let (title, directory) = match self {
            PickerTarget::Executable => (PickerConfig::EXECUTABLE_TITLE, false),
            PickerTarget::Icon => (PickerConfig::ICON_TITLE, false),
            PickerTarget::ExportDirectory => (PickerConfig::EXPORT_DIRECTORY_TITLE, true),
        };
        PickerRequest {
            title,
            directory,
            allow_multiple: false,
        }
    }
}

impl fmt::Display for PickerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickerTarget {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "executable" | "executable_path" | "executablePath" => Ok(PickerTarget::Executable),
            "icon" | "icon_path" | "iconPath" => Ok(PickerTarget::Icon),
            "export_directory" | "exportDirectory" => Ok(PickerTarget::ExportDirectory),
            other => Err(ShortcutError::InvalidParams {
                message: format!("Unknown picker target: {}", other),
            }),
        }
    }
}
