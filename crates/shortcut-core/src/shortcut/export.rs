//! Export target and the save operation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::platform;
use crate::shortcut::entry::ShortcutEntry;
use crate::shortcut::validator::{validate, ValidationProblem};

/// Directory the shortcut file is written into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTarget {
    directory: PathBuf,
}

impl ExportTarget {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Target the user's applications directory.
    pub fn user_applications() -> Result<Self> {
        Ok(Self::new(platform::apps_dir()?))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = directory.into();
    }

    /// File name for a shortcut called `name`.
    ///
    /// Path separators and NUL are replaced with `_` so the file always lands
    /// directly inside the export directory.
    pub fn file_name_for(name: &str) -> String {
        let stem: String = name
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                other => other,
            })
            .collect();
        format!("{}.{}", stem, AppConfig::DESKTOP_FILE_EXTENSION)
    }

    /// Full output path for a shortcut called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(Self::file_name_for(name))
    }
}

/// Result of one save attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// The file was written.
    Saved { path: PathBuf },
    /// Validation failed; nothing was written.
    Invalid { problems: Vec<ValidationProblem> },
    /// The write itself failed.
    Failed { path: PathBuf, message: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

/// Validate `entry`, then write its rendered text into `target`.
///
/// An existing file with the same name is overwritten. The write is a single
/// direct write with no temp file; whatever the filesystem leaves behind on
/// failure is the final state.
pub fn save(entry: &ShortcutEntry, target: &ExportTarget, fs: &dyn FileSystem) -> SaveOutcome {
    let problems = validate(entry, target, fs);
    if !problems.is_empty() {
        debug!("Save blocked by {} validation problem(s)", problems.len());
        return SaveOutcome::Invalid { problems };
    }

    let path = target.path_for(entry.name());
    match fs.write_file(&path, &entry.render()) {
        Ok(()) => {
            info!("Wrote desktop entry to {}", path.display());
            SaveOutcome::Saved { path }
        }
        Err(e) => {
            warn!("Failed to write desktop entry to {}: {}", path.display(), e);
            SaveOutcome::Failed {
                path,
                message: e.to_string(),
            }
        }
    }
}
