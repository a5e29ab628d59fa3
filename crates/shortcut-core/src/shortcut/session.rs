//! The editing session.
//!
//! A session owns the one shortcut entry and export target being edited. It
//! starts from defaults, is changed field by field, and is dropped when the
//! editor closes. Nothing is persisted.

use tracing::debug;

use std::path::PathBuf;

use crate::error::{Result, ShortcutError};
use crate::fs::FileSystem;
use crate::platform;
use crate::shortcut::entry::{FieldValue, ShortcutEntry, ShortcutField};
use crate::shortcut::export::{save, ExportTarget, SaveOutcome};
use crate::shortcut::picker::{PickerRequest, PickerTarget};
use crate::shortcut::validator::{validate, ValidationProblem};

#[derive(Debug, Clone)]
pub struct ShortcutSession {
    entry: ShortcutEntry,
    target: ExportTarget,
}

impl ShortcutSession {
    /// Start a session exporting to the user's applications directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_target(ExportTarget::user_applications()?))
    }

    pub fn with_target(target: ExportTarget) -> Self {
        Self {
            entry: ShortcutEntry::default(),
            target,
        }
    }

    pub fn entry(&self) -> &ShortcutEntry {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut ShortcutEntry {
        &mut self.entry
    }

    pub fn target(&self) -> &ExportTarget {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut ExportTarget {
        &mut self.target
    }

    pub fn set_field(&mut self, field: ShortcutField, value: FieldValue) -> Result<()> {
        self.entry.mutate(field, value)
    }

    /// Point the export target at a typed or pasted location.
    ///
    /// Accepts the same forms as a picker selection, so a `file://` URI
    /// pasted into the directory field is stored as a local path.
    pub fn set_export_directory(&mut self, location: &str) -> Result<()> {
        let directory = platform::selection_to_path(location)?;
        self.target.set_directory(directory);
        Ok(())
    }

    /// Current rendered text, for the live preview.
    pub fn preview(&self) -> String {
        self.entry.render()
    }

    pub fn validate(&self, fs: &dyn FileSystem) -> Vec<ValidationProblem> {
        validate(&self.entry, &self.target, fs)
    }

    /// Save the current entry. The session itself is not modified.
    pub fn save(&self, fs: &dyn FileSystem) -> SaveOutcome {
        save(&self.entry, &self.target, fs)
    }

    pub fn picker_request(&self, target: PickerTarget) -> PickerRequest {
        target.request()
    }

    /// Apply the result of a picker dialog.
    ///
    /// `None` means the dialog was cancelled and nothing changes. Returns
    /// whether the session was modified.
    pub fn apply_picker_result(
        &mut self,
        target: PickerTarget,
        selection: Option<&str>,
    ) -> Result<bool> {
        let Some(selection) = selection else {
            debug!("Picker for {} cancelled", target);
            return Ok(false);
        };

        let path = platform::selection_to_path(selection)?;
        debug!("Picker for {} selected {}", target, path.display());

        match target {
            PickerTarget::Executable => {
                self.entry.set_executable_path(text_path(selection, path)?);
            }
            PickerTarget::Icon => {
                self.entry.set_icon_path(text_path(selection, path)?);
            }
            PickerTarget::ExportDirectory => {
                self.target.set_directory(path);
            }
        }

        Ok(true)
    }
}

/// Entry fields are text, so a path that is not UTF-8 cannot be stored.
fn text_path(selection: &str, path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|_| ShortcutError::InvalidPath {
            input: selection.to_string(),
            message: "path is not valid UTF-8".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn session() -> ShortcutSession {
        ShortcutSession::with_target(ExportTarget::new("/tmp/shortcuts"))
    }

    #[test]
    fn test_starts_from_defaults() {
        let session = session();
        assert_eq!(session.entry(), &ShortcutEntry::default());
        assert_eq!(session.target().directory(), Path::new("/tmp/shortcuts"));
    }

    #[test]
    fn test_default_target_is_applications_dir() {
        let session = ShortcutSession::new().unwrap();
        assert!(session.target().directory().ends_with("applications"));
    }

    #[test]
    fn test_set_field_updates_preview() {
        let mut session = session();
        session
            .set_field(ShortcutField::Name, "Editor".into())
            .unwrap();
        assert!(session.preview().contains("Name=Editor\n"));
    }

    #[test]
    fn test_cancelled_picker_changes_nothing() {
        let mut session = session();
        let before = session.clone();

        let changed = session
            .apply_picker_result(PickerTarget::ExportDirectory, None)
            .unwrap();

        assert!(!changed);
        assert_eq!(session.entry(), before.entry());
        assert_eq!(session.target(), before.target());
    }

    #[cfg(unix)]
    #[test]
    fn test_picker_uri_becomes_path() {
        let mut session = session();

        assert!(session
            .apply_picker_result(PickerTarget::Icon, Some("file:///opt/app/icon%201.png"))
            .unwrap());
        assert!(session
            .apply_picker_result(PickerTarget::Executable, Some("/opt/app/run"))
            .unwrap());
        assert!(session
            .apply_picker_result(PickerTarget::ExportDirectory, Some("file:///tmp/out"))
            .unwrap());

        assert_eq!(session.entry().icon_path(), "/opt/app/icon 1.png");
        assert_eq!(session.entry().executable_path(), "/opt/app/run");
        assert_eq!(session.target().directory(), Path::new("/tmp/out"));
    }

    #[test]
    fn test_bad_picker_selection_is_rejected() {
        let mut session = session();
        let err = session
            .apply_picker_result(PickerTarget::Icon, Some("ftp://host/icon.png"))
            .unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidPath { .. }));
        assert_eq!(session.entry().icon_path(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_picker_path_is_rejected() {
        let mut session = session();
        let err = session
            .apply_picker_result(PickerTarget::Executable, Some("file:///opt/%FF/run"))
            .unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidPath { .. }));
        assert_eq!(session.entry().executable_path(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_export_directory_accepts_uri_and_path() {
        let mut session = session();

        session.set_export_directory("file:///home/me/My%20Apps").unwrap();
        assert_eq!(session.target().directory(), Path::new("/home/me/My Apps"));

        session.set_export_directory("/srv/apps").unwrap();
        assert_eq!(session.target().directory(), Path::new("/srv/apps"));
    }

    #[test]
    fn test_export_directory_rejects_remote_uri() {
        let mut session = session();
        let err = session.set_export_directory("smb://server/apps").unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidPath { .. }));
        assert_eq!(session.target().directory(), Path::new("/tmp/shortcuts"));
    }
}
