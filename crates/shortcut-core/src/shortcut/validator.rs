//! Save-time validation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::fs::FileSystem;
use crate::shortcut::entry::ShortcutEntry;
use crate::shortcut::export::ExportTarget;

/// One unmet precondition for saving.
///
/// `Display` gives the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationProblem {
    NameEmpty,
    ExecutablePathEmpty,
    ExecutableMissing,
    IconPathEmpty,
    IconMissing,
    DirectoryMissing(PathBuf),
}

impl fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationProblem::NameEmpty => f.write_str("Name cannot be empty"),
            ValidationProblem::ExecutablePathEmpty => {
                f.write_str("Executable file path cannot be empty")
            }
            ValidationProblem::ExecutableMissing => {
                f.write_str("Executable at selected path does not exist")
            }
            ValidationProblem::IconPathEmpty => f.write_str("Icon path cannot be empty"),
            ValidationProblem::IconMissing => f.write_str("Icon at selected path does not exist"),
            ValidationProblem::DirectoryMissing(path) => {
                write!(f, "Directory {} does not exist", path.display())
            }
        }
    }
}

impl Serialize for ValidationProblem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check whether `entry` can be saved into `target`.
///
/// Every rule runs on every call, and problems come back in rule order. An
/// empty list means the shortcut may be saved.
pub fn validate(
    entry: &ShortcutEntry,
    target: &ExportTarget,
    fs: &dyn FileSystem,
) -> Vec<ValidationProblem> {
    let mut problems = Vec::new();

    if entry.name().is_empty() {
        problems.push(ValidationProblem::NameEmpty);
    }

    let executable = entry.executable_path();
    if executable.is_empty() {
        problems.push(ValidationProblem::ExecutablePathEmpty);
    } else if !fs.file_exists(Path::new(executable)) {
        problems.push(ValidationProblem::ExecutableMissing);
    }

    let icon = entry.icon_path();
    if icon.is_empty() {
        problems.push(ValidationProblem::IconPathEmpty);
    } else if !fs.file_exists(Path::new(icon)) {
        problems.push(ValidationProblem::IconMissing);
    }

    if !fs.directory_exists(target.directory()) {
        problems.push(ValidationProblem::DirectoryMissing(
            target.directory().to_path_buf(),
        ));
    }

    problems
}
