//! Desktop shortcut building.
//!
//! Provides:
//! - The shortcut entry model and its `.desktop` renderer
//! - Save-time validation against the filesystem
//! - The save operation
//! - The editing session that ties them together for a form UI
//!
//! # Platform Support
//!
//! Output follows the XDG Desktop Entry Specification, so shortcuts are only
//! picked up by Linux desktop environments.

mod entry;
mod export;
mod picker;
mod session;
mod validator;

pub use entry::{FieldValue, ShortcutEntry, ShortcutEntryBuilder, ShortcutField};
pub use export::{save, ExportTarget, SaveOutcome};
pub use picker::{PickerRequest, PickerTarget};
pub use session::ShortcutSession;
pub use validator::{validate, ValidationProblem};
