//! Shortcut Core - Headless library for building `.desktop` shortcut files.
//!
//! This crate holds everything a shortcut-builder form needs apart from the
//! widgets themselves: the entry model and its renderer, the save-time
//! validator, the save operation, and a session type that owns the single
//! entry being edited. It can be used programmatically without any RPC layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use shortcut_core::{OsFileSystem, SaveOutcome, ShortcutSession};
//!
//! fn main() -> shortcut_core::Result<()> {
//!     let mut session = ShortcutSession::new()?;
//!     session.entry_mut().set_name("Htop");
//!     session.entry_mut().set_executable_path("/usr/bin/htop");
//!     session.entry_mut().set_opens_terminal(true);
//!
//!     println!("{}", session.preview());
//!
//!     match session.save(&OsFileSystem) {
//!         SaveOutcome::Saved { path } => println!("Saved to {}", path.display()),
//!         other => println!("Not saved: {:?}", other),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod layout;
pub mod platform;
pub mod shortcut;

// Re-export commonly used types
pub use config::{AppConfig, EntryDefaults, LayoutConfig, PickerConfig, RpcConfig};
pub use error::{Result, ShortcutError};
pub use fs::{FileSystem, OsFileSystem};
pub use layout::Orientation;
pub use shortcut::{
    save, validate, ExportTarget, FieldValue, PickerRequest, PickerTarget, SaveOutcome,
    ShortcutEntry, ShortcutEntryBuilder, ShortcutField, ShortcutSession, ValidationProblem,
};
