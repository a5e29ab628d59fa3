//! Filesystem seam used by validation and save.
//!
//! The validator and save operation only ever ask three questions of the
//! filesystem, so they go through this trait instead of calling `std::fs`
//! directly. Tests substitute their own implementation to simulate write
//! failures.

use std::io;
use std::path::Path;

/// The filesystem operations the shortcut builder depends on.
pub trait FileSystem {
    /// True if a regular file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// True if a directory exists at `path`.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Write `content` to `path`, creating or truncating the file.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}
