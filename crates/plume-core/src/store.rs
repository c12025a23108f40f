//! Whole-file access to the filesystem.

use std::io;
use std::path::Path;

/// Blocking whole-file text storage.
pub trait FileStore {
    /// Reads a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Creates or truncates a file and writes `contents` to it.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// `FileStore` over `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
