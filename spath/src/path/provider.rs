//! The filesystem capability consumed by [`PathService`].
//!
//! A provider is the only place real process state (the current directory,
//! file contents) is read or written. The crate ships two: [`OsFilesystem`]
//! for the host and [`MemoryFilesystem`] for isolated use.
//!
//! [`PathService`]: crate::path::PathService
//! [`OsFilesystem`]: crate::path::OsFilesystem
//! [`MemoryFilesystem`]: crate::path::MemoryFilesystem

use crate::error::Result;
use crate::path::algebra;
use crate::path::value::PathValue;

/// Host operations needed by the path service.
///
/// Paths are passed as plain text; providers must not reinterpret them
/// beyond what the host call itself does.
pub trait FilesystemProvider {
    /// Read the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot report it.
    fn current_directory(&self) -> Result<String>;

    /// Replace the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist or cannot be entered.
    fn set_current_directory(&self, path: &str) -> Result<()>;

    /// Whether anything exists at `path`.
    fn file_exists(&self, path: &str) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_directory(&self, path: &str) -> bool;

    /// Remove a file, or a directory together with its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing exists at `path` or it cannot be removed.
    fn remove_item(&self, path: &str) -> Result<()>;

    /// Move `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or the host refuses the move.
    fn move_item(&self, from: &str, to: &str) -> Result<()>;

    /// Read the full contents of a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>>;

    /// Replace the contents of a file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_bytes(&self, path: &str, contents: &[u8]) -> Result<()>;

    /// List the names of the immediate entries of a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is missing, not a directory, or unreadable.
    fn list_directory(&self, path: &str) -> Result<Vec<String>>;

    /// Canonical spelling of `path`.
    ///
    /// The default is the lexical [`algebra::normalize`]; providers only
    /// override this if the host offers its own canonical form.
    fn canonicalize(&self, path: &str) -> String {
        algebra::normalize(&PathValue::new(path)).into_string()
    }
}

impl<P: FilesystemProvider + ?Sized> FilesystemProvider for &P {
    fn current_directory(&self) -> Result<String> {
        (**self).current_directory()
    }

    fn set_current_directory(&self, path: &str) -> Result<()> {
        (**self).set_current_directory(path)
    }

    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }

    fn is_directory(&self, path: &str) -> bool {
        (**self).is_directory(path)
    }

    fn remove_item(&self, path: &str) -> Result<()> {
        (**self).remove_item(path)
    }

    fn move_item(&self, from: &str, to: &str) -> Result<()> {
        (**self).move_item(from, to)
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(path)
    }

    fn write_bytes(&self, path: &str, contents: &[u8]) -> Result<()> {
        (**self).write_bytes(path, contents)
    }

    fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        (**self).list_directory(path)
    }

    fn canonicalize(&self, path: &str) -> String {
        (**self).canonicalize(path)
    }
}
