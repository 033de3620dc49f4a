//! Binding of [`FilesystemProvider`] to the host operating system.

use std::env;
use std::fs;

use crate::error::{Error, Result};
use crate::path::provider::FilesystemProvider;

/// Provider backed by `std::fs` and the process current directory.
///
/// The current directory is process-wide state. Two threads using
/// `OsFilesystem` at the same time see each other's directory changes, so
/// callers that change directory must serialize those calls themselves.
///
/// # Examples
///
/// ```no_run
/// use spath::path::{FilesystemProvider, OsFilesystem};
///
/// let fs = OsFilesystem::new();
/// assert!(fs.is_directory("/"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl OsFilesystem {
    /// Create the OS provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FilesystemProvider for OsFilesystem {
    fn current_directory(&self) -> Result<String> {
        let cwd = env::current_dir().map_err(|e| Error::from_io(".", e))?;
        cwd.into_os_string()
            .into_string()
            .map_err(|os| Error::InvalidUtf8 {
                path: os.to_string_lossy().into_owned(),
            })
    }

    fn set_current_directory(&self, path: &str) -> Result<()> {
        log::debug!("changing current directory to {path}");
        env::set_current_dir(path).map_err(|e| Error::from_io(path, e))
    }

    fn file_exists(&self, path: &str) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &str) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.is_dir())
    }

    fn remove_item(&self, path: &str) -> Result<()> {
        let meta = fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
        let removed = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        removed.map_err(|e| Error::from_io(path, e))
    }

    fn move_item(&self, from: &str, to: &str) -> Result<()> {
        if fs::symlink_metadata(to).is_ok() {
            return Err(Error::AlreadyExists {
                path: to.to_string(),
            });
        }
        fs::rename(from, to).map_err(|e| Error::from_io(from, e))
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::from_io(path, e))
    }

    fn write_bytes(&self, path: &str, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).map_err(|e| Error::from_io(path, e))
    }

    fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        if !self.is_directory(path) {
            return Err(if self.file_exists(path) {
                Error::NotADirectory {
                    path: path.to_string(),
                }
            } else {
                Error::PathNotFound {
                    path: path.to_string(),
                }
            });
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| Error::from_io(path, e))? {
            let entry = entry.map_err(|e| Error::from_io(path, e))?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("skipping non-UTF-8 entry {raw:?} in {path}"),
            }
        }
        Ok(names)
    }
}
