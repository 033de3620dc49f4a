//! Path operations that need a filesystem.
//!
//! [`PathService`] joins the pure algebra to a [`FilesystemProvider`]. It owns
//! the provider, so the current directory it resolves against is explicit
//! context rather than ambient state: with an [`OsFilesystem`] that context is
//! the process directory, with a [`MemoryFilesystem`] it belongs to the
//! service alone.
//!
//! [`OsFilesystem`]: crate::path::OsFilesystem
//! [`MemoryFilesystem`]: crate::path::MemoryFilesystem

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::algebra;
use crate::path::provider::FilesystemProvider;
use crate::path::value::PathValue;

/// Resolves, queries and mutates paths through a provider.
///
/// # Examples
///
/// ```
/// use spath::path::{FilesystemProvider, MemoryFilesystem, PathService};
/// use spath::PathValue;
///
/// let fs = MemoryFilesystem::new();
/// fs.create_dir_all("/home/user").unwrap();
/// fs.set_current_directory("/home/user").unwrap();
///
/// let service = PathService::new(fs);
/// let resolved = service.absolute(&PathValue::new("docs/./file.txt")).unwrap();
/// assert_eq!(resolved.as_str(), "/home/user/docs/file.txt");
/// ```
#[derive(Debug, Clone)]
pub struct PathService<P> {
    provider: P,
    /// Whether `children` reports swallowed listing failures at warn level.
    warn_on_swallowed_errors: bool,
}

impl<P: FilesystemProvider> PathService<P> {
    /// Create a service over `provider`.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            warn_on_swallowed_errors: false,
        }
    }

    /// Create a service over `provider` using settings from `config`.
    #[must_use]
    pub fn with_config(provider: P, config: &Config) -> Self {
        let warn = config
            .service
            .as_ref()
            .and_then(|service| service.warn_on_swallowed_errors)
            .unwrap_or(false);
        Self::new(provider).with_swallowed_error_warnings(warn)
    }

    /// Configure whether failures hidden by [`children`](Self::children) are
    /// logged at warn level instead of debug level.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::path::{MemoryFilesystem, PathService};
    ///
    /// let service = PathService::new(MemoryFilesystem::new())
    ///     .with_swallowed_error_warnings(true);
    /// ```
    #[must_use]
    pub fn with_swallowed_error_warnings(mut self, warn: bool) -> Self {
        self.warn_on_swallowed_errors = warn;
        self
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Consume the service and return its provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// The current directory as reported by the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot report it.
    pub fn current_directory(&self) -> Result<PathValue> {
        self.provider.current_directory().map(PathValue::new)
    }

    /// Change the current directory.
    ///
    /// No checks are made here; whatever the provider rejects is returned.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, typically `PathNotFound` or
    /// `NotADirectory`.
    pub fn set_current_directory(&self, path: &PathValue) -> Result<()> {
        self.provider.set_current_directory(path.as_str())
    }

    /// Canonical form of `path` according to the provider.
    #[must_use]
    pub fn normalize(&self, path: &PathValue) -> PathValue {
        PathValue::new(self.provider.canonicalize(path.as_str()))
    }

    /// Resolve `path` against the current directory and normalize it.
    ///
    /// Absolute paths never consult the current directory. Relative paths use
    /// the directory as it is at the time of this call, so the same value
    /// can resolve differently after a directory change.
    ///
    /// # Errors
    ///
    /// Returns an error only if `path` is relative and the current directory
    /// cannot be read.
    pub fn absolute(&self, path: &PathValue) -> Result<PathValue> {
        if path.is_absolute() {
            return Ok(self.normalize(path));
        }
        let cwd = self.current_directory()?;
        Ok(self.normalize(&algebra::join(&cwd, path)))
    }

    /// Run `operation` with the current directory set to `target`.
    ///
    /// The previous directory is restored when `operation` returns, whether it
    /// succeeded, returned an error of its own, or panicked. If `target`
    /// cannot be entered, `operation` is not run.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read, `target`
    /// cannot be entered, or the previous directory cannot be restored.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::path::{FilesystemProvider, MemoryFilesystem, PathService};
    /// use spath::PathValue;
    ///
    /// let fs = MemoryFilesystem::new();
    /// fs.create_dir_all("/srv/app").unwrap();
    /// let service = PathService::new(fs);
    ///
    /// let inside = service
    ///     .scoped_change_directory(&PathValue::new("/srv/app"), || {
    ///         service.current_directory().unwrap()
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(inside.as_str(), "/srv/app");
    /// assert_eq!(service.current_directory().unwrap().as_str(), "/");
    /// ```
    pub fn scoped_change_directory<F, R>(&self, target: &PathValue, operation: F) -> Result<R>
    where
        F: FnOnce() -> R,
    {
        let previous = self.provider.current_directory()?;
        self.provider.set_current_directory(target.as_str())?;

        let mut guard = DirectoryGuard {
            provider: &self.provider,
            previous: Some(previous),
        };
        let outcome = operation();
        guard.restore()?;
        Ok(outcome)
    }

    /// Whether anything exists at `path`.
    #[must_use]
    pub fn exists(&self, path: &PathValue) -> bool {
        self.provider.file_exists(path.as_str())
    }

    /// Whether `path` exists and is a directory.
    #[must_use]
    pub fn is_directory(&self, path: &PathValue) -> bool {
        self.provider.is_directory(path.as_str())
    }

    /// Delete the file or directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if nothing was deleted.
    pub fn delete(&self, path: &PathValue) -> Result<()> {
        self.provider.remove_item(path.as_str())
    }

    /// Move `path` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the move did not happen.
    pub fn move_item(&self, path: &PathValue, destination: &PathValue) -> Result<()> {
        self.provider.move_item(path.as_str(), destination.as_str())
    }

    /// Read the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the file cannot be read.
    pub fn read(&self, path: &PathValue) -> Result<Vec<u8>> {
        self.provider.read_bytes(path.as_str())
    }

    /// Read the contents of the file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, or `InvalidUtf8` if the contents are not
    /// text.
    pub fn read_text(&self, path: &PathValue) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            path: path.to_string(),
        })
    }

    /// Replace the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if nothing was written.
    pub fn write(&self, path: &PathValue, contents: &[u8]) -> Result<()> {
        self.provider.write_bytes(path.as_str(), contents)
    }

    /// Replace the contents of the file at `path` with `text`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if nothing was written.
    pub fn write_text(&self, path: &PathValue, text: &str) -> Result<()> {
        self.write(path, text.as_bytes())
    }

    /// Immediate entries of the directory at `path`, each joined onto `path`.
    ///
    /// Directories are left out unless `include_directories` is set. Entries
    /// come back in whatever order the provider lists them.
    ///
    /// A path that is missing, is not a directory, or cannot be read yields an
    /// empty list, the same as an empty directory. Use
    /// [`try_children`](Self::try_children) to tell those cases apart.
    #[must_use]
    pub fn children(&self, path: &PathValue, include_directories: bool) -> Vec<PathValue> {
        self.try_children(path, include_directories).unwrap_or_else(|err| {
            if self.warn_on_swallowed_errors {
                log::warn!("cannot list children of {path}: {err}");
            } else {
                log::debug!("cannot list children of {path}: {err}");
            }
            Vec::new()
        })
    }

    /// Like [`children`](Self::children), but listing failures are returned.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if `path` cannot be listed.
    pub fn try_children(
        &self,
        path: &PathValue,
        include_directories: bool,
    ) -> Result<Vec<PathValue>> {
        let names = self.provider.list_directory(path.as_str())?;
        Ok(names
            .into_iter()
            .map(|name| algebra::join(path, &PathValue::new(name)))
            .filter(|child| include_directories || !self.is_directory(child))
            .collect())
    }
}

/// Puts the recorded directory back, at the latest when dropped.
struct DirectoryGuard<'a, P: FilesystemProvider> {
    provider: &'a P,
    previous: Option<String>,
}

impl<P: FilesystemProvider> DirectoryGuard<'_, P> {
    fn restore(&mut self) -> Result<()> {
        match self.previous.take() {
            Some(previous) => self.provider.set_current_directory(&previous),
            None => Ok(()),
        }
    }
}

impl<P: FilesystemProvider> Drop for DirectoryGuard<'_, P> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("failed to restore current directory: {err}");
        }
    }
}
