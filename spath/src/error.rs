//! Error types for the spath library.
//!
//! Path construction and the path algebra never fail. Errors only arise from
//! the filesystem provider and from loading configuration, and are modelled
//! here with `thiserror`.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with an spath error.
///
/// # Examples
///
/// ```
/// use spath::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/tmp")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the spath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// A directory was required but the path names something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: String,
    },

    /// The destination of a write or move is already occupied.
    #[error("path already exists: {path}")]
    AlreadyExists {
        /// The occupied path.
        path: String,
    },

    /// File contents were requested as text but are not valid UTF-8.
    #[error("contents of {path} are not valid UTF-8")]
    InvalidUtf8 {
        /// The path whose contents failed to decode.
        path: String,
    },

    /// Any other I/O failure reported by the host.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path the operation was acting on.
        path: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Map an I/O error raised while operating on `path` onto the error
    /// hierarchy, keeping the common kinds distinguishable.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::Error;
    /// use std::io;
    ///
    /// let err = Error::from_io("/missing", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::Error;
    ///
    /// let err = Error::PathNotFound { path: "/nonexistent".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::Error;
    ///
    /// let err = Error::PermissionDenied { path: "/restricted".into() };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
