#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # spath
//!
//! String-backed filesystem path values and a small algebra over them.
//!
//! A path is plain text. Composition, absolute/relative classification and
//! normalization are pure string operations; anything that needs the real
//! filesystem goes through a [`FilesystemProvider`], so the same code runs
//! against the host or against an in-memory tree.
//!
//! ## Core Types
//!
//! - [`PathValue`]: The immutable path value
//! - [`path::algebra`]: `join`, `normalize`, `is_absolute`, `is_relative`
//! - [`FilesystemProvider`], [`OsFilesystem`], [`MemoryFilesystem`]: Host access
//! - [`PathService`]: Resolution, scoped directory changes, file queries
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: Optional configuration
//!
//! ## Examples
//!
//! ```
//! use spath::{FilesystemProvider, MemoryFilesystem, PathService, PathValue};
//!
//! let a = PathValue::new("a/");
//! assert_eq!(a.join("/b").as_str(), "a/b");
//! assert_eq!(PathValue::new("/x/./y/../z").normalize().as_str(), "/x/z");
//!
//! let fs = MemoryFilesystem::new();
//! fs.create_dir_all("/home/user").unwrap();
//! fs.set_current_directory("/home/user").unwrap();
//! let service = PathService::new(fs);
//!
//! let resolved = service.absolute(&PathValue::new("docs/file.txt")).unwrap();
//! assert_eq!(resolved.as_str(), "/home/user/docs/file.txt");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    FilesystemProvider, MemoryFilesystem, OsFilesystem, PathService, PathValue, SEPARATOR,
};
