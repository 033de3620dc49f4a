//! Path values, the path algebra, and filesystem access.
//!
//! # Key Concepts
//!
//! ## Path values
//!
//! A [`PathValue`] is an immutable string. Any text is a valid path and
//! equality is by exact spelling.
//!
//! ## Algebra
//!
//! [`algebra`] holds the pure operations: absolute/relative tests, `join`
//! with its separator rules, and lexical `normalize`. None of them touch the
//! filesystem.
//!
//! ## Providers
//!
//! A [`FilesystemProvider`] supplies the current directory and file
//! operations. [`OsFilesystem`] binds to the host; [`MemoryFilesystem`]
//! keeps everything, including its current directory, in memory.
//!
//! ## Service
//!
//! [`PathService`] combines the two: resolving relative paths against the
//! provider's current directory, running work inside a temporarily changed
//! directory, and delegating file queries.
//!
//! # Examples
//!
//! ```
//! use spath::path::{FilesystemProvider, MemoryFilesystem, PathService};
//! use spath::PathValue;
//!
//! let base = PathValue::new("/srv/");
//! let config = base.join("/app").join("config.yaml");
//! assert_eq!(config.as_str(), "/srv/app/config.yaml");
//!
//! let fs = MemoryFilesystem::new();
//! fs.create_dir_all("/srv/app").unwrap();
//! let service = PathService::new(fs);
//! service.write_text(&config, "log_level: quiet\n").unwrap();
//! assert!(service.exists(&config));
//! ```

pub mod algebra;
pub mod memory;
pub mod os;
pub mod provider;
pub mod service;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use algebra::{SEPARATOR, SEPARATOR_CHAR};
pub use memory::MemoryFilesystem;
pub use os::OsFilesystem;
pub use provider::FilesystemProvider;
pub use service::PathService;
pub use value::PathValue;
