//! Configuration for spath.
//!
//! Configuration is optional; every setting has a default. Sources are
//! merged with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SPATH_*`)
//! 3. The nearest `spath.yaml`, or an explicitly named file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use spath::config::ConfigBuilder;
//! use spath::path::{OsFilesystem, PathService};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let service = PathService::with_config(OsFilesystem::new(), &config);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, ServiceConfig};
