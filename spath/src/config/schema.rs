//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use spath::config::{Config, ServiceConfig};
/// use spath::LogLevel;
///
/// let config = Config {
///     log_level: Some(LogLevel::Verbose),
///     service: Some(ServiceConfig {
///         warn_on_swallowed_errors: Some(true),
///     }),
/// };
/// assert_eq!(config.log_level, Some(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Verbosity of the stderr logger.
    pub log_level: Option<LogLevel>,

    /// Path service settings.
    pub service: Option<ServiceConfig>,
}

/// Settings for [`PathService`](crate::path::PathService).
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Log directory-listing failures hidden by `children` at warn level
    /// rather than debug level.
    pub warn_on_swallowed_errors: Option<bool>,
}
