//! Environment variable overrides for configuration.

use std::env;

use crate::config::schema::{Config, ServiceConfig};
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Environment variable selecting the log level.
pub const LOG_MODE_VAR: &str = "SPATH_LOG_MODE";

/// Environment variable toggling warn-level reporting in `children`.
pub const WARN_SWALLOWED_VAR: &str = "SPATH_WARN_SWALLOWED_ERRORS";

/// Applies `SPATH_*` environment variables on top of file configuration.
///
/// # Examples
///
/// ```no_run
/// use spath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a variable is set to an unusable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(LOG_MODE_VAR) {
            let level = LogLevel::parse(&value).map_err(|message| Error::Validation {
                field: LOG_MODE_VAR.into(),
                message,
            })?;
            config.log_level = Some(level);
        }

        if let Ok(value) = env::var(WARN_SWALLOWED_VAR) {
            let warn = Self::parse_bool(WARN_SWALLOWED_VAR, &value)?;
            config
                .service
                .get_or_insert_with(ServiceConfig::default)
                .warn_on_swallowed_errors = Some(warn);
        }

        Ok(())
    }

    fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("expected a boolean, got '{value}'"),
            }),
        }
    }
}
