//! Configuration merging.

use crate::config::schema::{Config, ServiceConfig};

/// Merges configuration layers, later layers winning field by field.
///
/// # Examples
///
/// ```
/// use spath::config::{Config, ConfigMerger};
/// use spath::LogLevel;
///
/// let low = Config { log_level: Some(LogLevel::Quiet), ..Default::default() };
/// let high = Config { log_level: Some(LogLevel::Verbose), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_level, Some(LogLevel::Verbose));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target`; set fields in `source` overwrite.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.log_level.is_some() {
            target.log_level = source.log_level;
        }

        if let Some(source_service) = &source.service {
            let target_service = target.service.get_or_insert_with(ServiceConfig::default);
            if source_service.warn_on_swallowed_errors.is_some() {
                target_service.warn_on_swallowed_errors = source_service.warn_on_swallowed_errors;
            }
        }
    }
}
