//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;
use crate::path::{FilesystemProvider, OsFilesystem};

/// Builds a [`Config`] from defaults, a file, the environment and
/// programmatic overrides, in increasing order of precedence.
///
/// # Examples
///
/// ```
/// use spath::config::{Config, ConfigBuilder};
/// use spath::LogLevel;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         log_level: Some(LogLevel::Verbose),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.log_level, Some(LogLevel::Verbose));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory where discovery of `spath.yaml` starts. Defaults to the
    /// process current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load this file instead of discovering one.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic layer; later layers win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Assemble the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or an environment
    /// variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file) = Self::file_layer(self.config_file, self.working_dir)? {
                ConfigMerger::merge_into(&mut config, &file);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        Ok(config)
    }

    fn file_layer(
        explicit: Option<PathBuf>,
        working_dir: Option<PathBuf>,
    ) -> Result<Option<Config>> {
        if let Some(path) = explicit {
            return ConfigLoader::load_file(&path).map(Some);
        }
        let start = match working_dir {
            Some(dir) => dir,
            None => PathBuf::from(OsFilesystem::new().current_directory()?),
        };
        Ok(ConfigLoader::discover(&start)?.map(|source| source.config))
    }
}
