//! Builder assembling the effective configuration.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// Layers apply from lowest to highest precedence: user config, project
/// config, `LOCCONV_*` environment variables, then overrides given to
/// [`with_config`](Self::with_config). The merged result is validated.
///
/// # Examples
///
/// ```
/// use locconv::config::{Config, ConfigBuilder};
/// use locconv::Platform;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         platform: Some(Platform::Posix),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.platform, Some(Platform::Posix));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `LOCCONV_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Start project discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user configuration from `dir` instead of `~/.locconv`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Layer `config` on top of everything else.
    ///
    /// May be called repeatedly; later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable holds an invalid value, or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?
        };

        for source in &sources {
            log::debug!(
                "configuration source {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// The file sources this builder would read, without merging.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed.
    pub fn sources(&self) -> Result<Vec<ConfigSource>> {
        if self.skip_files {
            return Ok(Vec::new());
        }
        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir()?,
        };
        ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())
    }
}
