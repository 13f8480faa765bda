//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LOCCONV_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::platform::Platform;

/// Selects the platform policy.
pub const PLATFORM_ENV: &str = "LOCCONV_PLATFORM";

/// Comma-separated extra URL protocols.
pub const PROTOCOLS_ENV: &str = "LOCCONV_PROTOCOLS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use locconv::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `LOCCONV_PLATFORM` and `LOCCONV_LOG_MODE` replace the configured
    /// value; `LOCCONV_PROTOCOLS` is appended to the configured list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unknown platform
    /// or log mode.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(platform) = env::var(PLATFORM_ENV) {
            config.platform = Some(platform.parse::<Platform>().map_err(|_| Error::Validation {
                field: PLATFORM_ENV.into(),
                message: format!("unknown platform '{platform}' (expected posix or windows)"),
            })?);
        }

        if let Ok(protocols) = env::var(PROTOCOLS_ENV) {
            let layer = Config {
                protocols: Some(Self::parse_protocols(&protocols)),
                ..Config::default()
            };
            ConfigMerger::merge_into(config, &layer);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode =
                Some(LogLevel::parse(&mode).map_err(|message| Error::Validation {
                    field: LOG_MODE_ENV.into(),
                    message,
                })?);
        }

        Ok(())
    }

    /// Splits a comma-separated protocol list, dropping empty entries.
    ///
    /// Syntax is checked later by [`ConfigValidator`](super::ConfigValidator).
    fn parse_protocols(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: &'static str,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self { key, old_value }
        }

        fn remove(key: &'static str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self { key, old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn test_parse_protocols() {
        assert_eq!(
            EnvironmentConfig::parse_protocols("platform, jar ,,svn+ssh"),
            vec!["platform", "jar", "svn+ssh"]
        );
        assert!(EnvironmentConfig::parse_protocols("").is_empty());
        assert!(EnvironmentConfig::parse_protocols(" , ").is_empty());
    }

    #[test]
    #[serial]
    fn test_no_variables_leave_config_untouched() {
        let _platform = EnvGuard::remove(PLATFORM_ENV);
        let _protocols = EnvGuard::remove(PROTOCOLS_ENV);
        let _log = EnvGuard::remove(LOG_MODE_ENV);

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_platform_override() {
        let _platform = EnvGuard::set(PLATFORM_ENV, "Windows");
        let _protocols = EnvGuard::remove(PROTOCOLS_ENV);
        let _log = EnvGuard::remove(LOG_MODE_ENV);

        let mut config = Config {
            platform: Some(Platform::Posix),
            ..Config::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.platform, Some(Platform::Windows));
    }

    #[test]
    #[serial]
    fn test_invalid_platform() {
        let _platform = EnvGuard::set(PLATFORM_ENV, "plan9");
        let mut config = Config::default();
        let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == PLATFORM_ENV));
    }

    #[test]
    #[serial]
    fn test_protocols_are_appended() {
        let _platform = EnvGuard::remove(PLATFORM_ENV);
        let _protocols = EnvGuard::set(PROTOCOLS_ENV, "bundle,jrt");
        let _log = EnvGuard::remove(LOG_MODE_ENV);

        let mut config = Config {
            protocols: Some(vec!["platform".to_string()]),
            ..Config::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(
            config.protocols,
            Some(vec![
                "platform".to_string(),
                "bundle".to_string(),
                "jrt".to_string()
            ])
        );
    }

    #[test]
    #[serial]
    fn test_log_mode_override() {
        let _platform = EnvGuard::remove(PLATFORM_ENV);
        let _protocols = EnvGuard::remove(PROTOCOLS_ENV);
        let _log = EnvGuard::set(LOG_MODE_ENV, "quiet");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.log_mode, Some(LogLevel::Quiet));

        let _log = EnvGuard::set(LOG_MODE_ENV, "chatty");
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
    }
}
