//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::reference::encoding::is_valid_scheme;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use locconv::config::{Config, ConfigValidator};
///
/// let config = Config {
///     protocols: Some(vec!["svn+ssh".to_string()]),
///     ..Default::default()
/// };
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config {
///     protocols: Some(vec!["1http".to_string()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the `protocols` field if an entry
    /// is not a valid scheme or appears twice.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref protocols) = config.protocols {
            Self::validate_protocols(protocols)?;
        }
        Ok(())
    }

    fn validate_protocols(protocols: &[String]) -> Result<()> {
        let mut seen = HashSet::new();
        for protocol in protocols {
            if !is_valid_scheme(protocol) {
                return Err(Error::Validation {
                    field: "protocols".into(),
                    message: format!(
                        "'{protocol}' is not a valid scheme (expected a letter followed by letters, digits, '+', '-' or '.')"
                    ),
                });
            }
            if !seen.insert(protocol.to_ascii_lowercase()) {
                return Err(Error::Validation {
                    field: "protocols".into(),
                    message: format!("'{protocol}' is listed more than once"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_protocols(list: &[&str]) -> Config {
        Config {
            protocols: Some(list.iter().map(|p| (*p).to_string()).collect()),
            ..Config::default()
        }
    }

    #[test]
    fn test_validate_empty_config() {
        ConfigValidator::validate(&Config::default()).unwrap();
    }

    #[test]
    fn test_validate_protocols_valid() {
        ConfigValidator::validate(&with_protocols(&["platform", "svn+ssh", "x-y.z", "B2"])).unwrap();
    }

    #[test]
    fn test_validate_protocols_invalid() {
        for bad in ["", "1http", "ht tp", "a:b", "-x", "h/t"] {
            let err = ConfigValidator::validate(&with_protocols(&[bad])).unwrap_err();
            assert!(
                matches!(err, Error::Validation { ref field, .. } if field == "protocols"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_protocols_duplicate() {
        let err = ConfigValidator::validate(&with_protocols(&["jar", "JAR"])).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
