//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use locconv::{Config, Platform};
/// use locconv::config::ConfigMerger;
///
/// let low = Config { platform: Some(Platform::Posix), ..Default::default() };
/// let high = Config { platform: Some(Platform::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.platform, Some(Platform::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `platform`, `log_mode`: source overwrites if `Some`
    /// - `protocols`: concatenated, keeping the first occurrence of each
    ///   protocol (compared case-insensitively)
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }

        if let Some(ref source_protocols) = source.protocols {
            let merged = target.protocols.get_or_insert_with(Vec::new);
            merged.extend(source_protocols.iter().cloned());
            Self::dedup_protocols(merged);
        }
    }

    fn dedup_protocols(protocols: &mut Vec<String>) {
        let mut seen = std::collections::HashSet::new();
        protocols.retain(|p| seen.insert(p.to_ascii_lowercase()));
    }
}
