//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::platform::Platform;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; see
/// [`ConfigMerger`](super::ConfigMerger) for how layers combine.
///
/// # Examples
///
/// ```
/// use locconv::{Config, Platform};
///
/// let config: Config = serde_yaml::from_str(
///     "platform: windows\nprotocols: [platform, bundleresource]\n",
/// )
/// .unwrap();
/// assert_eq!(config.platform, Some(Platform::Windows));
/// assert_eq!(config.protocols.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Platform policy used for file and path references.
    pub platform: Option<Platform>,

    /// Extra URL protocols on top of the defaults.
    pub protocols: Option<Vec<String>>,

    /// Verbosity of the stderr logger.
    pub log_mode: Option<LogLevel>,
}
