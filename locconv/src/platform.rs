//! Platform policies.
//!
//! Every rule that differs between operating systems is answered by a
//! [`PlatformPolicy`]: separator characters, drive letters, forbidden
//! characters and the URI form of rooted paths. Two policies exist:
//! [`Posix`] and [`Windows`].
//!
//! A process-wide policy is selected once, either explicitly with [`select`]
//! or implicitly from the host on first use of [`current`]. It is read-only
//! afterwards. Tests that need the other platform construct a
//! [`Converter`](crate::Converter) with an explicit policy instead of
//! touching the process-wide one.
//!
//! # Examples
//!
//! ```
//! use locconv::platform::{Platform, PlatformPolicy};
//!
//! let windows = Platform::Windows.policy();
//! assert!(windows.is_separator('\\'));
//! assert_eq!(windows.drive_letter("c:/some/path"), Some('c'));
//!
//! let posix = Platform::Posix.policy();
//! assert!(!posix.is_separator('\\'));
//! assert_eq!(posix.drive_letter("c:/some/path"), None);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifies a platform policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// POSIX-like rules.
    Posix,
    /// Windows-like rules.
    Windows,
}

impl Platform {
    /// The platform the library was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The policy implementing this platform's rules.
    #[must_use]
    pub fn policy(self) -> &'static dyn PlatformPolicy {
        match self {
            Self::Posix => &Posix,
            Self::Windows => &Windows,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Parses `posix`/`unix` or `windows`/`win`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "platform".into(),
                message: format!("unknown platform '{s}' (expected 'posix' or 'windows')"),
            }),
        }
    }
}

/// The rules a platform imposes on file and path references.
///
/// Implementations are stateless; all conversions read them through a
/// `&'static dyn PlatformPolicy`.
pub trait PlatformPolicy: fmt::Debug + Send + Sync {
    /// The platform this policy implements.
    fn platform(&self) -> Platform;

    /// Whether `c` separates path segments. `/` always does.
    fn is_separator(&self, c: char) -> bool;

    /// Whether `X:` prefixes denote drives.
    fn recognizes_drives(&self) -> bool;

    /// Whether `c` may not appear inside a path segment.
    fn is_forbidden(&self, c: char) -> bool;

    /// Whether a single leading separator makes a path absolute.
    ///
    /// Absolute paths print as URIs with the `file` scheme.
    fn rooted_paths_are_absolute(&self) -> bool;

    /// Whether `//host/rest` prints as `file://host/rest`.
    ///
    /// Otherwise it prints as `file:////host/rest`.
    fn unc_as_authority(&self) -> bool;

    /// Returns the drive letter if `s` starts with a drive designator.
    ///
    /// A designator is an ASCII letter and `:`, followed by a separator or
    /// the end of the string.
    fn drive_letter(&self, s: &str) -> Option<char> {
        if !self.recognizes_drives() {
            return None;
        }
        let mut chars = s.chars();
        let letter = chars.next().filter(char::is_ascii_alphabetic)?;
        if chars.next() != Some(':') {
            return None;
        }
        match chars.next() {
            None => Some(letter),
            Some(c) if c == '/' || self.is_separator(c) => Some(letter),
            Some(_) => None,
        }
    }
}

/// POSIX-like policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posix;

impl PlatformPolicy for Posix {
    fn platform(&self) -> Platform {
        Platform::Posix
    }

    fn is_separator(&self, c: char) -> bool {
        c == '/'
    }

    fn recognizes_drives(&self) -> bool {
        false
    }

    fn is_forbidden(&self, c: char) -> bool {
        c == '\0'
    }

    fn rooted_paths_are_absolute(&self) -> bool {
        true
    }

    fn unc_as_authority(&self) -> bool {
        true
    }
}

/// Windows-like policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Windows;

impl PlatformPolicy for Windows {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn is_separator(&self, c: char) -> bool {
        c == '/' || c == '\\'
    }

    fn recognizes_drives(&self) -> bool {
        true
    }

    fn is_forbidden(&self, c: char) -> bool {
        c.is_control() || matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*' | '#')
    }

    fn rooted_paths_are_absolute(&self) -> bool {
        false
    }

    fn unc_as_authority(&self) -> bool {
        false
    }
}

static SELECTED: OnceLock<Platform> = OnceLock::new();

/// The process-wide policy.
///
/// The first call without a prior [`select`] fixes the host platform.
#[must_use]
pub fn current() -> &'static dyn PlatformPolicy {
    SELECTED
        .get_or_init(|| {
            let host = Platform::host();
            log::debug!("using host platform policy '{host}'");
            host
        })
        .policy()
}

/// Fixes the process-wide policy.
///
/// Must run before the first conversion that relies on the process-wide
/// policy. Selecting the platform that is already in effect is a no-op.
///
/// # Errors
///
/// Returns [`Error::PolicyAlreadySelected`] if a different platform is
/// already in effect.
pub fn select(platform: Platform) -> Result<()> {
    let current = *SELECTED.get_or_init(|| platform);
    if current != platform {
        return Err(Error::PolicyAlreadySelected { current });
    }
    log::debug!("platform policy '{platform}' selected");
    Ok(())
}
