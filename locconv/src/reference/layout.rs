//! Splitting raw file strings into a root and segments.

use std::fmt;

use crate::platform::PlatformPolicy;

/// How a hierarchical location is anchored.
///
/// # Examples
///
/// ```
/// use locconv::{Converter, PathRoot};
///
/// let posix = Converter::posix();
/// assert_eq!(posix.path("////myProject/folder").unwrap().root(), PathRoot::DoubleSlash);
///
/// let windows = Converter::windows();
/// assert_eq!(windows.path("/c:/x").unwrap().root(), PathRoot::Drive('c'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRoot {
    /// No leading separator.
    Relative,
    /// Exactly one leading separator.
    Slash,
    /// Two or more leading separators, folded to two.
    DoubleSlash,
    /// `X:/`, a drive followed by a separator.
    Drive(char),
    /// A bare `X:`.
    DriveRelative(char),
}

impl fmt::Display for PathRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative => Ok(()),
            Self::Slash => f.write_str("/"),
            Self::DoubleSlash => f.write_str("//"),
            Self::Drive(letter) => write!(f, "{letter}:/"),
            Self::DriveRelative(letter) => write!(f, "{letter}:"),
        }
    }
}

/// A root plus its non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) root: PathRoot,
    pub(crate) segments: Vec<String>,
}

impl Layout {
    /// Splits `raw` under `policy`.
    ///
    /// Policy separators become `/`, empty segments disappear (collapsing
    /// interior and trailing separators), and `.`/`..` are kept as written.
    pub(crate) fn split(raw: &str, policy: &dyn PlatformPolicy) -> Self {
        let unified: String = raw
            .chars()
            .map(|c| if policy.is_separator(c) { '/' } else { c })
            .collect();
        let rest = unified.trim_start_matches('/');
        let leading = unified.len() - rest.len();

        // A drive after a single slash is the URI spelling of a drive path.
        let (root, body) = match policy.drive_letter(rest) {
            Some(letter) if leading <= 1 => {
                let after = &rest[2..];
                if after.is_empty() {
                    (PathRoot::DriveRelative(letter), after)
                } else {
                    (PathRoot::Drive(letter), after)
                }
            }
            _ => {
                let root = match leading {
                    0 => PathRoot::Relative,
                    1 => PathRoot::Slash,
                    _ => PathRoot::DoubleSlash,
                };
                (root, rest)
            }
        };

        let segments = body
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self { root, segments }
    }

    /// The first segment containing a character `policy` forbids.
    pub(crate) fn forbidden(&self, policy: &dyn PlatformPolicy) -> Option<(&str, char)> {
        self.segments.iter().find_map(|segment| {
            segment
                .chars()
                .find(|&c| policy.is_forbidden(c))
                .map(|c| (segment.as_str(), c))
        })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.segments.join("/"))
    }
}
