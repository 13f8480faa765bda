//! Normalized, validated path references.

use std::fmt;

use super::kind::{Location, LocationKind};
use super::layout::{Layout, PathRoot};
use crate::error::{Error, Result};
use crate::platform::PlatformPolicy;

/// A normalized hierarchical sequence of segments.
///
/// Unlike a [`FileReference`](super::FileReference), parsing validates every
/// segment against the characters the platform policy forbids.
///
/// # Examples
///
/// ```
/// use locconv::{Converter, PathRoot};
///
/// let posix = Converter::posix();
/// let path = posix.path("/myProject/myFolder?query#fragment").unwrap();
/// assert_eq!(path.root(), PathRoot::Slash);
/// assert_eq!(path.segments(), ["myProject", "myFolder?query#fragment"]);
///
/// let windows = Converter::windows();
/// assert!(windows.path("/myProject/myFolder?query").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathReference {
    root: PathRoot,
    segments: Vec<String>,
}

impl PathReference {
    /// Parses `raw` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if a segment contains a character the
    /// policy forbids.
    pub fn parse(raw: &str, policy: &dyn PlatformPolicy) -> Result<Self> {
        let layout = Layout::split(raw, policy);
        if let Some((segment, c)) = layout.forbidden(policy) {
            return Err(Error::InvalidPath {
                input: raw.to_string(),
                reason: format!(
                    "segment '{segment}' contains {c:?}, which {} paths forbid",
                    policy.platform()
                ),
            });
        }
        Ok(Self::from_layout(layout))
    }

    pub(crate) fn from_layout(layout: Layout) -> Self {
        Self {
            root: layout.root,
            segments: layout.segments,
        }
    }

    /// How the path is anchored.
    #[must_use]
    pub fn root(&self) -> PathRoot {
        self.root
    }

    /// The non-empty segments after the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether the path has no root and no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root == PathRoot::Relative && self.segments.is_empty()
    }

    pub(crate) fn layout(&self) -> Layout {
        Layout {
            root: self.root,
            segments: self.segments.clone(),
        }
    }
}

impl fmt::Display for PathReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.segments.join("/"))
    }
}

impl Location for PathReference {
    const KIND: LocationKind = LocationKind::Path;
}
