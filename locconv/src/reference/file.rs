//! OS-native file references.

use std::fmt;

use super::kind::{Location, LocationKind};
use super::layout::Layout;
use crate::platform::PlatformPolicy;

/// An OS-native hierarchical location string.
///
/// Construction never fails: any string is a legal, if meaningless, file
/// reference. The stored form is normalized: policy separators become `/`,
/// two or more leading separators fold to two, and trailing or repeated
/// separators are dropped. Equality is identity of that normalized string;
/// the filesystem is never consulted.
///
/// # Examples
///
/// ```
/// use locconv::Converter;
///
/// let windows = Converter::windows();
/// assert_eq!(windows.file("c:\\some\\path\\").as_str(), "c:/some/path");
///
/// let posix = Converter::posix();
/// assert_eq!(posix.file("///myProject/folder").as_str(), "//myProject/folder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileReference {
    value: String,
}

impl FileReference {
    /// Normalizes `raw` under `policy`.
    #[must_use]
    pub fn new(raw: &str, policy: &dyn PlatformPolicy) -> Self {
        Self {
            value: Layout::split(raw, policy).to_string(),
        }
    }

    /// The normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this is the empty reference.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) fn layout(&self, policy: &dyn PlatformPolicy) -> Layout {
        Layout::split(&self.value, policy)
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for FileReference {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Location for FileReference {
    const KIND: LocationKind = LocationKind::File;
}
