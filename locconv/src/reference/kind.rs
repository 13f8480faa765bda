//! Kind tags shared by the four reference types.

use std::fmt;
use std::hash::Hash;

/// The four ways of naming a location.
///
/// # Examples
///
/// ```
/// use locconv::LocationKind;
///
/// assert_eq!(LocationKind::Uri.to_string(), "URI");
/// assert_eq!(LocationKind::File.to_string(), "file reference");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocationKind {
    /// An OS-native location string.
    File,
    /// A normalized, validated segment sequence.
    Path,
    /// An RFC 3986 URI reference.
    Uri,
    /// A URI that always carries a registered protocol.
    Url,
}

impl LocationKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::File, Self::Path, Self::Uri, Self::Url];
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file reference"),
            Self::Path => write!(f, "path reference"),
            Self::Uri => write!(f, "URI"),
            Self::Url => write!(f, "URL"),
        }
    }
}

/// A value of one of the four location kinds.
///
/// Every location prints to its canonical external string through
/// [`Display`](fmt::Display); printing never fails.
pub trait Location: fmt::Display + fmt::Debug + Clone + PartialEq + Eq + Hash {
    /// The kind tag of this representation.
    const KIND: LocationKind;
}
