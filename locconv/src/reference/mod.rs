//! The four location kinds and their parsing and printing rules.
//!
//! - [`FileReference`]: an OS-native string; any input is accepted.
//! - [`PathReference`]: a validated segment sequence.
//! - [`UriReference`]: an RFC 3986 reference, independent of the platform.
//! - [`UrlReference`]: a URI-shaped value with a registered protocol.
//!
//! Printing through [`Display`](std::fmt::Display) is total for all four.

pub(crate) mod encoding;
mod file;
mod kind;
mod layout;
mod path;
mod uri;
mod url;

pub use file::FileReference;
pub use kind::{Location, LocationKind};
pub use layout::PathRoot;
pub use path::PathReference;
pub use uri::UriReference;
pub use url::{ProtocolRegistry, UrlReference, DEFAULT_PROTOCOLS};

pub(crate) use layout::Layout;
pub(crate) use uri::{authority_char, path_char, query_char, Components};
