//! URLs and the protocol registry backing them.

use std::collections::BTreeSet;
use std::fmt;

use super::encoding::{is_valid_scheme, split_scheme};
use super::kind::{Location, LocationKind};
use super::uri::Components;
use crate::error::{Error, Result};

/// Protocols every registry knows.
pub const DEFAULT_PROTOCOLS: [&str; 6] = ["file", "http", "https", "ftp", "jar", "mailto"];

/// The set of protocols a [`UrlReference`] may carry.
///
/// Protocols are stored lowercase and compared case-insensitively. The
/// defaults in [`DEFAULT_PROTOCOLS`] are always present.
///
/// # Examples
///
/// ```
/// use locconv::ProtocolRegistry;
///
/// let mut registry = ProtocolRegistry::default();
/// assert!(registry.contains("HTTP"));
/// assert!(!registry.contains("platform"));
///
/// registry.register("platform").unwrap();
/// assert!(registry.contains("platform"));
/// assert!(registry.register("not a scheme").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolRegistry {
    protocols: BTreeSet<String>,
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self {
            protocols: DEFAULT_PROTOCOLS.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

impl ProtocolRegistry {
    /// A registry holding the defaults plus `extra`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if an entry is not a valid scheme.
    pub fn with_protocols<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for protocol in extra {
            registry.register(protocol.as_ref())?;
        }
        Ok(registry)
    }

    /// Adds a protocol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `protocol` is not a valid scheme.
    pub fn register(&mut self, protocol: &str) -> Result<()> {
        if !is_valid_scheme(protocol) {
            return Err(Error::Validation {
                field: "protocols".into(),
                message: format!("'{protocol}' is not a valid scheme"),
            });
        }
        self.protocols.insert(protocol.to_ascii_lowercase());
        Ok(())
    }

    /// Whether `protocol` has a handler.
    #[must_use]
    pub fn contains(&self, protocol: &str) -> bool {
        self.protocols.contains(&protocol.to_ascii_lowercase())
    }

    /// Registered protocols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.protocols.iter().map(String::as_str)
    }

    pub(crate) fn check(&self, protocol: &str) -> Result<()> {
        if self.contains(protocol) {
            Ok(())
        } else {
            Err(Error::UnknownProtocol {
                protocol: protocol.to_string(),
            })
        }
    }
}

/// A URL: a URI-shaped value that always carries a registered protocol.
///
/// Parsing is lenient. Characters that are illegal in a URI, such as
/// spaces or backslashes, are kept as written; converting to a
/// [`UriReference`](super::UriReference) escapes them. A `file` URL with an
/// empty authority is stored without it unless its path is empty or starts
/// with `//`.
///
/// # Examples
///
/// ```
/// use locconv::UrlReference;
///
/// let url = UrlReference::parse("FILE:///some/path").unwrap();
/// assert_eq!(url.protocol(), "file");
/// assert_eq!(url.to_string(), "file:/some/path");
///
/// assert!(UrlReference::parse("some/path").is_err());
/// assert!(UrlReference::parse("unknown:/x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlReference {
    protocol: String,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl UrlReference {
    /// Parses a URL against the default protocol registry.
    ///
    /// # Errors
    ///
    /// See [`UrlReference::parse_with`].
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, &ProtocolRegistry::default())
    }

    /// Parses a URL against `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUrl`] if no protocol prefix is present and
    /// [`Error::UnknownProtocol`] if the protocol is not registered.
    pub fn parse_with(raw: &str, registry: &ProtocolRegistry) -> Result<Self> {
        let (Some(protocol), rest) = split_scheme(raw) else {
            return Err(Error::MalformedUrl {
                input: raw.to_string(),
                reason: "no protocol".to_string(),
            });
        };
        registry.check(protocol)?;

        let parts = Components::split(rest);
        Ok(Self::from_parts(
            protocol,
            parts.authority.map(str::to_string),
            parts.path.to_string(),
            parts.query.map(str::to_string),
            parts.fragment.map(str::to_string),
        ))
    }

    /// Assembles a URL, lowercasing the protocol and dropping an empty
    /// `file` authority when the path allows it.
    pub(crate) fn from_parts(
        protocol: &str,
        authority: Option<String>,
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        let protocol = protocol.to_ascii_lowercase();
        let authority = match authority {
            Some(a)
                if a.is_empty()
                    && protocol == "file"
                    && !path.is_empty()
                    && !path.starts_with("//") =>
            {
                None
            }
            other => other,
        };
        Self {
            protocol,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// The lowercase protocol.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The authority, as written.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The path, as written.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query, as written.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The fragment, as written.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the protocol is `file`.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.protocol == "file"
    }

    /// Whether this is `file:` with nothing after it.
    #[must_use]
    pub fn is_empty_file(&self) -> bool {
        self.is_file()
            && self.authority.is_none()
            && self.path.is_empty()
            && self.query.is_none()
            && self.fragment.is_none()
    }
}

impl fmt::Display for UrlReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.protocol)?;
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for UrlReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Location for UrlReference {
    const KIND: LocationKind = LocationKind::Url;
}
