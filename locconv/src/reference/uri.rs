//! RFC 3986 URI references.

use std::fmt;

use super::encoding::{is_escape_at, is_pchar, is_sub_delim, is_unreserved, split_scheme};
use super::kind::{Location, LocationKind};
use crate::error::{Error, Result};

/// The components of a URI reference after the scheme, split without any
/// character validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub(crate) authority: Option<&'a str>,
    pub(crate) path: &'a str,
    pub(crate) query: Option<&'a str>,
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    /// Splits `[//authority] path [?query] [#fragment]`.
    pub(crate) fn split(rest: &'a str) -> Self {
        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };
        Self {
            authority,
            path,
            query,
            fragment,
        }
    }
}

/// Characters allowed verbatim in an authority.
pub(crate) fn authority_char(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || matches!(c, ':' | '@' | '[' | ']') || !c.is_ascii()
}

/// Characters allowed verbatim in a path.
pub(crate) fn path_char(c: char) -> bool {
    is_pchar(c) || c == '/'
}

/// Characters allowed verbatim in a query or fragment.
pub(crate) fn query_char(c: char) -> bool {
    is_pchar(c) || c == '/' || c == '?'
}

fn validate(input: &str, component: &str, name: &str, allowed: fn(char) -> bool) -> Result<()> {
    for (i, c) in component.char_indices() {
        let ok = if c == '%' {
            is_escape_at(component, i)
        } else {
            allowed(c)
        };
        if !ok {
            return Err(Error::MalformedUri {
                input: input.to_string(),
                reason: format!("illegal character {c:?} in {name}"),
            });
        }
    }
    Ok(())
}

/// A URI reference: optional scheme, optional authority, a path, optional
/// query and optional fragment.
///
/// Parsing follows the RFC 3986 grammar and does not depend on the
/// platform. Components are stored in their encoded form, so printing a
/// parsed reference reproduces the input.
///
/// # Examples
///
/// ```
/// use locconv::UriReference;
///
/// let uri = UriReference::parse("file://host/some/path?q#f").unwrap();
/// assert_eq!(uri.scheme(), Some("file"));
/// assert_eq!(uri.authority(), Some("host"));
/// assert_eq!(uri.path(), "/some/path");
/// assert_eq!(uri.query(), Some("q"));
/// assert_eq!(uri.fragment(), Some("f"));
/// assert_eq!(uri.to_string(), "file://host/some/path?q#f");
///
/// assert!(UriReference::parse("").unwrap().is_empty());
/// assert!(UriReference::parse("a b").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriReference {
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriReference {
    /// Parses a URI reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUri`] if a component contains a character
    /// outside its grammar, a `%` is not followed by two hex digits, or the
    /// first segment of a schemeless relative path contains `:`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = split_scheme(raw);
        let parts = Components::split(rest);

        if let Some(authority) = parts.authority {
            validate(raw, authority, "authority", authority_char)?;
        }
        validate(raw, parts.path, "path", path_char)?;
        if let Some(query) = parts.query {
            validate(raw, query, "query", query_char)?;
        }
        if let Some(fragment) = parts.fragment {
            validate(raw, fragment, "fragment", query_char)?;
        }

        if scheme.is_none() && parts.authority.is_none() {
            let first = parts.path.split('/').next().unwrap_or_default();
            if first.contains(':') {
                return Err(Error::MalformedUri {
                    input: raw.to_string(),
                    reason: "first segment of a relative path contains ':'".to_string(),
                });
            }
        }

        Ok(Self {
            scheme: scheme.map(str::to_string),
            authority: parts.authority.map(str::to_string),
            path: parts.path.to_string(),
            query: parts.query.map(str::to_string),
            fragment: parts.fragment.map(str::to_string),
        })
    }

    /// The empty relative reference.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assembles a reference from already encoded components.
    pub(crate) fn from_parts(
        scheme: Option<String>,
        authority: Option<String>,
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// The scheme, as written.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The encoded authority. `Some("")` for `file:///x`.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The encoded path; may be empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The encoded query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The encoded fragment.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether every component is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheme.is_none()
            && self.authority.is_none()
            && self.path.is_empty()
            && self.query.is_none()
            && self.fragment.is_none()
    }

    /// Whether the reference carries a scheme.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Whether the reference has a scheme but no hierarchical part, like
    /// `mailto:someone@example.com`.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.scheme.is_some()
            && self.authority.is_none()
            && !self.path.is_empty()
            && !self.path.starts_with('/')
    }

    /// Whether the scheme equals `scheme`, ignoring case.
    pub(crate) fn has_scheme(&self, scheme: &str) -> bool {
        self.scheme
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// A copy whose path ends with `/`, so relative references resolve
    /// beneath it instead of replacing its last segment.
    #[must_use]
    pub fn as_folder(&self) -> Self {
        let mut folder = self.clone();
        if !folder.path.ends_with('/') {
            folder.path.push('/');
        }
        folder.query = None;
        folder.fragment = None;
        folder
    }
}

impl fmt::Display for UriReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
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

impl std::str::FromStr for UriReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Location for UriReference {
    const KIND: LocationKind = LocationKind::Uri;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_split() {
        let parts = Components::split("//host/a/b?x=1#top");
        assert_eq!(parts.authority, Some("host"));
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.query, Some("x=1"));
        assert_eq!(parts.fragment, Some("top"));

        let parts = Components::split("////host/share");
        assert_eq!(parts.authority, Some(""));
        assert_eq!(parts.path, "//host/share");

        let parts = Components::split("a?b?c#d#e");
        assert_eq!(parts.path, "a");
        assert_eq!(parts.query, Some("b?c"));
        assert_eq!(parts.fragment, Some("d#e"));
    }

    #[test]
    fn test_parse_absolute() {
        let uri = UriReference::parse("file:/myProject/myFolder?query#fragment").unwrap();
        assert_eq!(uri.scheme(), Some("file"));
        assert_eq!(uri.authority(), None);
        assert_eq!(uri.path(), "/myProject/myFolder");
        assert_eq!(uri.query(), Some("query"));
        assert_eq!(uri.fragment(), Some("fragment"));
        assert!(uri.is_absolute());
        assert!(!uri.is_opaque());
    }

    #[test]
    fn test_parse_opaque() {
        let uri = UriReference::parse("mailto:test@example.com").unwrap();
        assert_eq!(uri.scheme(), Some("mailto"));
        assert_eq!(uri.path(), "test@example.com");
        assert!(uri.is_opaque());
    }

    #[test]
    fn test_parse_empty_parts() {
        let uri = UriReference::parse("file:///x?#").unwrap();
        assert_eq!(uri.authority(), Some(""));
        assert_eq!(uri.query(), Some(""));
        assert_eq!(uri.fragment(), Some(""));
        assert_eq!(uri.to_string(), "file:///x?#");
    }

    #[test]
    fn test_parse_relative() {
        let uri = UriReference::parse("some/path/MyFile.ext").unwrap();
        assert_eq!(uri.scheme(), None);
        assert!(!uri.is_absolute());
        assert!(UriReference::parse("c%3A/x").is_ok());
        assert!(UriReference::parse("a/b:c").is_ok());
    }

    #[test]
    fn test_drive_looks_like_a_scheme() {
        let uri = UriReference::parse("c:/some/path").unwrap();
        assert_eq!(uri.scheme(), Some("c"));
        assert_eq!(uri.path(), "/some/path");
    }

    #[test]
    fn test_malformed() {
        for raw in ["a b", "file:\\some", "%zz", "50%", "file:/a<b", "1a:b", "x?a b"] {
            assert!(
                matches!(UriReference::parse(raw), Err(Error::MalformedUri { .. })),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_non_ascii_is_accepted() {
        let uri = UriReference::parse("file:/caf\u{e9}").unwrap();
        assert_eq!(uri.path(), "/caf\u{e9}");
    }

    #[test]
    fn test_print_parse_idempotent() {
        for raw in [
            "",
            "file:",
            "file:.",
            "file:////host/share",
            "file://myProject/folder",
            "http://user@host:8080/a%20b?x=y#z",
            "../a/./b",
            "#frag",
            "?q",
        ] {
            let uri = UriReference::parse(raw).unwrap();
            assert_eq!(uri.to_string(), raw);
            assert_eq!(UriReference::parse(&uri.to_string()).unwrap(), uri);
        }
    }

    #[test]
    fn test_as_folder() {
        let uri = UriReference::parse("file:/base?q#f").unwrap();
        assert_eq!(uri.as_folder().to_string(), "file:/base/");
        let uri = UriReference::parse("file:/base/").unwrap();
        assert_eq!(uri.as_folder().to_string(), "file:/base/");
    }

    #[test]
    fn test_from_str() {
        let uri: UriReference = "file:/x".parse().unwrap();
        assert!(uri.has_scheme("FILE"));
    }
}
