//! Reference resolution and load helpers.
//!
//! [`UriReference::resolve`] implements the RFC 3986 section 5.2 algorithm.
//! A [`LoadHelper`] turns a relative name plus a named context into the most
//! local URL for it; [`BaseLocationLoadHelper`] does so from a fixed table
//! of base locations. Nothing here checks that a location exists.

use std::collections::BTreeMap;

use crate::convert::Converter;
use crate::error::{Error, Result};
use crate::reference::{FileReference, UriReference, UrlReference};

impl UriReference {
    /// Resolves `reference` against `self` as the base.
    ///
    /// # Examples
    ///
    /// ```
    /// use locconv::UriReference;
    ///
    /// let base = UriReference::parse("file:/project/models/").unwrap();
    /// let rel = UriReference::parse("../data/My%20File.ext").unwrap();
    /// assert_eq!(base.resolve(&rel).to_string(), "file:/project/data/My%20File.ext");
    ///
    /// let base = UriReference::parse("http://a/b/c/d;p?q").unwrap();
    /// let rel = UriReference::parse("g?y#s").unwrap();
    /// assert_eq!(base.resolve(&rel).to_string(), "http://a/b/c/g?y#s");
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &UriReference) -> UriReference {
        let fragment = reference.fragment().map(str::to_string);

        if reference.scheme().is_some() {
            return UriReference::from_parts(
                reference.scheme().map(str::to_string),
                reference.authority().map(str::to_string),
                remove_dot_segments(reference.path()),
                reference.query().map(str::to_string),
                fragment,
            );
        }

        let scheme = self.scheme().map(str::to_string);
        if reference.authority().is_some() {
            return UriReference::from_parts(
                scheme,
                reference.authority().map(str::to_string),
                remove_dot_segments(reference.path()),
                reference.query().map(str::to_string),
                fragment,
            );
        }

        let authority = self.authority().map(str::to_string);
        let (path, query) = if reference.path().is_empty() {
            let query = reference.query().or(self.query()).map(str::to_string);
            (self.path().to_string(), query)
        } else if reference.path().starts_with('/') {
            (
                remove_dot_segments(reference.path()),
                reference.query().map(str::to_string),
            )
        } else {
            (
                remove_dot_segments(&self.merge(reference.path())),
                reference.query().map(str::to_string),
            )
        };
        UriReference::from_parts(scheme, authority, path, query, fragment)
    }

    fn merge(&self, relative: &str) -> String {
        if self.authority().is_some() && self.path().is_empty() {
            return format!("/{relative}");
        }
        match self.path().rfind('/') {
            Some(idx) => format!("{}{relative}", &self.path()[..=idx]),
            None => relative.to_string(),
        }
    }
}

/// Removes `.` and `..` segments from an absolute or relative path.
fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output: Vec<&str> = Vec::new();

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            output.pop();
        } else if input == "/.." {
            input = "/";
            output.pop();
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push(&input[..end]);
            input = &input[end..];
        }
    }
    output.concat()
}

/// Finds the most local URL for a name relative to a context.
pub trait LoadHelper {
    /// Resolves `relative_name` within `context`.
    ///
    /// # Errors
    ///
    /// Implementations report unknown contexts and names that cannot be
    /// expressed as a URL.
    fn to_localmost_url(&self, context: &str, relative_name: &str) -> Result<UrlReference>;
}

/// A [`LoadHelper`] backed by a table of base locations.
///
/// Each context maps to a base URL that is treated as a folder. The relative
/// name is read as a file reference under the converter's policy, so on
/// Windows both separators work.
///
/// # Examples
///
/// ```
/// use locconv::{BaseLocationLoadHelper, Converter, LoadHelper};
///
/// let conv = Converter::posix();
/// let base = conv.url("file:/workspace/project").unwrap();
/// let helper = BaseLocationLoadHelper::new(conv).with_base("models", base);
///
/// let url = helper.to_localmost_url("models", "sub/My Model.ext").unwrap();
/// assert_eq!(url.to_string(), "file:/workspace/project/sub/My%20Model.ext");
///
/// let file = helper.to_localmost_file("models", "../other.ext").unwrap();
/// assert_eq!(file.as_str(), "/workspace/other.ext");
///
/// assert!(helper.to_localmost_url("unknown", "x").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BaseLocationLoadHelper {
    converter: Converter,
    bases: BTreeMap<String, UrlReference>,
}

impl BaseLocationLoadHelper {
    /// A helper with no contexts.
    #[must_use]
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            bases: BTreeMap::new(),
        }
    }

    /// Registers `base` for `context`, replacing any earlier base.
    #[must_use]
    pub fn with_base(mut self, context: impl Into<String>, base: UrlReference) -> Self {
        self.bases.insert(context.into(), base);
        self
    }

    /// The base registered for `context`.
    #[must_use]
    pub fn base(&self, context: &str) -> Option<&UrlReference> {
        self.bases.get(context)
    }

    /// Like [`LoadHelper::to_localmost_url`], converted to a file reference.
    ///
    /// # Errors
    ///
    /// Fails as `to_localmost_url` does, or with [`Error::Conversion`] if the
    /// URL has no file form.
    pub fn to_localmost_file(&self, context: &str, relative_name: &str) -> Result<FileReference> {
        let url = self.to_localmost_url(context, relative_name)?;
        Ok(self.converter.as_file(Some(&url))?)
    }
}

impl LoadHelper for BaseLocationLoadHelper {
    fn to_localmost_url(&self, context: &str, relative_name: &str) -> Result<UrlReference> {
        let base = self.bases.get(context).ok_or_else(|| Error::UnknownContext {
            context: context.to_string(),
        })?;

        let conv = &self.converter;
        let relative = conv.as_uri(Some(&conv.file(relative_name)))?;
        let base = conv.as_uri(Some(base))?.as_folder();
        let resolved = base.resolve(&relative);
        log::trace!("resolved '{relative_name}' in context '{context}' to {resolved}");

        Ok(conv.as_url(Some(&resolved))?)
    }
}
