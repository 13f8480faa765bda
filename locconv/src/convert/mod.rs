//! The conversion matrix.
//!
//! Each of the twelve directions between the four location kinds is an
//! implementation of [`ConvertTo`]. The [`Converter`] binds a platform
//! policy and a protocol registry, and exposes every direction twice:
//!
//! - strict `as_*` methods return `Result<_, ConversionError>` and reject an
//!   absent source with [`ConversionError::NullSource`];
//! - soft `to_*` methods return `Option<_>` and are the strict result with
//!   the error discarded.
//!
//! Conversions are pure: they never touch the filesystem, never log and
//! never mutate their input.
//!
//! # Examples
//!
//! ```
//! use locconv::Converter;
//!
//! let conv = Converter::windows();
//! let file = conv.file("c:\\some\\path\\MyFile.ext");
//!
//! let uri = conv.as_uri(Some(&file)).unwrap();
//! assert_eq!(uri.to_string(), "file:/c:/some/path/MyFile.ext");
//!
//! let back = conv.as_file(Some(&uri)).unwrap();
//! assert_eq!(back.as_str(), "c:/some/path/MyFile.ext");
//!
//! let mailto = conv.uri("mailto:test@example.com").unwrap();
//! assert!(conv.to_file(Some(&mailto)).is_none());
//! ```

mod from_file;
mod from_path;
mod from_uri;
mod from_url;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use crate::config::Config;
use crate::error::{ConversionError, Result};
use crate::platform::{self, Platform, PlatformPolicy};
use crate::reference::{
    FileReference, Location, PathReference, ProtocolRegistry, UriReference, UrlReference,
};

pub(crate) const FILE_SCHEME: &str = "file";

/// A direction of the conversion matrix.
///
/// Implemented once for each ordered pair of distinct location kinds, so a
/// conversion from a kind to itself does not type-check.
pub trait ConvertTo<T: Location>: Location {
    /// Converts `self` under the converter's policy and protocol registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Unconvertible`] if `self` has no
    /// representation as a `T`.
    fn convert_to(&self, converter: &Converter) -> std::result::Result<T, ConversionError>;
}

/// Tags a failed conversion step with the source value and both kinds.
pub(crate) fn tag<S: Location, T: Location>(
    source: &S,
    result: Result<T>,
) -> std::result::Result<T, ConversionError> {
    result.map_err(|cause| ConversionError::unconvertible(source, S::KIND, T::KIND, cause))
}

/// Entry point for parsing and converting locations.
///
/// A converter is cheap to clone and immutable; share it freely between
/// threads.
#[derive(Debug, Clone)]
pub struct Converter {
    policy: &'static dyn PlatformPolicy,
    protocols: ProtocolRegistry,
}

impl Default for Converter {
    /// Uses the process-wide policy from [`platform::current`].
    fn default() -> Self {
        Self::new(platform::current())
    }
}

impl Converter {
    /// Creates a converter for `policy` with the default protocols.
    #[must_use]
    pub fn new(policy: &'static dyn PlatformPolicy) -> Self {
        Self {
            policy,
            protocols: ProtocolRegistry::default(),
        }
    }

    /// Creates a converter for `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.policy())
    }

    /// POSIX-like rules.
    #[must_use]
    pub fn posix() -> Self {
        Self::for_platform(Platform::Posix)
    }

    /// Windows-like rules.
    #[must_use]
    pub fn windows() -> Self {
        Self::for_platform(Platform::Windows)
    }

    /// The rules of the platform the library was compiled for.
    #[must_use]
    pub fn host() -> Self {
        Self::for_platform(Platform::host())
    }

    /// Replaces the protocol registry.
    #[must_use]
    pub fn with_protocols(mut self, protocols: ProtocolRegistry) -> Self {
        self.protocols = protocols;
        self
    }

    /// Builds a converter from configuration.
    ///
    /// Without a configured platform the process-wide policy is used.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if a configured protocol is not a
    /// valid scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use locconv::{Config, Converter, Platform};
    ///
    /// let config = Config {
    ///     platform: Some(Platform::Windows),
    ///     protocols: Some(vec!["platform".to_string()]),
    ///     ..Config::default()
    /// };
    /// let conv = Converter::from_config(&config).unwrap();
    /// assert_eq!(conv.platform(), Platform::Windows);
    /// assert!(conv.url("platform:/resource/x").is_ok());
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        let policy = config
            .platform
            .map_or_else(platform::current, Platform::policy);
        let protocols =
            ProtocolRegistry::with_protocols(config.protocols.iter().flatten())?;
        Ok(Self { policy, protocols })
    }

    /// The policy in effect.
    #[must_use]
    pub fn policy(&self) -> &'static dyn PlatformPolicy {
        self.policy
    }

    /// The platform in effect.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.policy.platform()
    }

    /// The protocols URLs may carry.
    #[must_use]
    pub fn protocols(&self) -> &ProtocolRegistry {
        &self.protocols
    }

    /// Parses a file reference. Never fails.
    #[must_use]
    pub fn file(&self, raw: &str) -> FileReference {
        FileReference::new(raw, self.policy)
    }

    /// Parses a path reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] for characters the policy forbids.
    pub fn path(&self, raw: &str) -> Result<PathReference> {
        PathReference::parse(raw, self.policy)
    }

    /// Parses a URI reference.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedUri`] if `raw` breaks the URI grammar.
    pub fn uri(&self, raw: &str) -> Result<UriReference> {
        UriReference::parse(raw)
    }

    /// Parses a URL against this converter's protocols.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedUrl`] without a protocol and
    /// [`crate::Error::UnknownProtocol`] for an unregistered one.
    pub fn url(&self, raw: &str) -> Result<UrlReference> {
        UrlReference::parse_with(raw, &self.protocols)
    }

    /// Strict conversion into any kind `S` converts to.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::NullSource`] if `source` is `None` and
    /// [`ConversionError::Unconvertible`] if the value has no `T` form.
    pub fn convert<S, T>(&self, source: Option<&S>) -> std::result::Result<T, ConversionError>
    where
        S: ConvertTo<T>,
        T: Location,
    {
        let source = source.ok_or(ConversionError::NullSource {
            source_kind: S::KIND,
            target_kind: T::KIND,
        })?;
        source.convert_to(self)
    }

    /// Strict conversion to a file reference.
    ///
    /// # Errors
    ///
    /// See [`Converter::convert`].
    pub fn as_file<S>(&self, source: Option<&S>) -> std::result::Result<FileReference, ConversionError>
    where
        S: ConvertTo<FileReference>,
    {
        self.convert(source)
    }

    /// Strict conversion to a path reference.
    ///
    /// # Errors
    ///
    /// See [`Converter::convert`].
    pub fn as_path<S>(&self, source: Option<&S>) -> std::result::Result<PathReference, ConversionError>
    where
        S: ConvertTo<PathReference>,
    {
        self.convert(source)
    }

    /// Strict conversion to a URI reference.
    ///
    /// # Errors
    ///
    /// See [`Converter::convert`].
    pub fn as_uri<S>(&self, source: Option<&S>) -> std::result::Result<UriReference, ConversionError>
    where
        S: ConvertTo<UriReference>,
    {
        self.convert(source)
    }

    /// Strict conversion to a URL.
    ///
    /// # Errors
    ///
    /// See [`Converter::convert`].
    pub fn as_url<S>(&self, source: Option<&S>) -> std::result::Result<UrlReference, ConversionError>
    where
        S: ConvertTo<UrlReference>,
    {
        self.convert(source)
    }

    /// Soft conversion to a file reference.
    #[must_use]
    pub fn to_file<S>(&self, source: Option<&S>) -> Option<FileReference>
    where
        S: ConvertTo<FileReference>,
    {
        self.as_file(source).ok()
    }

    /// Soft conversion to a path reference.
    #[must_use]
    pub fn to_path<S>(&self, source: Option<&S>) -> Option<PathReference>
    where
        S: ConvertTo<PathReference>,
    {
        self.as_path(source).ok()
    }

    /// Soft conversion to a URI reference.
    #[must_use]
    pub fn to_uri<S>(&self, source: Option<&S>) -> Option<UriReference>
    where
        S: ConvertTo<UriReference>,
    {
        self.as_uri(source).ok()
    }

    /// Soft conversion to a URL.
    #[must_use]
    pub fn to_url<S>(&self, source: Option<&S>) -> Option<UrlReference>
    where
        S: ConvertTo<UrlReference>,
    {
        self.as_url(source).ok()
    }
}

impl From<Platform> for Converter {
    fn from(platform: Platform) -> Self {
        Self::for_platform(platform)
    }
}
