//! Error types for the locconv library.
//!
//! Two layers of errors exist:
//!
//! - [`Error`] describes why a raw string or a reference could not be
//!   parsed, represented, or configured.
//! - [`ConversionError`] is what the strict (`as_*`) conversions return. It
//!   carries the source value and the source/target kinds, and chains the
//!   underlying [`Error`] as its cause.
//!
//! Both use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::reference::LocationKind;

/// Result type alias for operations that may fail with a locconv error.
///
/// # Examples
///
/// ```
/// use locconv::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("file:/some/path")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the locconv library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path contains a character the platform policy forbids.
    #[error("invalid path '{input}': {reason}")]
    InvalidPath {
        /// The rejected input.
        input: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A string does not follow the URI reference grammar.
    #[error("malformed URI '{input}': {reason}")]
    MalformedUri {
        /// The rejected input.
        input: String,
        /// The reason the URI is malformed.
        reason: String,
    },

    /// A string cannot be read as a URL.
    #[error("malformed URL '{input}': {reason}")]
    MalformedUrl {
        /// The rejected input.
        input: String,
        /// The reason the URL is malformed.
        reason: String,
    },

    /// The scheme cannot be mapped onto a file or path reference.
    #[error("unsupported scheme '{scheme}'")]
    UnsupportedScheme {
        /// The scheme that was found.
        scheme: String,
    },

    /// A URI component has no counterpart in the target representation.
    #[error("{component} component cannot be represented in a {target}")]
    UnrepresentableComponent {
        /// The component name (`query`, `fragment`, ...).
        component: &'static str,
        /// The kind that cannot hold the component.
        target: LocationKind,
    },

    /// A URL requires a scheme but the URI reference has none.
    #[error("'{input}' has no scheme")]
    MissingScheme {
        /// The schemeless reference.
        input: String,
    },

    /// The protocol has no registered handler.
    #[error("unknown protocol '{protocol}'")]
    UnknownProtocol {
        /// The unregistered protocol.
        protocol: String,
    },

    /// A load helper was asked about a context it does not know.
    #[error("no base location registered for context '{context}'")]
    UnknownContext {
        /// The requested context.
        context: String,
    },

    /// The process-wide platform policy was already fixed.
    #[error("platform policy already selected: {current}")]
    PolicyAlreadySelected {
        /// The platform that is in effect.
        current: crate::platform::Platform,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A strict conversion failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Error returned by the strict `as_*` conversions.
///
/// # Examples
///
/// ```
/// use locconv::{Converter, LocationKind};
///
/// let conv = Converter::posix();
/// let uri = conv.uri("file:/myProject/myFolder?query#fragment").unwrap();
/// let err = conv.as_file(Some(&uri)).unwrap_err();
///
/// assert!(err.is_unconvertible());
/// assert_eq!(err.source_kind(), LocationKind::Uri);
/// assert_eq!(err.target_kind(), LocationKind::File);
/// ```
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The source value has no representation in the target kind.
    #[error("cannot convert {source_kind} '{value}' to {target_kind}")]
    Unconvertible {
        /// Printed form of the source value.
        value: String,
        /// Kind of the source value.
        source_kind: LocationKind,
        /// Requested target kind.
        target_kind: LocationKind,
        /// Underlying reason, if known.
        #[source]
        cause: Option<Box<Error>>,
    },

    /// A strict conversion was called without a source value.
    #[error("{source_kind} required for conversion to {target_kind}, got none")]
    NullSource {
        /// Kind of the missing source value.
        source_kind: LocationKind,
        /// Requested target kind.
        target_kind: LocationKind,
    },
}

impl ConversionError {
    pub(crate) fn unconvertible(
        value: impl ToString,
        source_kind: LocationKind,
        target_kind: LocationKind,
        cause: Error,
    ) -> Self {
        Self::Unconvertible {
            value: value.to_string(),
            source_kind,
            target_kind,
            cause: Some(Box::new(cause)),
        }
    }

    /// Re-tags a failure of an intermediate step with the outer source value
    /// and kinds, keeping the underlying cause.
    pub(crate) fn rewrap(
        self,
        value: impl ToString,
        source_kind: LocationKind,
        target_kind: LocationKind,
    ) -> Self {
        let cause = match self {
            Self::Unconvertible { cause, .. } => cause,
            Self::NullSource { .. } => None,
        };
        Self::Unconvertible {
            value: value.to_string(),
            source_kind,
            target_kind,
            cause,
        }
    }

    /// Printed form of the source value, if one was given.
    #[must_use]
    pub fn source_value(&self) -> Option<&str> {
        match self {
            Self::Unconvertible { value, .. } => Some(value),
            Self::NullSource { .. } => None,
        }
    }

    /// Kind of the source value.
    #[must_use]
    pub fn source_kind(&self) -> LocationKind {
        match self {
            Self::Unconvertible { source_kind, .. } | Self::NullSource { source_kind, .. } => {
                *source_kind
            }
        }
    }

    /// Requested target kind.
    #[must_use]
    pub fn target_kind(&self) -> LocationKind {
        match self {
            Self::Unconvertible { target_kind, .. } | Self::NullSource { target_kind, .. } => {
                *target_kind
            }
        }
    }

    /// The underlying reason of an unconvertible value.
    #[must_use]
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Self::Unconvertible { cause, .. } => cause.as_deref(),
            Self::NullSource { .. } => None,
        }
    }

    /// Check if the error is a precondition violation (no source value).
    ///
    /// # Examples
    ///
    /// ```
    /// use locconv::{Converter, FileReference};
    ///
    /// let conv = Converter::posix();
    /// let err = conv.as_uri(None::<&FileReference>).unwrap_err();
    /// assert!(err.is_null_source());
    /// ```
    #[must_use]
    pub fn is_null_source(&self) -> bool {
        matches!(self, Self::NullSource { .. })
    }

    /// Check if the error reports a representational mismatch.
    #[must_use]
    pub fn is_unconvertible(&self) -> bool {
        matches!(self, Self::Unconvertible { .. })
    }
}
