#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # locconv
//!
//! A library for converting between the four ways a location can be
//! written down: plain file names, platform paths, URI references and URLs.
//!
//! Every ordered pair of distinct kinds is a conversion direction. Each
//! direction is available as a strict `as_*` call that explains failures and
//! as a soft `to_*` call that returns `None` instead.
//!
//! ## Core Types
//!
//! - [`FileReference`], [`PathReference`], [`UriReference`] and
//!   [`UrlReference`]: The four location kinds
//! - [`Converter`] and [`ConvertTo`]: The conversion matrix
//! - [`Platform`] and [`PlatformPolicy`]: Separator, drive and forbidden
//!   character rules
//! - [`Error`], [`ConversionError`] and [`Result`]: Error handling types
//! - [`LoadHelper`]: Resolving names against per-context base URLs
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use locconv::{Converter, LocationKind};
//!
//! let conv = Converter::posix();
//!
//! let file = conv.file("/tmp/my file.txt");
//! let url = conv.as_url(Some(&file)).unwrap();
//! assert_eq!(url.to_string(), "file:/tmp/my%20file.txt");
//!
//! // Absent input is reported, not panicked on
//! let err = conv.as_uri::<locconv::PathReference>(None).unwrap_err();
//! assert!(err.is_null_source());
//! assert_eq!(err.target_kind(), LocationKind::Uri);
//!
//! // Soft calls swallow the error
//! let http = conv.uri("http://example.com/x").unwrap();
//! assert!(conv.to_path(Some(&http)).is_none());
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod platform;
pub mod reference;
pub mod resolve;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use convert::{ConvertTo, Converter};
pub use error::{ConversionError, Error, Result};
pub use logging::{init_logger, init_logger_with_config, LogLevel, Logger};
pub use platform::{Platform, PlatformPolicy};
pub use reference::{
    FileReference, Location, LocationKind, PathReference, PathRoot, ProtocolRegistry,
    UriReference, UrlReference,
};
pub use resolve::{BaseLocationLoadHelper, LoadHelper};
