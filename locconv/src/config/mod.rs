//! Configuration system for locconv.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `locconv.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LOCCONV_*`)
//! 3. Project config (nearest `locconv.yaml`)
//! 4. User config (`~/.locconv/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use locconv::config::ConfigBuilder;
//! use locconv::Converter;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! let converter = Converter::from_config(&config).unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use locconv::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     protocols: Some(vec!["platform".to_string()]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.protocols, Some(vec!["platform".to_string()]));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, PLATFORM_ENV, PROTOCOLS_ENV};
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
