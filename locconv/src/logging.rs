//! Logging infrastructure for the locconv library.
//!
//! The library itself only emits records through the `log` facade, and only
//! from configuration discovery, platform selection and load helpers;
//! conversions never log. This module provides a small stderr backend for
//! applications that do not bring their own.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "LOCCONV_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use locconv::LogLevel;
///
/// let quiet = LogLevel::Quiet;
/// let normal = LogLevel::Normal;
/// let verbose = LogLevel::Verbose;
///
/// assert!(quiet < normal);
/// assert!(normal < verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, down to trace records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use locconv::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// A simple stderr-based `log` backend.
///
/// The logger respects the configured log level and only outputs records
/// the level lets through.
///
/// # Examples
///
/// ```
/// use locconv::{LogLevel, Logger};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// let metadata = log::Metadata::builder().level(log::Level::Debug).build();
/// assert!(!logger.enabled(&metadata));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Creates a logger at the configured `log_mode`, or `Normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use locconv::{Config, LogLevel, Logger};
    ///
    /// let config = Config {
    ///     log_mode: Some(LogLevel::Quiet),
    ///     ..Config::default()
    /// };
    /// assert_eq!(Logger::from_config(&config).level(), LogLevel::Quiet);
    /// assert_eq!(Logger::from_config(&Config::default()).level(), LogLevel::Normal);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_mode.unwrap_or(LogLevel::Normal))
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if another backend was installed first.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        eprintln!("{label}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and flags.
///
/// The priority order is:
/// 1. Flags (verbose/quiet)
/// 2. `LOCCONV_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use locconv::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

/// Like [`init_logger`], with the configured `log_mode` between the flags
/// and the environment variable.
///
/// A [`Config`] from [`ConfigBuilder`](crate::ConfigBuilder) already carries
/// `LOCCONV_LOG_MODE` as its highest file-independent layer, so the
/// environment is only consulted here when the configuration is silent.
#[must_use]
pub fn init_logger_with_config(verbose: bool, quiet: bool, config: &Config) -> Logger {
    if verbose || quiet {
        return init_logger(verbose, quiet);
    }
    match config.log_mode {
        Some(level) => Logger::new(level),
        None => init_logger(false, false),
    }
}
