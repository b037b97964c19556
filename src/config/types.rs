//! Configuration types.
//!
//! This module defines the logging enums and the library configuration used
//! to construct an [`Inserter`](crate::Inserter).

use strum_macros::{Display, EnumString};

use crate::dialect::Dialect;

/// Logging level for the library's logger helper.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```
/// use test_records::{Config, Dialect, Inserter};
///
/// let config = Config {
///     dialect: Dialect::PostgreSql,
///     log_statements: true,
///     ..Default::default()
/// };
/// let inserter = Inserter::from_config(&config);
/// assert_eq!(inserter.dialect(), Dialect::PostgreSql);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQL dialect used to render statements
    pub dialect: Dialect,

    /// Log level for `init_logger`
    pub log_level: LogLevel,

    /// Log format for `init_logger`
    pub log_format: LogFormat,

    /// Log the full SQL text of every generated statement at debug level
    pub log_statements: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            log_statements: false,
        }
    }
}
