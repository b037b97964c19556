//! Logger initialization.
//!
//! Test suites that use this crate can call these helpers once to see which
//! statements were generated and which table failed.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use colored::{Color, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter};
use serde_json::json;

use crate::config::{Config, LogFormat};
use crate::error_handling::InitializationError;

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

/// One log line as a JSON object.
fn json_line(record: &log::Record<'_>, at: DateTime<Utc>) -> serde_json::Value {
    json!({
        "time": at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "message": record.args().to_string(),
    })
}

fn write_json(buf: &mut Formatter, record: &log::Record<'_>) -> io::Result<()> {
    writeln!(buf, "{}", json_line(record, Utc::now()))
}

fn write_plain(buf: &mut Formatter, record: &log::Record<'_>) -> io::Result<()> {
    let level = format!("{:<5}", record.level()).color(level_color(record.level()));
    writeln!(
        buf,
        "{} {} {}: {}",
        Utc::now().format("%H:%M:%S%.3f").to_string().dimmed(),
        level,
        record.target().cyan(),
        record.args()
    )
}

/// Initializes the logger with the specified level and format.
///
/// Plain output is one colored line per event; JSON output is one object per
/// line with `time`, `level`, `target` and `message` keys. `RUST_LOG` is read
/// first and `level` overrides it for this crate. sqlx is held at `warn`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every generated statement while running a test suite
/// RUST_LOG=test_records=debug cargo test
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("sqlx", LevelFilter::Warn)
        .filter_module("test_records", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    // Several tests may race to install the logger; only the first wins.
    builder.try_init()?;
    Ok(())
}

/// Initializes the logger from a [`Config`].
pub fn init_logger(config: &Config) -> Result<(), InitializationError> {
    init_logger_with(config.log_level.into(), config.log_format)
}
