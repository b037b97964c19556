//! Library configuration.
//!
//! This module provides:
//! - `Config`: dialect and logging settings for an inserter
//! - `LogLevel` / `LogFormat` for the logger helper

mod types;

pub use types::{Config, LogFormat, LogLevel};
