//! test_records: multi-table fixture inserts for database tests
//!
//! This library collects test fixture records for several tables and inserts
//! them with one multi-row `INSERT` per table, in the order the tables were
//! first added. Records are any `serde::Serialize` struct; their fields are
//! the inserted columns.
//!
//! # Example
//!
//! ```no_run
//! use serde::Serialize;
//! use test_records::Inserter;
//!
//! #[derive(Debug, Serialize)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pool = sqlx::SqlitePool::connect("sqlite::memory:").await?;
//!
//! let fixtures = Inserter::for_sqlite()
//!     .add("users", [User { id: 1, name: "alice".into() }])
//!     .add("users", [User { id: 2, name: "bob".into() }]);
//!
//! let summary = fixtures.insert_all(&mut pool).await?;
//! println!("{} statements, {} rows", summary.statements, summary.rows_affected);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `insert_all` is async; the bundled SQLite executors need a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod dialect;
mod error_handling;
mod executor;
pub mod initialization;
mod inserter;
mod record;
mod statement;
mod value;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dialect::Dialect;
pub use error_handling::{BatchError, InitializationError, StatementError, Trace};
pub use executor::StatementExecutor;
pub use initialization::{init_logger, init_logger_with};
pub use inserter::{InsertSummary, Inserter};
pub use record::{Record, Row};
pub use statement::{build_insert_statement, Statement};
pub use value::Value;
