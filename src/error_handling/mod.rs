//! Error handling.
//!
//! This module provides:
//! - `StatementError`: a table's records could not be rendered as one INSERT
//! - `BatchError`: the first table that failed during `insert_all`
//! - `InitializationError`: logger setup failures

mod types;

// Re-export public API
pub use types::{BatchError, InitializationError, StatementError, Trace};
