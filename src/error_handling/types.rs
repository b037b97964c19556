//! Error type definitions.
//!
//! This module defines the errors returned by statement generation, batch
//! insertion and logger initialization.

use std::backtrace::Backtrace;
use std::error::Error as StdError;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while turning a table's records into one insert statement.
#[derive(Error, Debug)]
pub enum StatementError {
    /// The table has no records.
    #[error("no records to insert")]
    EmptyBatch,

    /// A record could not be serialized.
    #[error("record {index} could not be serialized: {source}")]
    Serialize {
        /// Position of the record within the table's batch
        index: usize,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// A record serialized to something other than a struct or map.
    #[error("record {index} is not a struct or map")]
    NotAStruct {
        /// Position of the record within the table's batch
        index: usize,
    },

    /// A float field is NaN or infinite and has no SQL value.
    #[error("record {index} field {column} is not a finite number")]
    NonFiniteFloat {
        /// Position of the record within the table's batch
        index: usize,
        /// Offending column
        column: String,
    },

    /// The first record has no fields to insert.
    #[error("first record has no columns")]
    NoColumns,

    /// A record's columns differ from the first record's columns.
    #[error("record {index} has columns {found:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Position of the record within the table's batch
        index: usize,
        /// Columns of the first record
        expected: Vec<String>,
        /// Columns of the offending record
        found: Vec<String>,
    },
}

/// Error returned by [`Inserter::insert_all`](crate::Inserter::insert_all).
///
/// Identifies the first table that failed. Tables before it were already
/// inserted; tables after it were not attempted.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The table's records could not be turned into a statement.
    #[error("failed to build insert statement for table {table}: {source}")]
    Statement {
        /// Target table
        table: String,
        /// Statement generation error
        #[source]
        source: StatementError,
    },

    /// The executor rejected the table's insert statement.
    #[error("failed to insert records into table {table}: {source}")]
    Execution {
        /// Target table
        table: String,
        /// The executor's error, unchanged
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
        /// Stack captured where the failure was observed
        trace: Trace,
    },
}

/// Captured stack of an execution failure.
///
/// Wrapped so thiserror does not treat the field as a `provide()` source.
#[derive(Debug)]
pub struct Trace(Backtrace);

impl Trace {
    fn capture() -> Self {
        Trace(Backtrace::force_capture())
    }
}

impl BatchError {
    /// Wraps an executor error for `table`, capturing a backtrace.
    pub(crate) fn execution<E>(table: &str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        BatchError::Execution {
            table: table.to_string(),
            source: Box::new(source),
            trace: Trace::capture(),
        }
    }

    /// The table whose insert failed.
    pub fn table(&self) -> &str {
        match self {
            BatchError::Statement { table, .. } | BatchError::Execution { table, .. } => table,
        }
    }

    /// Backtrace captured when the executor failed, if this is an execution error.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            BatchError::Execution { trace, .. } => Some(&trace.0),
            BatchError::Statement { .. } => None,
        }
    }

    /// Returns the executor's error if it is of type `E`.
    pub fn execution_error<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            BatchError::Execution { source, .. } => source.downcast_ref::<E>(),
            BatchError::Statement { .. } => None,
        }
    }
}
