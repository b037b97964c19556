//! Record abstraction.
//!
//! Any `serde::Serialize` struct can be added to an [`Inserter`](crate::Inserter).
//! Its serialized fields are its columns, so `#[serde(rename = "...")]` and
//! `#[serde(skip)]` control the column names and which fields are inserted.
//! Byte fields marked `#[serde(with = "serde_bytes")]` are bound as blobs.

mod serializer;

use std::fmt;

use serde::Serialize;

use crate::error_handling::StatementError;
use crate::value::Value;
use serializer::{RowError, RowSerializer};

/// A type-erased fixture record.
///
/// Implemented for every `Serialize + Debug + Send + Sync` type, which lets one
/// inserter hold records of different types for different tables.
pub trait Record: fmt::Debug + Send + Sync {
    /// Serializes the record into a row.
    ///
    /// `index` is the record's position within its table and is reported in
    /// errors.
    fn to_row(&self, index: usize) -> Result<Row, StatementError>;
}

impl<T> Record for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn to_row(&self, index: usize) -> Result<Row, StatementError> {
        match self.serialize(RowSerializer) {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(StatementError::NotAStruct { index }),
            Err(RowError::NonFiniteFloat { column }) => {
                Err(StatementError::NonFiniteFloat { index, column })
            }
            Err(RowError::Json(source)) => Err(StatementError::Serialize { index, source }),
        }
    }
}

/// One serialized record: column names and their values, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    /// Column names in field order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in field order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the value stored under `column`, if any.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| &self.values[idx])
    }

    /// Returns true when both rows have the same column set, in any order.
    pub(crate) fn same_columns(&self, other: &Row) -> bool {
        self.columns.len() == other.columns.len()
            && self.columns.iter().all(|c| other.columns.contains(c))
    }
}
