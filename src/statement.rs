//! Multi-row insert statement generation.
//!
//! Turns one table's records into a single parameterized
//! `INSERT INTO ... VALUES (...), (...)` statement plus its positional
//! arguments. The first record's columns define the column list; every other
//! record must carry the same set of columns.

use std::sync::Arc;

use crate::dialect::Dialect;
use crate::error_handling::StatementError;
use crate::record::Record;
use crate::value::Value;

/// A generated insert statement ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    table: String,
    sql: String,
    args: Vec<Value>,
}

impl Statement {
    /// Target table, as given to the inserter (unquoted).
    pub fn table(&self) -> &str {
        &self.table
    }

    /// SQL text with dialect-specific placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Positional arguments, row-major.
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// Builds the INSERT query string for `row_count` rows of `columns`.
///
/// Identifiers are quoted for `dialect`. Placeholders are numbered across the
/// whole statement for dialects that number them.
///
/// ```rust,ignore
/// let query = build_batch_insert_query(Dialect::PostgreSql, "users", &["id", "name"], 2);
/// // INSERT INTO "users" ("id", "name") VALUES ($1, $2), ($3, $4)
/// ```
pub(crate) fn build_batch_insert_query(
    dialect: Dialect,
    table_name: &str,
    columns: &[&str],
    row_count: usize,
) -> String {
    if row_count == 0 || columns.is_empty() {
        return String::new();
    }

    let num_columns = columns.len();
    let placeholders: Vec<String> = (0..row_count)
        .map(|row| {
            let row_placeholders: Vec<String> = (1..=num_columns)
                .map(|col| dialect.placeholder(row * num_columns + col))
                .collect();
            format!("({})", row_placeholders.join(", "))
        })
        .collect();

    let quoted_columns: Vec<String> = columns
        .iter()
        .map(|c| dialect.quote_identifier(c))
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        dialect.quote_identifier(table_name),
        quoted_columns.join(", "),
        placeholders.join(", ")
    )
}

/// Builds one multi-row insert statement for `table` from `records`.
///
/// # Errors
///
/// - `EmptyBatch` if `records` is empty
/// - `Serialize` / `NotAStruct` if a record does not serialize to a struct or map
/// - `NonFiniteFloat` if a record has a NaN or infinite float field
/// - `NoColumns` if the first record has no fields
/// - `ShapeMismatch` if a record's column set differs from the first record's
pub fn build_insert_statement(
    dialect: Dialect,
    table: &str,
    records: &[Arc<dyn Record>],
) -> Result<Statement, StatementError> {
    let (first, rest) = records.split_first().ok_or(StatementError::EmptyBatch)?;

    let first_row = first.to_row(0)?;
    if first_row.columns().is_empty() {
        return Err(StatementError::NoColumns);
    }

    let mut args = Vec::with_capacity(first_row.columns().len() * records.len());
    args.extend(first_row.values().iter().cloned());

    for (offset, record) in rest.iter().enumerate() {
        let index = offset + 1;
        let row = record.to_row(index)?;
        if !first_row.same_columns(&row) {
            return Err(StatementError::ShapeMismatch {
                index,
                expected: first_row.columns().to_vec(),
                found: row.columns().to_vec(),
            });
        }
        // Values follow the first record's column order.
        for column in first_row.columns() {
            args.push(row.get(column).cloned().unwrap_or(Value::Null));
        }
    }

    let columns: Vec<&str> = first_row.columns().iter().map(String::as_str).collect();
    let sql = build_batch_insert_query(dialect, table, &columns, records.len());

    Ok(Statement {
        table: table.to_string(),
        sql,
        args,
    })
}
