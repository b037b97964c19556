//! Statement execution.
//!
//! [`StatementExecutor`] is the capability `insert_all` runs statements
//! through. It is implemented for a SQLite pool, a single connection and an
//! open transaction, so callers can insert fixtures directly, on a pinned
//! connection, or inside a transaction they commit or roll back themselves.

use std::future::Future;

use sqlx::sqlite::{SqliteArguments, SqliteConnection};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::statement::Statement;
use crate::value::Value;

/// Runs one generated statement against a database.
pub trait StatementExecutor {
    /// Error reported by the underlying connection.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes `statement` with its positional arguments and returns the
    /// number of affected rows.
    fn execute<'a>(
        &'a mut self,
        statement: &'a Statement,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;
}

/// Binds the statement's arguments in order.
fn bind_statement(statement: &Statement) -> sqlx::query::Query<'_, Sqlite, SqliteArguments<'_>> {
    statement
        .args()
        .iter()
        .fold(sqlx::query(statement.sql()), |query, value| match value {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Integer(i) => query.bind(*i),
            Value::Real(f) => query.bind(*f),
            Value::Text(s) => query.bind(s.as_str()),
            Value::Blob(b) => query.bind(b.as_slice()),
        })
}

impl StatementExecutor for SqlitePool {
    type Error = sqlx::Error;

    fn execute<'a>(
        &'a mut self,
        statement: &'a Statement,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a {
        async move {
            let result = bind_statement(statement).execute(&*self).await?;
            Ok(result.rows_affected())
        }
    }
}

impl StatementExecutor for SqliteConnection {
    type Error = sqlx::Error;

    fn execute<'a>(
        &'a mut self,
        statement: &'a Statement,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a {
        async move {
            let result = bind_statement(statement).execute(&mut *self).await?;
            Ok(result.rows_affected())
        }
    }
}

impl StatementExecutor for Transaction<'_, Sqlite> {
    type Error = sqlx::Error;

    fn execute<'a>(
        &'a mut self,
        statement: &'a Statement,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a {
        async move {
            let result = bind_statement(statement).execute(&mut **self).await?;
            Ok(result.rows_affected())
        }
    }
}
