//! Shared test helpers.
//!
//! This module provides a recording executor that can be told to fail on a
//! given call, plus an in-memory SQLite pool for executor tests.

#[cfg(test)]
use std::fmt;
#[cfg(test)]
use std::future::Future;

#[cfg(test)]
use serde::Serialize;
#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::executor::StatementExecutor;
#[cfg(test)]
use crate::statement::Statement;

/// Minimal fixture record with a single `id` column.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    pub id: i64,
}

/// Error returned by [`RecordingExecutor`] on the configured call.
#[cfg(test)]
#[derive(Debug)]
pub struct MockExecError {
    pub call: usize,
}

#[cfg(test)]
impl fmt::Display for MockExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock failure on call {}", self.call)
    }
}

#[cfg(test)]
impl std::error::Error for MockExecError {}

/// Executor that records every statement it is given.
///
/// Reports one affected row per `VALUES` group. Fails on the 1-based call
/// number in `fail_on_call`, after recording it.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub calls: Vec<Statement>,
    pub fail_on_call: Option<usize>,
}

#[cfg(test)]
impl RecordingExecutor {
    pub fn failing_on(call: usize) -> Self {
        RecordingExecutor {
            calls: Vec::new(),
            fail_on_call: Some(call),
        }
    }

    /// Tables of the recorded calls, in call order.
    pub fn tables(&self) -> Vec<&str> {
        self.calls.iter().map(Statement::table).collect()
    }
}

#[cfg(test)]
impl StatementExecutor for RecordingExecutor {
    type Error = MockExecError;

    fn execute<'a>(
        &'a mut self,
        statement: &'a Statement,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a {
        self.calls.push(statement.clone());
        let call = self.calls.len();
        let fail = self.fail_on_call == Some(call);
        let rows = statement.sql().matches("), (").count() as u64 + 1;

        async move {
            if fail {
                Err(MockExecError { call })
            } else {
                Ok(rows)
            }
        }
    }
}

/// Creates an in-memory SQLite pool.
///
/// Limited to one connection: every `sqlite::memory:` connection is a separate database.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Creates the `users` and `orders` tables used by executor tests.
#[cfg(test)]
pub async fn create_test_tables(pool: &SqlitePool) {
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, active BOOLEAN)")
        .execute(pool)
        .await
        .expect("Failed to create users table");
    sqlx::query("CREATE TABLE orders (id INTEGER PRIMARY KEY, user_id INTEGER NOT NULL, total REAL)")
        .execute(pool)
        .await
        .expect("Failed to create orders table");
}
