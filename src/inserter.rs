//! Immutable multi-table fixture batch.
//!
//! An [`Inserter`] collects records per table and inserts them with one
//! multi-row statement per table, in the order tables were first added.
//! Every `add` returns a new inserter; the original is never modified, so a
//! shared base set of fixtures can be extended differently per test.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::dialect::Dialect;
use crate::error_handling::BatchError;
use crate::executor::StatementExecutor;
use crate::record::Record;
use crate::statement::{build_insert_statement, Statement};

/// Summary of a successful [`Inserter::insert_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertSummary {
    /// Number of statements executed (one per non-empty table)
    pub statements: usize,
    /// Sum of the affected row counts reported by the executor
    pub rows_affected: u64,
}

/// Accumulates fixture records per table.
///
/// # Example
///
/// ```no_run
/// use serde::Serialize;
/// use test_records::Inserter;
///
/// #[derive(Debug, Serialize)]
/// struct User { id: i64, name: String }
///
/// #[derive(Debug, Serialize)]
/// struct Order { id: i64, user_id: i64 }
///
/// # async fn example(mut pool: sqlx::SqlitePool) -> Result<(), test_records::BatchError> {
/// let base = Inserter::for_sqlite().add("users", [User { id: 1, name: "alice".into() }]);
/// let with_orders = base.add("orders", [Order { id: 10, user_id: 1 }]);
///
/// // INSERT INTO "users" ... then INSERT INTO "orders" ...
/// with_orders.insert_all(&mut pool).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Inserter {
    dialect: Dialect,
    log_statements: bool,
    tables: Vec<String>,
    records_by_table: HashMap<String, Vec<Arc<dyn Record>>>,
}

impl Inserter {
    /// Creates an empty inserter for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Inserter {
            dialect,
            log_statements: false,
            tables: Vec::new(),
            records_by_table: HashMap::new(),
        }
    }

    /// Creates an empty inserter rendering MySQL statements.
    pub fn for_mysql() -> Self {
        Self::new(Dialect::MySql)
    }

    /// Creates an empty inserter rendering PostgreSQL statements.
    pub fn for_postgresql() -> Self {
        Self::new(Dialect::PostgreSql)
    }

    /// Creates an empty inserter rendering SQLite statements.
    pub fn for_sqlite() -> Self {
        Self::new(Dialect::Sqlite)
    }

    /// Creates an empty inserter from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Inserter {
            log_statements: config.log_statements,
            ..Self::new(config.dialect)
        }
    }

    /// Dialect used to render statements.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns a new inserter with `records` appended to `table`.
    ///
    /// A table seen for the first time goes to the end of the insertion
    /// order; adding to a known table keeps its position. Adding no records
    /// returns an equivalent copy.
    ///
    /// The returned inserter owns its own table list and record lists, so
    /// later adds on either value are never visible through the other.
    pub fn add<R, I>(&self, table: &str, records: I) -> Self
    where
        R: Record + 'static,
        I: IntoIterator<Item = R>,
    {
        let records: Vec<Arc<dyn Record>> = records
            .into_iter()
            .map(|record| Arc::new(record) as Arc<dyn Record>)
            .collect();

        let mut ret = self.clone();
        if records.is_empty() {
            return ret;
        }

        if let Some(existing) = ret.records_by_table.get_mut(table) {
            existing.extend(records);
            return ret;
        }

        if !ret.tables.iter().any(|t| t == table) {
            ret.tables.push(table.to_string());
        }
        ret.records_by_table.insert(table.to_string(), records);
        ret
    }

    /// Returns a new inserter with a single record appended to `table`.
    pub fn add_one<R>(&self, table: &str, record: R) -> Self
    where
        R: Record + 'static,
    {
        self.add(table, std::iter::once(record))
    }

    /// Table names in insertion order.
    pub fn tables(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.iter().map(String::as_str)
    }

    /// Records queued for `table`, in insertion order.
    pub fn records(&self, table: &str) -> &[Arc<dyn Record>] {
        self.records_by_table
            .get(table)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of records queued for `table`.
    pub fn record_count(&self, table: &str) -> usize {
        self.records(table).len()
    }

    /// Returns true if no table has any records.
    pub fn is_empty(&self) -> bool {
        self.records_by_table.values().all(Vec::is_empty)
    }

    /// Lazily generates one insert statement per non-empty table, in table order.
    ///
    /// Tables without records are skipped.
    pub fn statements(&self) -> impl Iterator<Item = Result<Statement, BatchError>> + '_ {
        self.tables.iter().filter_map(move |table| {
            let records = self
                .records_by_table
                .get(table)
                .filter(|records| !records.is_empty())?;

            let statement = build_insert_statement(self.dialect, table, records).map_err(
                |source| BatchError::Statement {
                    table: table.clone(),
                    source,
                },
            );
            if let Ok(stmt) = &statement {
                if self.log_statements {
                    log::debug!("{} ({} args)", stmt.sql(), stmt.args().len());
                }
            }
            Some(statement)
        })
    }

    /// Inserts every table's records through `executor`, one statement per
    /// table, in table order.
    ///
    /// Stops at the first failing table and returns its error; later tables
    /// are not attempted and earlier inserts are not undone. Pass a
    /// transaction as the executor for all-or-nothing behavior.
    ///
    /// # Errors
    ///
    /// - `BatchError::Statement` if a table's records cannot be rendered
    /// - `BatchError::Execution` if the executor fails, with the original
    ///   error as its source and a captured backtrace
    pub async fn insert_all<E>(&self, executor: &mut E) -> Result<InsertSummary, BatchError>
    where
        E: StatementExecutor,
    {
        let mut summary = InsertSummary::default();

        for statement in self.statements() {
            let statement = statement.inspect_err(|e| {
                log::warn!("Skipping remaining tables: {}", e);
            })?;
            let table = statement.table();

            match executor.execute(&statement).await {
                Ok(rows) => {
                    log::debug!(
                        "Inserted {} records into {} ({} rows affected)",
                        self.record_count(table),
                        table,
                        rows
                    );
                    summary.statements += 1;
                    summary.rows_affected += rows;
                }
                Err(e) => {
                    log::warn!(
                        "Failed to insert {} records into {}: {}",
                        self.record_count(table),
                        table,
                        e
                    );
                    return Err(BatchError::execution(table, e));
                }
            }
        }

        Ok(summary)
    }
}
