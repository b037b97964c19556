// Shared test helpers for database setup and fixture types.
//
// This module provides common utilities used across integration test files.

use serde::Serialize;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT)",
    "CREATE TABLE orders (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        total REAL NOT NULL,
        tags TEXT
    )",
    "CREATE TABLE audit_log (id INTEGER PRIMARY KEY, message TEXT NOT NULL)",
    "CREATE TABLE attachments (id INTEGER PRIMARY KEY, data BLOB NOT NULL)",
];

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total: f64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub id: i64,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: Some(format!("{name}@example.com")),
    }
}

pub fn order(id: i64, user_id: i64, total: f64) -> Order {
    Order {
        id,
        user_id,
        total,
        tags: vec!["fixture".to_string()],
    }
}

async fn apply_schema(pool: &SqlitePool) {
    for ddl in SCHEMA {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .expect("Failed to create test schema");
    }
}

/// Creates an in-memory database with the test schema.
/// Uses a single connection because each in-memory connection is its own database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    apply_schema(&pool).await;
    pool
}

/// Creates a file-backed database with the test schema.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool_with_path(db_path: &Path) -> SqlitePool {
    let db_path_str = db_path.to_string_lossy().to_string();
    let pool = SqlitePoolOptions::new()
        .connect(&format!("sqlite:{}?mode=rwc", db_path_str))
        .await
        .expect("Failed to create test database");
    apply_schema(&pool).await;
    pool
}

#[allow(dead_code)] // Used by other test files
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
