//! Positional statement arguments.

/// A single positional argument of a generated statement.
///
/// Built from a record's serialized fields; read back through
/// [`Statement::args`](crate::Statement::args) and [`Row::values`](crate::Row::values).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`
    Null,
    /// Boolean
    Bool(bool),
    /// Signed 64-bit integer
    Integer(i64),
    /// Finite double precision float
    Real(f64),
    /// Text, including integers outside the `i64` range and nested values as JSON
    Text(String),
    /// Raw bytes from a `serialize_bytes` field
    Blob(Vec<u8>),
}
