//! SQL dialects.
//!
//! A dialect decides how generated statements render their positional
//! placeholders and how table and column identifiers are quoted.

use strum_macros::{Display, EnumIter, EnumString};

/// SQL variant used when rendering insert statements.
///
/// Parsing is case-insensitive, so `"MySQL"`, `"postgres"` and `"SQLITE"` are
/// all accepted:
///
/// ```
/// use test_records::Dialect;
///
/// assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::PostgreSql);
/// assert_eq!(Dialect::MySql.to_string(), "mysql");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Dialect {
    /// `?` placeholders, backtick-quoted identifiers
    #[strum(to_string = "mysql")]
    MySql,
    /// `$1, $2, ...` placeholders, double-quoted identifiers
    #[strum(to_string = "postgresql", serialize = "postgres")]
    PostgreSql,
    /// `?` placeholders, double-quoted identifiers
    #[strum(to_string = "sqlite")]
    Sqlite,
}

impl Dialect {
    /// Renders the placeholder for the argument at `position` (1-based,
    /// counted across the whole statement).
    pub fn placeholder(self, position: usize) -> String {
        match self {
            Dialect::MySql | Dialect::Sqlite => "?".to_string(),
            Dialect::PostgreSql => format!("${}", position),
        }
    }

    fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::PostgreSql | Dialect::Sqlite => '"',
        }
    }

    /// Quotes an identifier for this dialect.
    ///
    /// Dotted names such as `main.users` are quoted per segment. A quote
    /// character inside a segment is doubled.
    pub fn quote_identifier(self, name: &str) -> String {
        let quote = self.quote_char();
        let escaped_quote = format!("{quote}{quote}");
        name.split('.')
            .map(|segment| {
                format!(
                    "{quote}{}{quote}",
                    segment.replace(quote, &escaped_quote)
                )
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}
