//! Export functionality
//!
//! Renders the data dictionary into other formats:
//! - SQL DDL (CREATE TABLE / CREATE INDEX) for several dialects
//! - dictionary documents in JSON, YAML or Markdown

pub mod dictionary;
pub mod sql;

use crate::schema::{TableSpec, table_spec};

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// Resolve table names against the registry, keeping the given order.
/// An empty list selects every table.
pub fn resolve_tables<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static TableSpec>, ExportError> {
    if names.is_empty() {
        return Ok(crate::schema::TABLES.to_vec());
    }
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            table_spec(name).ok_or_else(|| ExportError::UnknownTable(name.to_string()))
        })
        .collect()
}

// Re-export for convenience
pub use dictionary::{DictionaryExporter, DictionaryFormat};
pub use sql::{SqlDialect, SqlExporter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tables() {
        let all = resolve_tables::<&str>(&[]).unwrap();
        assert_eq!(all.len(), 6);

        let picked = resolve_tables(&["smry_cd", "FILINGS_CD"]).unwrap();
        assert_eq!(picked[0].db_table, "SMRY_CD");
        assert_eq!(picked[1].db_table, "FILINGS_CD");

        assert!(matches!(
            resolve_tables(&["RCPT_CD"]),
            Err(ExportError::UnknownTable(name)) if name == "RCPT_CD"
        ));
    }
}
