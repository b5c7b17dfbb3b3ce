//! Import functionality
//!
//! Reads table layouts back from SQL DDL so they can be compared with the
//! declared dictionary.

pub mod sql;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported statement: {0}")]
    UnsupportedStatement(String),
}

/// Table layout recovered from a CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedTable {
    /// Unqualified table identifier, as written
    pub name: String,
    pub columns: Vec<ImportedColumn>,
}

impl ImportedTable {
    /// Look a column up by identifier, ignoring case
    pub fn column(&self, name: &str) -> Option<&ImportedColumn> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Column data from import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedColumn {
    pub name: String,
    /// Type as rendered by the SQL parser, e.g. `VARCHAR(8)`
    pub data_type: String,
    pub nullable: bool,
}

/// Broad type family of a SQL column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFamily {
    Text,
    Integer,
    Date,
    Decimal,
    Float,
    Other,
}

impl std::fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeFamily::Text => "text",
            TypeFamily::Integer => "integer",
            TypeFamily::Date => "date",
            TypeFamily::Decimal => "decimal",
            TypeFamily::Float => "float",
            TypeFamily::Other => "other",
        };
        f.write_str(name)
    }
}

/// A SQL type split into its base name and numeric arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlType {
    pub base: String,
    /// Length for character types, precision for numeric types
    pub length: Option<u32>,
    pub scale: Option<u32>,
}

static SQL_TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9_ ]*?)\s*(?:\(\s*(\d+)\s*(?:,\s*(\d+)\s*)?\))?$").unwrap()
});

impl SqlType {
    pub fn parse(data_type: &str) -> Option<Self> {
        let upper = data_type.trim().to_ascii_uppercase();
        let caps = SQL_TYPE_PATTERN.captures(&upper)?;
        Some(Self {
            base: caps[1].trim().to_string(),
            length: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            scale: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        })
    }

    pub fn family(&self) -> TypeFamily {
        match self.base.as_str() {
            "VARCHAR" | "CHAR" | "CHARACTER" | "CHARACTER VARYING" | "NVARCHAR" | "NCHAR"
            | "TEXT" | "STRING" => TypeFamily::Text,
            "INT" | "INTEGER" | "SMALLINT" | "BIGINT" | "INT4" | "INT8" => TypeFamily::Integer,
            "DATE" | "DATETIME" | "TIMESTAMP" => TypeFamily::Date,
            "NUMERIC" | "DECIMAL" | "DEC" => TypeFamily::Decimal,
            "FLOAT" | "DOUBLE" | "DOUBLE PRECISION" | "REAL" | "FLOAT8" | "FLOAT4" => {
                TypeFamily::Float
            }
            _ => TypeFamily::Other,
        }
    }
}

impl ImportedColumn {
    pub fn sql_type(&self) -> Option<SqlType> {
        SqlType::parse(&self.data_type)
    }

    pub fn type_family(&self) -> TypeFamily {
        self.sql_type()
            .map(|t| t.family())
            .unwrap_or(TypeFamily::Other)
    }
}

// Re-export for convenience
pub use sql::SqlSchemaReader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_type_parse() {
        let varchar = SqlType::parse("varchar(200)").unwrap();
        assert_eq!(varchar.base, "VARCHAR");
        assert_eq!(varchar.length, Some(200));
        assert_eq!(varchar.family(), TypeFamily::Text);

        let numeric = SqlType::parse("NUMERIC(14, 2)").unwrap();
        assert_eq!((numeric.length, numeric.scale), (Some(14), Some(2)));
        assert_eq!(numeric.family(), TypeFamily::Decimal);

        assert_eq!(
            SqlType::parse("DOUBLE PRECISION").unwrap().family(),
            TypeFamily::Float
        );
        assert_eq!(SqlType::parse("BLOB").unwrap().family(), TypeFamily::Other);
        assert!(SqlType::parse("ARRAY<INT>").is_none());
    }
}
