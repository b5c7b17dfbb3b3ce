//! SQL exporter for generating CREATE TABLE statements from the dictionary.
//!
//! # Identifiers
//!
//! Table and column identifiers are always quoted so the exact upper-case
//! CAL-ACCESS names survive every dialect. Internal quote characters are
//! escaped by doubling them according to SQL standards.

use crate::export::{ExportError, ExportResult, resolve_tables};
use crate::schema::{FieldSpec, FieldType, TableSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Target SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    Standard,
    Postgres,
    Mysql,
    Sqlserver,
    Sqlite,
}

impl SqlDialect {
    pub const ALL: [SqlDialect; 5] = [
        SqlDialect::Standard,
        SqlDialect::Postgres,
        SqlDialect::Mysql,
        SqlDialect::Sqlserver,
        SqlDialect::Sqlite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SqlDialect::Standard => "standard",
            SqlDialect::Postgres => "postgres",
            SqlDialect::Mysql => "mysql",
            SqlDialect::Sqlserver => "sqlserver",
            SqlDialect::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "generic" | "ansi" => Ok(SqlDialect::Standard),
            "postgres" | "postgresql" => Ok(SqlDialect::Postgres),
            "mysql" => Ok(SqlDialect::Mysql),
            "sqlserver" | "mssql" => Ok(SqlDialect::Sqlserver),
            "sqlite" => Ok(SqlDialect::Sqlite),
            other => Err(format!("Unknown SQL dialect: {}", other)),
        }
    }
}

/// Exporter for SQL CREATE TABLE format.
#[derive(Debug, Clone)]
pub struct SqlExporter {
    pub dialect: SqlDialect,
    /// Emit table and column documentation
    pub include_comments: bool,
    /// Emit CREATE INDEX for indexed columns
    pub include_indexes: bool,
    /// Emit CHECK constraints for choice sets and integer ranges
    pub include_choice_checks: bool,
}

impl Default for SqlExporter {
    fn default() -> Self {
        Self::new(SqlDialect::Standard)
    }
}

impl SqlExporter {
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            dialect,
            include_comments: true,
            include_indexes: true,
            include_choice_checks: false,
        }
    }

    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    pub fn with_indexes(mut self, include: bool) -> Self {
        self.include_indexes = include;
        self
    }

    pub fn with_choice_checks(mut self, include: bool) -> Self {
        self.include_choice_checks = include;
        self
    }

    /// Export one table to a CREATE TABLE statement, followed by its
    /// indexes and comments when enabled.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calaccess_raw::export::sql::{SqlDialect, SqlExporter};
    /// use calaccess_raw::schema::FILINGS_CD;
    ///
    /// let sql = SqlExporter::new(SqlDialect::Postgres)
    ///     .with_comments(false)
    ///     .export_table(&FILINGS_CD);
    /// assert!(sql.starts_with("CREATE TABLE \"FILINGS_CD\" (\n  \"FILING_ID\" INTEGER NOT NULL"));
    /// ```
    pub fn export_table(&self, table: &TableSpec) -> String {
        let dialect = self.dialect;
        let table_name = Self::quote_identifier(table.db_table, dialect);
        let mut sql = String::new();

        let table_comment = self.comment_text(table.doc);
        if let Some(doc) = &table_comment
            && dialect != SqlDialect::Postgres
        {
            sql.push_str(&format!("-- {}: {}\n", table.db_table, doc));
        }

        sql.push_str(&format!("CREATE TABLE {} (\n", table_name));

        let mut column_defs = Vec::new();
        for field in table.fields {
            let mut col_def = String::new();
            let comment = self.comment_text(field.help_text.or(field.verbose_name).unwrap_or(""));

            if let Some(text) = &comment
                && matches!(
                    dialect,
                    SqlDialect::Standard | SqlDialect::Sqlserver | SqlDialect::Sqlite
                )
            {
                col_def.push_str(&format!("  -- {}\n", text));
            }

            col_def.push_str(&format!(
                "  {} {}",
                Self::quote_identifier(field.db_column, dialect),
                self.column_type(&field.field_type)
            ));

            if !field.nullable {
                col_def.push_str(" NOT NULL");
            }

            if self.include_choice_checks {
                for check in self.checks(field) {
                    col_def.push(' ');
                    col_def.push_str(&check);
                }
            }

            if let Some(text) = &comment
                && dialect == SqlDialect::Mysql
            {
                col_def.push_str(&format!(" COMMENT {}", quote_literal(text)));
            }

            column_defs.push(col_def);
        }

        sql.push_str(&column_defs.join(",\n"));
        sql.push_str("\n);\n");

        if dialect == SqlDialect::Postgres && self.include_comments {
            if let Some(doc) = &table_comment {
                sql.push_str(&format!(
                    "COMMENT ON TABLE {} IS {};\n",
                    table_name,
                    quote_literal(doc)
                ));
            }
            for field in table.fields {
                if let Some(text) =
                    self.comment_text(field.help_text.or(field.verbose_name).unwrap_or(""))
                {
                    sql.push_str(&format!(
                        "COMMENT ON COLUMN {}.{} IS {};\n",
                        table_name,
                        Self::quote_identifier(field.db_column, dialect),
                        quote_literal(&text)
                    ));
                }
            }
        }

        if self.include_indexes {
            for field in table.indexed_fields() {
                sql.push_str(&format!(
                    "CREATE INDEX {} ON {} ({});\n",
                    Self::quote_identifier(&Self::index_name(table, field), dialect),
                    table_name,
                    Self::quote_identifier(field.db_column, dialect)
                ));
            }
        }

        sql
    }

    /// Export tables to SQL statements
    pub fn export(&self, tables: &[&TableSpec]) -> Result<ExportResult, ExportError> {
        let mut sql = String::new();
        for table in tables {
            sql.push_str(&self.export_table(table));
            sql.push('\n');
        }
        info!(
            dialect = %self.dialect,
            tables = tables.len(),
            "Exported SQL DDL"
        );
        Ok(ExportResult {
            content: sql,
            format: "sql".to_string(),
        })
    }

    /// Export the named tables, or all tables when `names` is empty
    pub fn export_named<S: AsRef<str>>(&self, names: &[S]) -> Result<ExportResult, ExportError> {
        let tables = resolve_tables(names)?;
        self.export(&tables)
    }

    /// Column type for a field in the target dialect
    pub fn column_type(&self, field_type: &FieldType) -> String {
        match (field_type, self.dialect) {
            (FieldType::Text { max_length }, _) => format!("VARCHAR({})", max_length),
            (FieldType::Integer, SqlDialect::Sqlserver) => "INT".to_string(),
            (FieldType::Integer, _) => "INTEGER".to_string(),
            (FieldType::Date, _) => "DATE".to_string(),
            (
                FieldType::Decimal {
                    max_digits,
                    decimal_places,
                },
                SqlDialect::Mysql,
            ) => format!("DECIMAL({},{})", max_digits, decimal_places),
            (
                FieldType::Decimal {
                    max_digits,
                    decimal_places,
                },
                _,
            ) => format!("NUMERIC({},{})", max_digits, decimal_places),
            (FieldType::Float, SqlDialect::Mysql) => "DOUBLE".to_string(),
            (FieldType::Float, SqlDialect::Sqlserver) => "FLOAT".to_string(),
            (FieldType::Float, SqlDialect::Sqlite) => "REAL".to_string(),
            (FieldType::Float, _) => "DOUBLE PRECISION".to_string(),
        }
    }

    fn checks(&self, field: &FieldSpec) -> Vec<String> {
        let column = Self::quote_identifier(field.db_column, self.dialect);
        let mut checks = Vec::new();
        if let Some(set) = field.choices {
            let values: Vec<String> = match field.field_type {
                FieldType::Integer => set.codes().map(str::to_string).collect(),
                _ => set.codes().map(quote_literal).collect(),
            };
            checks.push(format!("CHECK ({} IN ({}))", column, values.join(", ")));
        }
        if let Some((min, max)) = field.range {
            checks.push(format!("CHECK ({} BETWEEN {} AND {})", column, min, max));
        }
        checks
    }

    fn comment_text(&self, text: &str) -> Option<String> {
        if !self.include_comments {
            return None;
        }
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() { None } else { Some(text) }
    }

    fn index_name(table: &TableSpec, field: &FieldSpec) -> String {
        format!("{}_{}_idx", table.db_table, field.db_column).to_ascii_lowercase()
    }

    /// Quote and escape identifier based on SQL dialect.
    ///
    /// # Dialects
    ///
    /// - **PostgreSQL, SQLite, standard SQL**: double quotes (`"identifier"`)
    /// - **MySQL**: backticks (`` `identifier` ``)
    /// - **SQL Server**: brackets (`[identifier]`)
    pub fn quote_identifier(identifier: &str, dialect: SqlDialect) -> String {
        match dialect {
            SqlDialect::Mysql => format!("`{}`", identifier.replace('`', "``")),
            SqlDialect::Sqlserver => format!("[{}]", identifier.replace(']', "]]")),
            SqlDialect::Standard | SqlDialect::Postgres | SqlDialect::Sqlite => {
                format!("\"{}\"", identifier.replace('"', "\"\""))
            }
        }
    }
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CVR_E530_CD, FILER_FILINGS_CD, SMRY_CD};

    #[test]
    fn test_quote_identifier() {
        assert_eq!(SqlExporter::quote_identifier("NAML", SqlDialect::Standard), "\"NAML\"");
        assert_eq!(SqlExporter::quote_identifier("NAML", SqlDialect::Mysql), "`NAML`");
        assert_eq!(SqlExporter::quote_identifier("NAML", SqlDialect::Sqlserver), "[NAML]");
        assert_eq!(SqlExporter::quote_identifier("a\"b", SqlDialect::Postgres), "\"a\"\"b\"");
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("PostgreSQL".parse::<SqlDialect>(), Ok(SqlDialect::Postgres));
        assert_eq!("mssql".parse::<SqlDialect>(), Ok(SqlDialect::Sqlserver));
        assert!("oracle".parse::<SqlDialect>().is_err());
    }

    #[test]
    fn test_column_types_per_dialect() {
        let money = FieldType::Decimal {
            max_digits: 14,
            decimal_places: 2,
        };
        let postgres = SqlExporter::new(SqlDialect::Postgres);
        let mysql = SqlExporter::new(SqlDialect::Mysql);
        let sqlite = SqlExporter::new(SqlDialect::Sqlite);
        assert_eq!(postgres.column_type(&money), "NUMERIC(14,2)");
        assert_eq!(mysql.column_type(&money), "DECIMAL(14,2)");
        assert_eq!(postgres.column_type(&FieldType::Float), "DOUBLE PRECISION");
        assert_eq!(sqlite.column_type(&FieldType::Float), "REAL");
        assert_eq!(
            mysql.column_type(&FieldType::Text { max_length: 8 }),
            "VARCHAR(8)"
        );
    }

    #[test]
    fn test_nullability_and_indexes() {
        let sql = SqlExporter::default()
            .with_comments(false)
            .export_table(&SMRY_CD);
        assert!(sql.contains("  \"AMOUNT_A\" NUMERIC(14,2),\n"));
        assert!(sql.contains("  \"FORM_TYPE\" VARCHAR(8) NOT NULL,\n"));
        assert!(
            sql.contains("CREATE INDEX \"smry_cd_form_type_idx\" ON \"SMRY_CD\" (\"FORM_TYPE\");")
        );
        assert!(!sql.contains("--"));

        let bare = SqlExporter::default()
            .with_comments(false)
            .with_indexes(false)
            .export_table(&SMRY_CD);
        assert!(!bare.contains("CREATE INDEX"));
    }

    #[test]
    fn test_choice_checks() {
        let sql = SqlExporter::new(SqlDialect::Postgres)
            .with_comments(false)
            .with_choice_checks(true)
            .export_table(&FILER_FILINGS_CD);
        assert!(sql.contains("CHECK (\"FILING_TYPE\" IN (22000, 22001"));
        assert!(sql.contains("CHECK (\"FILING_SEQUENCE\" BETWEEN 0 AND 999)"));

        let sql = SqlExporter::new(SqlDialect::Mysql)
            .with_comments(false)
            .with_choice_checks(true)
            .export_table(&CVR_E530_CD);
        assert!(sql.contains("CHECK (`ENTITY_CD` IN ('', 'CAO'"));
    }

    #[test]
    fn test_comments_per_dialect() {
        let postgres = SqlExporter::new(SqlDialect::Postgres).export_table(&SMRY_CD);
        assert!(
            postgres.contains("COMMENT ON TABLE \"SMRY_CD\" IS 'Summary totals from filings.';")
        );
        assert!(postgres.contains(
            "COMMENT ON COLUMN \"SMRY_CD\".\"FILING_ID\" IS 'Unique filing identification number';"
        ));

        let mysql = SqlExporter::new(SqlDialect::Mysql).export_table(&SMRY_CD);
        assert!(mysql.contains(
            "`FILING_ID` INTEGER NOT NULL COMMENT 'Unique filing identification number'"
        ));

        let standard = SqlExporter::default().export_table(&SMRY_CD);
        assert!(standard.starts_with("-- SMRY_CD: Summary totals from filings.\n"));
        assert!(standard.contains("  -- Unique filing identification number\n  \"FILING_ID\""));
    }
}
