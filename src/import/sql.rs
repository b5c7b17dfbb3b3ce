//! SQL Import functionality
//!
//! Parses CREATE TABLE statements with `sqlparser` and recovers each
//! table's column identifiers, declared types and nullability.

use super::{ImportError, ImportedColumn, ImportedTable};
use crate::export::sql::SqlDialect;
use sqlparser::ast::{ColumnOption, ObjectName, ObjectNamePart, Statement};
use sqlparser::dialect::{
    Dialect, GenericDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect,
};
use sqlparser::parser::Parser;
use tracing::debug;

/// SQL schema reader - parses CREATE TABLE statements
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlSchemaReader {
    /// SQL dialect to use for parsing
    pub dialect: SqlDialect,
}

impl SqlSchemaReader {
    /// Create a new reader for the specified dialect
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }

    fn parser_dialect(&self) -> Box<dyn Dialect> {
        match self.dialect {
            SqlDialect::Standard => Box::new(GenericDialect {}),
            SqlDialect::Postgres => Box::new(PostgreSqlDialect {}),
            SqlDialect::Mysql => Box::new(MySqlDialect {}),
            SqlDialect::Sqlserver => Box::new(MsSqlDialect {}),
            SqlDialect::Sqlite => Box::new(SQLiteDialect {}),
        }
    }

    /// Parse SQL and extract table definitions
    ///
    /// CREATE INDEX, COMMENT and DROP statements are accepted and skipped.
    /// Any other statement is rejected, since a schema file should hold
    /// nothing but layout.
    pub fn parse(&self, sql: &str) -> Result<Vec<ImportedTable>, ImportError> {
        let dialect = self.parser_dialect();
        let statements = Parser::parse_sql(dialect.as_ref(), sql)
            .map_err(|e| ImportError::ParseError(e.to_string()))?;

        let mut tables = Vec::new();
        for statement in statements {
            match statement {
                Statement::CreateTable(create) => {
                    let columns = create
                        .columns
                        .iter()
                        .map(|column| ImportedColumn {
                            name: column.name.value.clone(),
                            data_type: column.data_type.to_string(),
                            nullable: !column
                                .options
                                .iter()
                                .any(|def| matches!(def.option, ColumnOption::NotNull)),
                        })
                        .collect();
                    tables.push(ImportedTable {
                        name: table_identifier(&create.name),
                        columns,
                    });
                }
                Statement::CreateIndex(_) | Statement::Comment { .. } | Statement::Drop { .. } => {
                    debug!("Skipping non-table statement");
                }
                other => {
                    let text = other.to_string();
                    let summary: String = text.chars().take(60).collect();
                    return Err(ImportError::UnsupportedStatement(summary));
                }
            }
        }

        debug!(dialect = %self.dialect, tables = tables.len(), "Parsed SQL schema");
        Ok(tables)
    }
}

/// Last part of a possibly qualified name, without quotes
fn table_identifier(name: &ObjectName) -> String {
    match name.0.last() {
        Some(ObjectNamePart::Identifier(ident)) => ident.value.clone(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_table() {
        let reader = SqlSchemaReader::default();
        let tables = reader
            .parse(
                "CREATE TABLE \"FILINGS_CD\" (\n  \"FILING_ID\" INTEGER NOT NULL,\n  \"FILING_TYPE\" INTEGER NOT NULL\n);\n\
                 CREATE INDEX \"filings_cd_filing_id_idx\" ON \"FILINGS_CD\" (\"FILING_ID\");",
            )
            .unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "FILINGS_CD");
        assert_eq!(tables[0].columns[0].name, "FILING_ID");
        assert_eq!(tables[0].columns[0].data_type, "INTEGER");
        assert!(!tables[0].columns[0].nullable);
    }

    #[test]
    fn test_qualified_name_and_nullable_default() {
        let reader = SqlSchemaReader::new(SqlDialect::Postgres);
        let tables = reader
            .parse("CREATE TABLE raw.\"SMRY_CD\" (\"AMOUNT_A\" NUMERIC(14,2));")
            .unwrap();
        assert_eq!(tables[0].name, "SMRY_CD");
        assert!(tables[0].columns[0].nullable);
        assert_eq!(
            tables[0].column("amount_a").map(|c| c.data_type.as_str()),
            Some("NUMERIC(14,2)")
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        let reader = SqlSchemaReader::default();
        assert!(matches!(
            reader.parse("CREATE TABLE ("),
            Err(ImportError::ParseError(_))
        ));
        assert!(matches!(
            reader.parse("INSERT INTO \"FILINGS_CD\" VALUES (1, 22000);"),
            Err(ImportError::UnsupportedStatement(_))
        ));
    }
}
