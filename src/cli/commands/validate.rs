//! Validation command implementations

use crate::cli::error::CliError;
use crate::cli::output::{format_audit, format_conformance, format_violations};
use crate::export::sql::SqlDialect;
use crate::import::sql::SqlSchemaReader;
use crate::schema::table_spec;
use crate::validation::{audit_dictionary, check_all, validate_raw_column};
use std::io::Read;
use std::path::PathBuf;

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Handle the check command
pub fn handle_check(table: &str, column: &str, value: &str) -> Result<(), CliError> {
    let spec = table_spec(table)
        .ok_or_else(|| CliError::InvalidArgument(format!("Unknown table: {}", table)))?;
    match validate_raw_column(spec, column, value) {
        Ok(()) => {
            println!("{}.{} accepts '{}'", spec.db_table, column.to_ascii_uppercase(), value);
            Ok(())
        }
        Err(violations) => {
            print!("{}", format_violations(&violations));
            Err(CliError::CheckFailed(format!(
                "{} violation(s)",
                violations.len()
            )))
        }
    }
}

/// Handle the audit command
pub fn handle_audit(json: bool) -> Result<(), CliError> {
    let report = audit_dictionary();
    if json {
        let content = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to render report: {}", e)))?;
        println!("{}", content);
    } else {
        print!("{}", format_audit(&report));
    }
    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::CheckFailed(format!(
            "dictionary audit found {} error(s)",
            report.errors().count()
        )))
    }
}

/// Handle the conform command
pub fn handle_conform(input: &str, dialect: SqlDialect) -> Result<(), CliError> {
    let content = load_input(input)?;
    let tables = SqlSchemaReader::new(dialect).parse(&content)?;
    if tables.is_empty() {
        return Err(CliError::InvalidArgument(
            "No CREATE TABLE statements found".to_string(),
        ));
    }
    let reports = check_all(&tables);
    print!("{}", format_conformance(&reports));

    let failing = reports.iter().filter(|r| !r.conforms()).count();
    if failing == 0 {
        Ok(())
    } else {
        Err(CliError::CheckFailed(format!(
            "{} of {} table(s) do not conform",
            failing,
            reports.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sql::SqlExporter;
    use crate::schema::TABLES;
    use std::io::Write;

    #[test]
    fn test_check_reports_failure() {
        assert!(handle_check("SMRY_CD", "FORM_TYPE", "F460").is_ok());
        assert!(matches!(
            handle_check("SMRY_CD", "FORM_TYPE", "ZZZZ"),
            Err(CliError::CheckFailed(_))
        ));
        assert!(matches!(
            handle_check("NOPE_CD", "FORM_TYPE", "F460"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_shipped_dictionary_passes_audit() {
        assert!(handle_audit(false).is_ok());
    }

    #[test]
    fn test_conform_generated_file() {
        let ddl = SqlExporter::default().export(TABLES).unwrap().content;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ddl.as_bytes()).unwrap();

        let path = file.path().to_string_lossy().to_string();
        assert!(handle_conform(&path, SqlDialect::Standard).is_ok());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            handle_conform("/nonexistent/schema.sql", SqlDialect::Standard),
            Err(CliError::FileReadError(..))
        ));
    }
}
