//! Record validation against the declared table constraints

use super::input::{ValidationError, check_value, validate_raw_value};
use crate::models::CalAccessRecord;
use crate::schema::TableSpec;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A constraint violation located in a table, and a row when known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordViolation {
    pub table: &'static str,
    /// Zero-based position of the row in the validated batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub error: ValidationError,
}

impl RecordViolation {
    pub fn column(&self) -> &str {
        self.error.column()
    }
}

impl fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{} row {}: {}", self.table, row, self.error),
            None => write!(f, "{}: {}", self.table, self.error),
        }
    }
}

impl std::error::Error for RecordViolation {}

/// Check every declared field of a record and return all violations
pub fn validate_record<R: CalAccessRecord>(record: &R) -> Vec<ValidationError> {
    let table = R::TABLE;
    let mut errors = Vec::new();
    for field in table.fields {
        match record.value(field.name) {
            Some(value) => errors.extend(check_value(field, &value)),
            None => errors.push(ValidationError::UnknownColumn {
                table: table.db_table,
                column: field.db_column.to_string(),
            }),
        }
    }
    errors
}

/// Validate a batch of records, reporting each violation with its row
pub fn validate_rows<R: CalAccessRecord>(records: &[R]) -> Vec<RecordViolation> {
    let table = R::TABLE.db_table;
    let violations: Vec<RecordViolation> = records
        .iter()
        .enumerate()
        .flat_map(|(row, record)| {
            validate_record(record)
                .into_iter()
                .map(move |error| RecordViolation {
                    table,
                    row: Some(row),
                    error,
                })
        })
        .collect();
    debug!(
        table,
        rows = records.len(),
        violations = violations.len(),
        "Validated rows"
    );
    violations
}

/// Validate one raw column value of a table by column identifier
pub fn validate_raw_column(
    table: &'static TableSpec,
    db_column: &str,
    raw: &str,
) -> Result<(), Vec<RecordViolation>> {
    let wrap = |error| RecordViolation {
        table: table.db_table,
        row: None,
        error,
    };
    let Some(field) = table.field_by_column(db_column) else {
        return Err(vec![wrap(ValidationError::UnknownColumn {
            table: table.db_table,
            column: db_column.to_string(),
        })]);
    };
    validate_raw_value(field, raw)
        .map_err(|errors| errors.into_iter().map(wrap).collect())
}
