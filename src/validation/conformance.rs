//! Conformance of an existing table layout to the dictionary
//!
//! Compares a table read back from DDL against the declared [`TableSpec`]
//! and lists every difference a loader would trip over.

use crate::import::{ImportedTable, TypeFamily};
use crate::schema::{FieldType, TableSpec, table_spec};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// One difference between a declared and an imported table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ConformanceIssue {
    #[error("{table} is not a dictionary table")]
    UnknownTable { table: String },
    #[error("{column} is missing")]
    MissingColumn { column: &'static str },
    #[error("{column} is not declared in the dictionary")]
    UnexpectedColumn { column: String },
    #[error("{found} should be spelled {expected}")]
    CasingMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("{column} has type {found}, expected {expected}")]
    TypeMismatch {
        column: &'static str,
        expected: String,
        found: String,
    },
    #[error("{column} has length {found}, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: String,
        found: String,
    },
    #[error("{column} is {}, expected {}", nullability(*.found), nullability(*.expected))]
    NullabilityMismatch {
        column: &'static str,
        expected: bool,
        found: bool,
    },
}

fn nullability(nullable: bool) -> &'static str {
    if nullable { "nullable" } else { "NOT NULL" }
}

/// Conformance findings for one table
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub table: String,
    pub issues: Vec<ConformanceIssue>,
}

impl ConformanceReport {
    pub fn conforms(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conforms() {
            return write!(f, "{}: conforms", self.table);
        }
        writeln!(f, "{}: {} issue(s)", self.table, self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}

/// Compare an imported table with its declaration
pub fn check_conformance(spec: &TableSpec, imported: &ImportedTable) -> ConformanceReport {
    let mut issues = Vec::new();

    for field in spec.fields {
        let Some(column) = imported.column(field.db_column) else {
            issues.push(ConformanceIssue::MissingColumn {
                column: field.db_column,
            });
            continue;
        };

        if column.name != field.db_column {
            issues.push(ConformanceIssue::CasingMismatch {
                expected: field.db_column,
                found: column.name.clone(),
            });
        }

        let expected_family = family_of(&field.field_type);
        match column.sql_type() {
            Some(sql_type) if sql_type.family() == expected_family => {
                if let Some(expected) = expected_length(&field.field_type)
                    && (sql_type.length, sql_type.scale) != expected
                {
                    issues.push(ConformanceIssue::LengthMismatch {
                        column: field.db_column,
                        expected: format_length(expected),
                        found: format_length((sql_type.length, sql_type.scale)),
                    });
                }
            }
            _ => issues.push(ConformanceIssue::TypeMismatch {
                column: field.db_column,
                expected: field.field_type.to_string(),
                found: column.data_type.clone(),
            }),
        }

        if column.nullable != field.nullable {
            issues.push(ConformanceIssue::NullabilityMismatch {
                column: field.db_column,
                expected: field.nullable,
                found: column.nullable,
            });
        }
    }

    for column in &imported.columns {
        if spec.field_by_column(&column.name).is_none() {
            issues.push(ConformanceIssue::UnexpectedColumn {
                column: column.name.clone(),
            });
        }
    }

    let report = ConformanceReport {
        table: spec.db_table.to_string(),
        issues,
    };
    if report.conforms() {
        info!(table = spec.db_table, "Table conforms to the dictionary");
    } else {
        for issue in &report.issues {
            warn!(table = spec.db_table, "{}", issue);
        }
    }
    report
}

/// Check every imported table, matching them to declarations by name
pub fn check_all(imported: &[ImportedTable]) -> Vec<ConformanceReport> {
    let reports: Vec<ConformanceReport> = imported
        .iter()
        .map(|table| match table_spec(&table.name) {
            Some(spec) => {
                let mut report = check_conformance(spec, table);
                if table.name != spec.db_table {
                    report.issues.insert(
                        0,
                        ConformanceIssue::CasingMismatch {
                            expected: spec.db_table,
                            found: table.name.clone(),
                        },
                    );
                }
                report
            }
            None => {
                warn!(table = %table.name, "Table is not part of the dictionary");
                ConformanceReport {
                    table: table.name.clone(),
                    issues: vec![ConformanceIssue::UnknownTable {
                        table: table.name.clone(),
                    }],
                }
            }
        })
        .collect();
    info!(
        tables = reports.len(),
        conforming = reports.iter().filter(|r| r.conforms()).count(),
        "Conformance check finished"
    );
    reports
}

fn family_of(field_type: &FieldType) -> TypeFamily {
    match field_type {
        FieldType::Text { .. } => TypeFamily::Text,
        FieldType::Integer => TypeFamily::Integer,
        FieldType::Date => TypeFamily::Date,
        FieldType::Decimal { .. } => TypeFamily::Decimal,
        FieldType::Float => TypeFamily::Float,
    }
}

fn expected_length(field_type: &FieldType) -> Option<(Option<u32>, Option<u32>)> {
    match field_type {
        FieldType::Text { max_length } => Some((u32::try_from(*max_length).ok(), None)),
        FieldType::Decimal {
            max_digits,
            decimal_places,
        } => Some((Some(*max_digits), Some(*decimal_places))),
        _ => None,
    }
}

fn format_length(length: (Option<u32>, Option<u32>)) -> String {
    match length {
        (Some(length), None) => length.to_string(),
        (Some(precision), Some(scale)) => format!("{},{}", precision, scale),
        _ => "none".to_string(),
    }
}
