//! Self-audit of the data dictionary
//!
//! Checks that the declared tables are internally consistent: positive
//! text widths, sane decimal precision, column identifiers matching field
//! names, well-formed choice sets and resolvable links.

use super::relationships::{LinkGraph, RelationshipValidationError};
use crate::schema::{ChoiceSet, FieldType, TABLE_LINKS, TABLES, TableLink, TableSpec};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One audit observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Table, `TABLE.COLUMN`, or choice set name the finding is about
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.subject, self.message)
    }
}

/// Outcome of a dictionary audit
#[derive(Debug, Clone, Default, Serialize)]
pub struct DictionaryReport {
    pub tables_checked: usize,
    pub findings: Vec<Finding>,
}

impl DictionaryReport {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// True when the audit found no errors. Warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    fn error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        });
    }
}

/// Audit the shipped dictionary
pub fn audit_dictionary() -> DictionaryReport {
    audit_tables(TABLES, TABLE_LINKS)
}

/// Audit an arbitrary set of tables and links
pub fn audit_tables(
    tables: &[&'static TableSpec],
    links: &'static [TableLink],
) -> DictionaryReport {
    let mut report = DictionaryReport {
        tables_checked: tables.len(),
        findings: Vec::new(),
    };

    let mut table_names = HashSet::new();
    let mut audited_sets = HashSet::new();
    for table in tables {
        if !table_names.insert(table.db_table) {
            report.error(table.db_table, "table declared more than once");
        }
        audit_table(table, &mut report);
        for field in table.fields {
            if let Some(set) = field.choices
                && audited_sets.insert(set.name)
            {
                audit_choice_set(set, &mut report);
            }
        }
    }

    let mut dangling = false;
    for link in links {
        if let Err(err) = LinkGraph::from_parts(tables, std::slice::from_ref(link)) {
            dangling = true;
            report_link_error(&mut report, err);
        }
    }
    if !dangling {
        match LinkGraph::from_parts(tables, links).and_then(|graph| graph.load_order()) {
            Ok(order) => debug!(?order, "Link graph is acyclic"),
            Err(err) => report_link_error(&mut report, err),
        }
    }

    for finding in report.warnings() {
        warn!("{}", finding);
    }
    report
}

fn report_link_error(report: &mut DictionaryReport, err: RelationshipValidationError) {
    let subject = match &err {
        RelationshipValidationError::UnknownTable { link, .. }
        | RelationshipValidationError::UnknownColumn { link, .. } => link.clone(),
        RelationshipValidationError::Cycle(table) => table.clone(),
    };
    report.error(subject, err.to_string());
}

fn audit_table(table: &TableSpec, report: &mut DictionaryReport) {
    if table.fields.is_empty() {
        report.error(table.db_table, "table declares no columns");
    }
    if table.db_table != table.db_table.to_ascii_uppercase() {
        report.error(table.db_table, "table identifier must be upper case");
    }

    let mut columns = HashSet::new();
    for field in table.fields {
        let subject = format!("{}.{}", table.db_table, field.db_column);
        if !columns.insert(field.db_column) {
            report.error(&subject, "column declared more than once");
        }
        if field.db_column != field.name.to_ascii_uppercase() {
            report.error(
                &subject,
                format!("column identifier does not match field name '{}'", field.name),
            );
        }

        match field.field_type {
            FieldType::Text { max_length } if max_length == 0 => {
                report.error(&subject, "text column has no width");
            }
            FieldType::Decimal {
                max_digits,
                decimal_places,
            } => {
                if max_digits == 0 || decimal_places > max_digits {
                    report.error(
                        &subject,
                        format!(
                            "decimal places ({}) exceed total digits ({})",
                            decimal_places, max_digits
                        ),
                    );
                }
            }
            FieldType::Float if field.is_monetary() => {
                report.warning(
                    &subject,
                    "monetary column uses floating point instead of a fixed-point decimal",
                );
            }
            _ => {}
        }

        if let Some((min, max)) = field.range {
            if field.field_type != FieldType::Integer {
                report.error(&subject, "range declared on a non-integer column");
            } else if min > max {
                report.error(&subject, format!("empty range {}..={}", min, max));
            }
        }

        if let Some(set) = field.choices {
            if let FieldType::Text { max_length } = field.field_type {
                for code in set.codes() {
                    if code.chars().count() > max_length {
                        report.error(
                            &subject,
                            format!("code '{}' of {} exceeds column width", code, set.name),
                        );
                    }
                }
            } else if field.field_type == FieldType::Integer {
                for code in set.codes() {
                    if code.parse::<i32>().is_err() {
                        report.error(
                            &subject,
                            format!("code '{}' of {} is not an integer", code, set.name),
                        );
                    }
                }
            } else {
                report.error(&subject, "choices declared on a non-coded column type");
            }
        }
    }

    for name in table.ordering {
        if table.field(name).is_none() {
            report.error(
                table.db_table,
                format!("ordering references unknown field '{}'", name),
            );
        }
    }
}

fn audit_choice_set(set: &ChoiceSet, report: &mut DictionaryReport) {
    if set.is_empty() {
        report.error(set.name, "choice set has no codes");
    }
    for code in set.duplicate_codes() {
        report.error(set.name, format!("code '{}' declared more than once", code));
    }
    for label in set.duplicate_labels() {
        report.error(set.name, format!("label '{}' shared by several codes", label));
    }
    for choice in set.entries {
        if choice.label.trim().is_empty() {
            report.error(set.name, format!("code '{}' has no label", choice.code));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Choice, FILINGS_CD, FieldSpec, SMRY_CD, TEXT_MEMO_CD};

    #[test]
    fn test_shipped_dictionary_is_clean() {
        let report = audit_dictionary();
        assert!(report.is_clean(), "{:#?}", report.findings);
        assert_eq!(report.tables_checked, 6);

        let warnings: Vec<&Finding> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].subject, "CVR_E530_CD.PMNT_AMOUNT");
    }

    static BROKEN_CHOICES: ChoiceSet = ChoiceSet {
        name: "BROKEN",
        entries: &[
            Choice { code: "A", label: "" },
            Choice { code: "B", label: "" },
            Choice { code: "TOOLONG", label: "Long" },
        ],
    };

    static BROKEN: TableSpec = TableSpec {
        db_table: "BROKEN_CD",
        verbose_name: "BROKEN_CD",
        verbose_name_plural: "BROKEN_CD",
        record: "Broken",
        doc: "",
        fields: &[
            FieldSpec::text("code", "CODE", 2).choices(&BROKEN_CHOICES),
            FieldSpec::text("empty", "EMPTY", 0),
            FieldSpec::decimal("amount", "AMT", 2, 4),
            FieldSpec::integer("seq", "SEQ").range(5, 1),
        ],
        ordering: &["missing"],
    };

    #[test]
    fn test_broken_table_reports_every_problem() {
        let report = audit_tables(&[&BROKEN], &[]);
        let messages: Vec<String> = report.errors().map(|f| f.to_string()).collect();
        let has = |needle: &str| messages.iter().any(|m| m.contains(needle));

        assert!(has("BROKEN_CD.CODE: code 'TOOLONG' of BROKEN exceeds column width"));
        assert!(has("BROKEN_CD.EMPTY: text column has no width"));
        assert!(has("BROKEN_CD.AMT: column identifier does not match field name 'amount'"));
        assert!(has("decimal places (4) exceed total digits (2)"));
        assert!(has("empty range 5..=1"));
        assert!(has("ordering references unknown field 'missing'"));
        assert!(has("BROKEN: label '' shared by several codes"));
        assert!(has("BROKEN: code 'A' has no label"));
        assert!(!report.is_clean());
    }

    static TWO_DANGLING: &[TableLink] = &[
        TableLink {
            child_table: "SMRY_CD",
            child_column: "FILER_ID",
            parent_table: "FILINGS_CD",
            parent_column: "FILING_ID",
            description: "",
        },
        TableLink {
            child_table: "TEXT_MEMO_CD",
            child_column: "FILING_ID",
            parent_table: "RCPT_CD",
            parent_column: "FILING_ID",
            description: "",
        },
    ];

    #[test]
    fn test_every_dangling_link_reported() {
        let report = audit_tables(&[&FILINGS_CD, &SMRY_CD, &TEXT_MEMO_CD], TWO_DANGLING);
        let subjects: Vec<&str> = report.errors().map(|f| f.subject.as_str()).collect();
        assert_eq!(
            subjects,
            vec![
                "SMRY_CD.FILER_ID -> FILINGS_CD.FILING_ID",
                "TEXT_MEMO_CD.FILING_ID -> RCPT_CD.FILING_ID",
            ]
        );
    }
}
