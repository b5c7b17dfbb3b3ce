//! Output formatting for CLI

use crate::schema::{ChoiceSet, FieldSpec, TableSpec};
use crate::validation::{ConformanceReport, DictionaryReport, RecordViolation};

/// One line per table: identifier, column count, record type
pub fn format_table_list(tables: &[&TableSpec]) -> String {
    let width = tables.iter().map(|t| t.db_table.len()).max().unwrap_or(0);
    let mut output = String::new();
    for table in tables {
        output.push_str(&format!(
            "{:<width$}  {:>3} columns  {}\n",
            table.db_table,
            table.fields.len(),
            table.record,
            width = width
        ));
    }
    output
}

/// Plain-text description of one table
pub fn format_table_text(table: &TableSpec) -> String {
    let mut output = format!("{} ({})\n", table.db_table, table.record);
    if !table.doc.is_empty() {
        let doc = table.doc.split_whitespace().collect::<Vec<_>>().join(" ");
        output.push_str(&format!("  {}\n", doc));
    }
    output.push('\n');

    let width = table
        .fields
        .iter()
        .map(|f| f.db_column.len())
        .max()
        .unwrap_or(0);
    for field in table.fields {
        output.push_str(&format!(
            "  {:<width$}  {:<16} {}\n",
            field.db_column,
            field.field_type.to_string(),
            flags(field),
            width = width
        ));
    }

    if !table.ordering.is_empty() {
        output.push_str(&format!("\n  ordered by {}\n", table.ordering.join(", ")));
    }
    output
}

fn flags(field: &FieldSpec) -> String {
    let mut flags = Vec::new();
    flags.push(if field.nullable { "null" } else { "not null" }.to_string());
    if field.blank {
        flags.push("blank".to_string());
    }
    if field.indexed {
        flags.push("indexed".to_string());
    }
    if let Some(set) = field.choices {
        flags.push(format!("choices: {}", set.name));
    }
    if let Some((min, max)) = field.range {
        flags.push(format!("range: {}..={}", min, max));
    }
    flags.join(", ")
}

/// Code table as `code  label` lines
pub fn format_choice_set(set: &ChoiceSet) -> String {
    let width = set.codes().map(str::len).max().unwrap_or(0).max(2);
    let mut output = format!("{} ({} codes)\n", set.name, set.len());
    for choice in set.entries {
        let code = if choice.code.is_empty() { "''" } else { choice.code };
        output.push_str(&format!("  {:<width$}  {}\n", code, choice.label, width = width));
    }
    output
}

pub fn format_audit(report: &DictionaryReport) -> String {
    let mut output = String::new();
    for finding in &report.findings {
        output.push_str(&format!("{}\n", finding));
    }
    output.push_str(&format!(
        "Audited {} table(s): {} error(s), {} warning(s)\n",
        report.tables_checked,
        report.errors().count(),
        report.warnings().count()
    ));
    output
}

pub fn format_conformance(reports: &[ConformanceReport]) -> String {
    let mut output = String::new();
    for report in reports {
        output.push_str(&report.to_string());
        if report.conforms() {
            output.push('\n');
        }
    }
    output
}

pub fn format_violations(violations: &[RecordViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}\n", v))
        .collect()
}
