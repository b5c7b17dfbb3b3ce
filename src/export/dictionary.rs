//! Data dictionary documents
//!
//! Writes the declared tables, their code tables and the links between
//! them as JSON, YAML or Markdown.

use crate::export::{ExportError, ExportResult};
use crate::schema::{ChoiceSet, FieldSpec, TABLE_LINKS, TableLink, TableSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Output format of a dictionary document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
}

impl DictionaryFormat {
    pub fn name(&self) -> &'static str {
        match self {
            DictionaryFormat::Json => "json",
            DictionaryFormat::Yaml => "yaml",
            DictionaryFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DictionaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DictionaryFormat::Json),
            "yaml" | "yml" => Ok(DictionaryFormat::Yaml),
            "markdown" | "md" => Ok(DictionaryFormat::Markdown),
            other => Err(format!("Unknown dictionary format: {}", other)),
        }
    }
}

#[derive(Serialize)]
struct DictionaryDocument<'a> {
    tables: &'a [&'a TableSpec],
    choice_sets: Vec<&'static ChoiceSet>,
    links: Vec<&'static TableLink>,
}

impl<'a> DictionaryDocument<'a> {
    fn new(tables: &'a [&'a TableSpec]) -> Self {
        let mut choice_sets: Vec<&'static ChoiceSet> = Vec::new();
        for field in tables.iter().flat_map(|t| t.fields) {
            if let Some(set) = field.choices
                && !choice_sets.iter().any(|s| s.name == set.name)
            {
                choice_sets.push(set);
            }
        }
        let selected = |name: &str| tables.iter().any(|t| t.db_table == name);
        let links = TABLE_LINKS
            .iter()
            .filter(|link| selected(link.child_table) && selected(link.parent_table))
            .collect();
        Self {
            tables,
            choice_sets,
            links,
        }
    }
}

/// Exporter for data dictionary documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryExporter {
    pub format: DictionaryFormat,
}

impl DictionaryExporter {
    pub fn new(format: DictionaryFormat) -> Self {
        Self { format }
    }

    /// Export a dictionary document covering `tables`
    pub fn export(&self, tables: &[&TableSpec]) -> Result<ExportResult, ExportError> {
        let document = DictionaryDocument::new(tables);
        let content = match self.format {
            DictionaryFormat::Json => serde_json::to_string_pretty(&document)
                .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            DictionaryFormat::Yaml => serde_yaml::to_string(&document)
                .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            DictionaryFormat::Markdown => render_markdown(&document),
        };
        info!(format = %self.format, tables = tables.len(), "Exported data dictionary");
        Ok(ExportResult {
            content,
            format: self.format.name().to_string(),
        })
    }

    /// Describe one table on its own
    pub fn export_table(&self, table: &TableSpec) -> Result<String, ExportError> {
        match self.format {
            DictionaryFormat::Json => serde_json::to_string_pretty(table)
                .map_err(|e| ExportError::SerializationError(e.to_string())),
            DictionaryFormat::Yaml => serde_yaml::to_string(table)
                .map_err(|e| ExportError::SerializationError(e.to_string())),
            DictionaryFormat::Markdown => {
                let mut out = String::new();
                render_table(&mut out, table);
                Ok(out)
            }
        }
    }
}

fn render_markdown(document: &DictionaryDocument<'_>) -> String {
    let mut out = String::from("# CAL-ACCESS raw data dictionary\n");
    for table in document.tables {
        out.push('\n');
        render_table(&mut out, table);
    }

    if !document.choice_sets.is_empty() {
        out.push_str("\n## Code tables\n");
        for set in &document.choice_sets {
            render_choice_set(&mut out, set);
        }
    }

    if !document.links.is_empty() {
        out.push_str("\n## Links\n\n");
        for link in &document.links {
            out.push_str(&format!("- `{}`", link));
            if !link.description.is_empty() {
                out.push_str(&format!(": {}", cell(link.description)));
            }
            out.push('\n');
        }
    }
    out
}

fn render_table(out: &mut String, table: &TableSpec) {
    out.push_str(&format!("## {}\n\n", table.db_table));
    if !table.doc.is_empty() {
        out.push_str(&format!("{}\n\n", cell(table.doc)));
    }
    out.push_str("| Column | Type | Nullable | Blank | Indexed | Choices | Description |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for field in table.fields {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} | {} | {} | {} |\n",
            field.db_column,
            field.field_type,
            yes_no(field.nullable),
            yes_no(field.blank),
            yes_no(field.indexed),
            field.choices.map(|s| s.name).unwrap_or(""),
            describe(field),
        ));
    }
    if !table.ordering.is_empty() {
        out.push_str(&format!("\nOrdered by {}.\n", table.ordering.join(", ")));
    }
}

fn render_choice_set(out: &mut String, set: &ChoiceSet) {
    out.push_str(&format!("\n### {}\n\n", set.name));
    out.push_str("| Code | Label |\n|---|---|\n");
    for choice in set.entries {
        let code = if choice.code.is_empty() {
            "(blank)".to_string()
        } else {
            format!("`{}`", choice.code)
        };
        out.push_str(&format!("| {} | {} |\n", code, cell(choice.label)));
    }
}

fn describe(field: &FieldSpec) -> String {
    let mut text = field.help_text.map(cell).unwrap_or_default();
    if let Some((min, max)) = field.range {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!("Range {}..={}.", min, max));
    }
    text
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Flatten text so it fits in one table cell
fn cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
