//! Table descriptors

use super::column::FieldSpec;
use serde::Serialize;

/// Descriptor for one CAL-ACCESS source table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableSpec {
    /// Table identifier in the source database, e.g. `FILERNAME_CD`
    pub db_table: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    /// Name of the Rust record type mapped onto the table
    pub record: &'static str,
    /// What the table holds, as documented by the Secretary of State
    pub doc: &'static str,
    /// Columns in source order
    pub fields: &'static [FieldSpec],
    /// Default ordering, as field names
    pub ordering: &'static [&'static str],
}

impl TableSpec {
    /// Look a field up by its record field name
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look a field up by column identifier, ignoring case
    pub fn field_by_column(&self, db_column: &str) -> Option<&'static FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.db_column.eq_ignore_ascii_case(db_column))
    }

    /// Column identifiers in source order
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.db_column)
    }

    pub fn indexed_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.fields.iter().filter(|f| f.indexed)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.fields.iter().filter(|f| !f.nullable)
    }

    /// Ordering fields resolved to their descriptors
    pub fn ordering_fields(&self) -> Vec<&'static FieldSpec> {
        self.ordering.iter().filter_map(|name| self.field(name)).collect()
    }
}

impl std::fmt::Display for TableSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.db_table)
    }
}
