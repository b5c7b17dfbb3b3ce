//! CAL-ACCESS raw data dictionary
//!
//! Typed schema of the California Secretary of State's CAL-ACCESS
//! campaign-finance and lobbying database:
//! - Static table and column declarations (types, nullability, lengths, code tables)
//! - Record types keyed by the exact upper-case column identifiers
//! - Validation of values, records, the dictionary itself and existing DDL
//! - SQL DDL and data dictionary exports

pub mod export;
pub mod import;
pub mod models;
pub mod schema;
pub mod validation;

#[cfg(feature = "config")]
pub mod config;

pub mod cli;

// Re-export commonly used types
pub use export::{
    DictionaryExporter, DictionaryFormat, ExportError, ExportResult, SqlDialect, SqlExporter,
};
pub use import::{ImportError, ImportedColumn, ImportedTable, SqlSchemaReader};
pub use models::{
    Amendment, AmendmentError, CalAccessRecord, EntityCode, FieldValue, FilerFilingRecord,
    FilerNameRecord, FilingRecord, FilingType, FilingVersion, FormType, SummaryRecord,
    SummaryRecordType, SupplementalDisclosureRecord, TextMemoRecord, UnknownCode, Versioned,
};
pub use schema::{ChoiceSet, FieldSpec, FieldType, TABLES, TableLink, TableSpec, table_spec};
pub use validation::{
    DictionaryReport, RecordViolation, ValidationError, audit_dictionary, validate_raw_value,
    validate_record, validate_rows,
};
