//! Validation functionality
//!
//! Provides validation logic for:
//! - Values and records (types, nullability, lengths, choice sets, ranges)
//! - The dictionary itself (self-audit of the declared tables)
//! - Table links (dangling columns, cycles, load order)
//! - Existing DDL (conformance to the declared layout)

pub mod conformance;
pub mod dictionary;
pub mod input;
pub mod record;
pub mod relationships;

pub use conformance::{ConformanceIssue, ConformanceReport, check_all, check_conformance};
pub use dictionary::{DictionaryReport, Finding, Severity, audit_dictionary, audit_tables};
pub use input::{
    ValidationError, ValidationResult, check_value, parse_source_date, validate_raw_value,
};
pub use record::{RecordViolation, validate_raw_column, validate_record, validate_rows};
pub use relationships::{LinkGraph, RelationshipValidationError};
