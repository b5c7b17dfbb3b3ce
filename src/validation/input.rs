//! Value-level constraint checks.
//!
//! These functions check one value against one [`FieldSpec`]. They back
//! both typed record validation and the raw-string path an ingestion
//! pipeline uses before it builds a record.

use crate::models::FieldValue;
use crate::schema::{FieldSpec, FieldType};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

/// A value violating a declared column constraint.
/// Every variant names the column by its database identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("{column} is required")]
    Required { column: &'static str },

    #[error("{column} cannot be blank")]
    Blank { column: &'static str },

    #[error("{column} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        column: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{column}: '{value}' is not a valid {choice_set} code")]
    NotAChoice {
        column: &'static str,
        value: String,
        choice_set: &'static str,
    },

    #[error("{column}: {value} is outside {min}..={max}")]
    OutOfRange {
        column: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{column}: no more than {max} digits in total (got {actual})")]
    MaxDigits {
        column: &'static str,
        max: u32,
        actual: u32,
    },

    #[error("{column}: no more than {max} decimal places (got {actual})")]
    MaxDecimalPlaces {
        column: &'static str,
        max: u32,
        actual: u32,
    },

    #[error("{column}: no more than {max} digits before the decimal point (got {actual})")]
    MaxWholeDigits {
        column: &'static str,
        max: u32,
        actual: u32,
    },

    #[error("{column}: '{value}' is not an integer")]
    InvalidInteger { column: &'static str, value: String },

    #[error("{column}: '{value}' is not a date")]
    InvalidDate { column: &'static str, value: String },

    #[error("{column}: '{value}' is not a decimal number")]
    InvalidDecimal { column: &'static str, value: String },

    #[error("{column}: '{value}' is not a number")]
    InvalidFloat { column: &'static str, value: String },

    #[error("{column}: expected {expected}, found {found}")]
    TypeMismatch {
        column: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{table} has no column {column}")]
    UnknownColumn { table: &'static str, column: String },
}

impl ValidationError {
    /// Column the error refers to
    pub fn column(&self) -> &str {
        match self {
            ValidationError::Required { column }
            | ValidationError::Blank { column }
            | ValidationError::TooLong { column, .. }
            | ValidationError::NotAChoice { column, .. }
            | ValidationError::OutOfRange { column, .. }
            | ValidationError::MaxDigits { column, .. }
            | ValidationError::MaxDecimalPlaces { column, .. }
            | ValidationError::MaxWholeDigits { column, .. }
            | ValidationError::InvalidInteger { column, .. }
            | ValidationError::InvalidDate { column, .. }
            | ValidationError::InvalidDecimal { column, .. }
            | ValidationError::InvalidFloat { column, .. }
            | ValidationError::TypeMismatch { column, .. } => column,
            ValidationError::UnknownColumn { column, .. } => column,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Date layouts found in CAL-ACCESS exports, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%m/%d/%Y %I:%M:%S %p", "%Y-%m-%d %H:%M:%S"];

static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

/// Check one typed value against a field, collecting every violation
pub fn check_value(field: &FieldSpec, value: &FieldValue<'_>) -> Vec<ValidationError> {
    let column = field.db_column;
    let mut errors = Vec::new();

    match (value, field.field_type) {
        (FieldValue::Null, _) => {
            if !field.nullable {
                errors.push(ValidationError::Required { column });
            }
        }
        (FieldValue::Text(text), FieldType::Text { max_length }) => {
            if text.is_empty() {
                if !field.blank {
                    errors.push(ValidationError::Blank { column });
                }
                return errors;
            }
            let actual = text.chars().count();
            if actual > max_length {
                errors.push(ValidationError::TooLong {
                    column,
                    max: max_length,
                    actual,
                });
            }
            if let Some(choices) = field.choices
                && !choices.contains(text)
            {
                errors.push(ValidationError::NotAChoice {
                    column,
                    value: (*text).to_string(),
                    choice_set: choices.name,
                });
            }
        }
        (FieldValue::Integer(number), FieldType::Integer) => {
            if let Some((min, max)) = field.range
                && !(min..=max).contains(number)
            {
                errors.push(ValidationError::OutOfRange {
                    column,
                    value: *number,
                    min,
                    max,
                });
            }
            if let Some(choices) = field.choices
                && !choices.contains(&number.to_string())
            {
                errors.push(ValidationError::NotAChoice {
                    column,
                    value: number.to_string(),
                    choice_set: choices.name,
                });
            }
        }
        (
            FieldValue::Decimal(amount),
            FieldType::Decimal {
                max_digits,
                decimal_places,
            },
        ) => errors.extend(check_decimal(column, amount, max_digits, decimal_places)),
        (FieldValue::Float(number), FieldType::Float) => {
            if !number.is_finite() {
                errors.push(ValidationError::InvalidFloat {
                    column,
                    value: number.to_string(),
                });
            }
        }
        (FieldValue::Date(_), FieldType::Date) => {}
        (found, expected) => errors.push(ValidationError::TypeMismatch {
            column,
            expected: expected.name(),
            found: found.kind(),
        }),
    }

    errors
}

/// Digit limits of a fixed-point column. Digits are counted as written,
/// so trailing zeros after the point count and `12.500` has three
/// decimal places.
pub fn check_decimal(
    column: &'static str,
    amount: &Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> Vec<ValidationError> {
    let decimals = amount.scale();
    let mantissa = amount.mantissa().unsigned_abs();
    let digits = if mantissa == 0 {
        1
    } else {
        mantissa.to_string().len() as u32
    };
    // A value like 0.05 has more decimals than significant digits
    let (digits, whole_digits) = if decimals >= digits {
        (decimals, 0)
    } else {
        (digits, digits - decimals)
    };

    let mut errors = Vec::new();
    if digits > max_digits {
        errors.push(ValidationError::MaxDigits {
            column,
            max: max_digits,
            actual: digits,
        });
    }
    if decimals > decimal_places {
        errors.push(ValidationError::MaxDecimalPlaces {
            column,
            max: decimal_places,
            actual: decimals,
        });
    }
    let max_whole = max_digits.saturating_sub(decimal_places);
    if whole_digits > max_whole {
        errors.push(ValidationError::MaxWholeDigits {
            column,
            max: max_whole,
            actual: whole_digits,
        });
    }
    errors
}

/// Parse a raw source date. Accepts ISO dates and the `M/D/YYYY` form,
/// with or without the `H:MM:SS AM` time suffix CAL-ACCESS appends.
pub fn parse_source_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|dt| dt.date())
        })
}

/// Validate a raw source string destined for `field`.
///
/// An empty string is a blank value for text columns and an absent value
/// for every other type. Surrounding whitespace is significant for text
/// columns and ignored for the others.
///
/// # Examples
///
/// ```
/// use calaccess_raw::schema::SMRY_CD;
/// use calaccess_raw::validation::input::validate_raw_value;
///
/// let form_type = SMRY_CD.field("form_type").unwrap();
/// assert!(validate_raw_value(form_type, "F460").is_ok());
/// assert!(validate_raw_value(form_type, "ZZZZ").is_err());
/// ```
pub fn validate_raw_value(field: &FieldSpec, raw: &str) -> Result<(), Vec<ValidationError>> {
    let column = field.db_column;
    let trimmed = raw.trim();

    let errors = match field.field_type {
        FieldType::Text { .. } => check_value(field, &FieldValue::Text(raw)),
        _ if trimmed.is_empty() => check_value(field, &FieldValue::Null),
        FieldType::Integer => match parse_integer(trimmed) {
            Some(number) => check_value(field, &FieldValue::Integer(number)),
            None => vec![ValidationError::InvalidInteger {
                column,
                value: raw.to_string(),
            }],
        },
        FieldType::Date => match parse_source_date(trimmed) {
            Some(date) => check_value(field, &FieldValue::Date(date)),
            None => vec![ValidationError::InvalidDate {
                column,
                value: raw.to_string(),
            }],
        },
        FieldType::Decimal { .. } => match Decimal::from_str(trimmed) {
            Ok(amount) => check_value(field, &FieldValue::Decimal(amount)),
            Err(_) => vec![ValidationError::InvalidDecimal {
                column,
                value: raw.to_string(),
            }],
        },
        FieldType::Float => match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Vec::new(),
            _ => vec![ValidationError::InvalidFloat {
                column,
                value: raw.to_string(),
            }],
        },
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    if !INTEGER_PATTERN.is_match(raw) {
        return None;
    }
    raw.parse::<i64>()
        .ok()
        .filter(|n| i32::try_from(*n).is_ok())
}
