//! Filer identity records (`FILERNAME_CD`)

use super::record::{CalAccessRecord, FieldValue};
use crate::schema::{FILERNAME_CD, TableSpec};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name and address of a filer.
///
/// `naml` may hold the full name of the filer. PACs, firms and employers
/// always use it alone; individuals split their name across `naml` and
/// `namf`. Default ordering is last name then first name.
///
/// # Example
///
/// ```rust
/// use calaccess_raw::models::FilerNameRecord;
///
/// let filer = FilerNameRecord {
///     filer_id: Some(123),
///     namf: "JOHN".to_string(),
///     ..FilerNameRecord::new("A001", "SMITH")
/// };
/// assert_eq!(filer.to_string(), "123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FilerNameRecord {
    /// The external filer id saved in the forms tables
    pub xref_filer_id: String,
    /// The internal filer id saved in Cal-Access
    pub filer_id: Option<i32>,
    pub filer_type: String,
    pub status: String,
    /// Effective date for status
    pub effect_dt: Option<NaiveDate>,
    /// Last name, or the full name
    pub naml: String,
    #[serde(default)]
    pub namf: String,
    /// Name prefix or title
    #[serde(default)]
    pub namt: String,
    /// Name suffix
    #[serde(default)]
    pub nams: String,
    #[serde(default)]
    pub adr1: String,
    #[serde(default)]
    pub adr2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub st: String,
    #[serde(default)]
    pub zip4: String,
    #[serde(default)]
    pub phon: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub email: String,
}

impl FilerNameRecord {
    pub fn new(xref_filer_id: impl Into<String>, naml: impl Into<String>) -> Self {
        Self {
            xref_filer_id: xref_filer_id.into(),
            naml: naml.into(),
            ..Self::default()
        }
    }

    /// Name as it would be addressed: title, first, last, suffix
    pub fn full_name(&self) -> String {
        [
            self.namt.as_str(),
            self.namf.as_str(),
            self.naml.as_str(),
            self.nams.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl CalAccessRecord for FilerNameRecord {
    const TABLE: &'static TableSpec = &FILERNAME_CD;

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field {
            "xref_filer_id" => FieldValue::Text(&self.xref_filer_id),
            "filer_id" => self.filer_id.into(),
            "filer_type" => FieldValue::Text(&self.filer_type),
            "status" => FieldValue::Text(&self.status),
            "effect_dt" => self.effect_dt.into(),
            "naml" => FieldValue::Text(&self.naml),
            "namf" => FieldValue::Text(&self.namf),
            "namt" => FieldValue::Text(&self.namt),
            "nams" => FieldValue::Text(&self.nams),
            "adr1" => FieldValue::Text(&self.adr1),
            "adr2" => FieldValue::Text(&self.adr2),
            "city" => FieldValue::Text(&self.city),
            "st" => FieldValue::Text(&self.st),
            "zip4" => FieldValue::Text(&self.zip4),
            "phon" => FieldValue::Text(&self.phon),
            "fax" => FieldValue::Text(&self.fax),
            "email" => FieldValue::Text(&self.email),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for FilerNameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filer_id {
            Some(id) => write!(f, "{}", id),
            None => f.write_str(&self.xref_filer_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_skips_blank_parts() {
        let filer = FilerNameRecord {
            namt: "MR.".to_string(),
            namf: "JOHN".to_string(),
            ..FilerNameRecord::new("A001", "SMITH")
        };
        assert_eq!(filer.full_name(), "MR. JOHN SMITH");

        let pac = FilerNameRecord::new("C002", "CALIFORNIANS FOR BETTER SCHOOLS");
        assert_eq!(pac.full_name(), "CALIFORNIANS FOR BETTER SCHOOLS");
    }

    #[test]
    fn test_display_falls_back_to_xref_id() {
        assert_eq!(FilerNameRecord::new("A001", "SMITH").to_string(), "A001");
    }

    #[test]
    fn test_every_declared_field_is_readable() {
        let filer = FilerNameRecord::new("A001", "SMITH");
        for field in FILERNAME_CD.fields {
            assert!(filer.value(field.name).is_some(), "missing {}", field.name);
        }
        assert!(filer.value("not_a_field").is_none());
    }

    #[test]
    fn test_serde_uses_column_identifiers() {
        let filer = FilerNameRecord {
            filer_id: Some(123),
            ..FilerNameRecord::new("A001", "SMITH")
        };
        let json = serde_json::to_value(&filer).unwrap();
        assert_eq!(json["XREF_FILER_ID"], "A001");
        assert_eq!(json["FILER_ID"], 123);
        assert_eq!(json["ZIP4"], "");

        let parsed: FilerNameRecord = serde_json::from_str(
            r#"{"XREF_FILER_ID":"A001","FILER_ID":null,"FILER_TYPE":"CANDIDATE","STATUS":"ACTIVE","EFFECT_DT":"2009-07-15","NAML":"SMITH"}"#,
        )
        .unwrap();
        assert_eq!(parsed.effect_dt, NaiveDate::from_ymd_opt(2009, 7, 15));
        assert_eq!(parsed.namf, "");
    }
}
