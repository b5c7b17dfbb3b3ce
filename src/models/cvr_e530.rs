//! Electronic Form E530 cover records (`CVR_E530_CD`)

use super::codes::EntityCode;
use super::record::{CalAccessRecord, FieldValue, FilingVersion, Versioned};
use crate::schema::{CVR_E530_CD, TableSpec};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Independent expenditure disclosure detail.
///
/// `pmnt_amount` is a floating-point column in the source schema, unlike
/// the fixed-point amounts of `SMRY_CD`. It is kept as `f64` so values
/// round-trip with existing CAL-ACCESS tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SupplementalDisclosureRecord {
    pub filing_id: i32,
    pub amend_id: i32,
    pub rec_type: String,
    pub form_type: String,
    #[serde(default)]
    pub entity_cd: EntityCode,
    pub filer_naml: String,
    #[serde(default)]
    pub filer_namf: String,
    #[serde(default)]
    pub filer_namt: String,
    #[serde(default)]
    pub filer_nams: String,
    #[serde(default)]
    pub report_num: String,
    pub rpt_date: Option<NaiveDate>,
    #[serde(default)]
    pub filer_city: String,
    #[serde(default)]
    pub filer_st: String,
    #[serde(default)]
    pub filer_zip4: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub employer: String,
    pub cand_naml: String,
    #[serde(default)]
    pub cand_namf: String,
    #[serde(default)]
    pub cand_namt: String,
    #[serde(default)]
    pub cand_nams: String,
    pub district_cd: i32,
    pub office_cd: i32,
    pub pmnt_dt: Option<NaiveDate>,
    pub pmnt_amount: f64,
    pub type_literature: i32,
    pub type_printads: i32,
    pub type_radio: i32,
    pub type_tv: i32,
    pub type_it: i32,
    pub type_billboards: i32,
    pub type_other: i32,
    pub other_desc: String,
}

impl SupplementalDisclosureRecord {
    /// Media types marked on the disclosure, by column name
    pub fn media_types(&self) -> Vec<&'static str> {
        [
            ("TYPE_LITERATURE", self.type_literature),
            ("TYPE_PRINTADS", self.type_printads),
            ("TYPE_RADIO", self.type_radio),
            ("TYPE_TV", self.type_tv),
            ("TYPE_IT", self.type_it),
            ("TYPE_BILLBOARDS", self.type_billboards),
            ("TYPE_OTHER", self.type_other),
        ]
        .into_iter()
        .filter(|(_, flag)| *flag != 0)
        .map(|(column, _)| column)
        .collect()
    }
}

impl Versioned for SupplementalDisclosureRecord {
    fn version(&self) -> FilingVersion {
        FilingVersion::new(self.filing_id, self.amend_id)
    }
}

impl CalAccessRecord for SupplementalDisclosureRecord {
    const TABLE: &'static TableSpec = &CVR_E530_CD;

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field {
            "filing_id" => self.filing_id.into(),
            "amend_id" => self.amend_id.into(),
            "rec_type" => FieldValue::Text(&self.rec_type),
            "form_type" => FieldValue::Text(&self.form_type),
            "entity_cd" => FieldValue::Text(self.entity_cd.code()),
            "filer_naml" => FieldValue::Text(&self.filer_naml),
            "filer_namf" => FieldValue::Text(&self.filer_namf),
            "filer_namt" => FieldValue::Text(&self.filer_namt),
            "filer_nams" => FieldValue::Text(&self.filer_nams),
            "report_num" => FieldValue::Text(&self.report_num),
            "rpt_date" => self.rpt_date.into(),
            "filer_city" => FieldValue::Text(&self.filer_city),
            "filer_st" => FieldValue::Text(&self.filer_st),
            "filer_zip4" => FieldValue::Text(&self.filer_zip4),
            "occupation" => FieldValue::Text(&self.occupation),
            "employer" => FieldValue::Text(&self.employer),
            "cand_naml" => FieldValue::Text(&self.cand_naml),
            "cand_namf" => FieldValue::Text(&self.cand_namf),
            "cand_namt" => FieldValue::Text(&self.cand_namt),
            "cand_nams" => FieldValue::Text(&self.cand_nams),
            "district_cd" => self.district_cd.into(),
            "office_cd" => self.office_cd.into(),
            "pmnt_dt" => self.pmnt_dt.into(),
            "pmnt_amount" => FieldValue::Float(self.pmnt_amount),
            "type_literature" => self.type_literature.into(),
            "type_printads" => self.type_printads.into(),
            "type_radio" => self.type_radio.into(),
            "type_tv" => self.type_tv.into(),
            "type_it" => self.type_it.into(),
            "type_billboards" => self.type_billboards.into(),
            "type_other" => self.type_other.into(),
            "other_desc" => FieldValue::Text(&self.other_desc),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for SupplementalDisclosureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filing_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, validate_record};

    fn disclosure() -> SupplementalDisclosureRecord {
        SupplementalDisclosureRecord {
            filing_id: 2001,
            rec_type: "CVR".to_string(),
            form_type: "E530".to_string(),
            filer_naml: "CITIZENS FOR PARKS".to_string(),
            cand_naml: "SMITH".to_string(),
            pmnt_amount: 1500.0,
            type_radio: 1,
            other_desc: "NONE".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filled_disclosure_is_valid() {
        assert!(validate_record(&disclosure()).is_empty());
    }

    #[test]
    fn test_non_finite_payment_rejected() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let record = SupplementalDisclosureRecord {
                pmnt_amount: amount,
                ..disclosure()
            };
            let errors = validate_record(&record);
            assert!(
                matches!(
                    errors.as_slice(),
                    [ValidationError::InvalidFloat { column: "PMNT_AMOUNT", .. }]
                ),
                "{}: {:?}",
                amount,
                errors
            );
        }
    }

    #[test]
    fn test_media_types() {
        let disclosure = SupplementalDisclosureRecord {
            type_radio: 1,
            type_tv: 1,
            ..Default::default()
        };
        assert_eq!(disclosure.media_types(), vec!["TYPE_RADIO", "TYPE_TV"]);
    }

    #[test]
    fn test_every_declared_field_is_readable() {
        let disclosure = SupplementalDisclosureRecord::default();
        for field in CVR_E530_CD.fields {
            assert!(disclosure.value(field.name).is_some(), "missing {}", field.name);
        }
    }
}
