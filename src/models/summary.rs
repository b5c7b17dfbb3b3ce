//! Filing summary totals (`SMRY_CD`)

use super::codes::{FormType, SummaryRecordType};
use super::record::{CalAccessRecord, FieldValue, FilingVersion, Versioned};
use crate::schema::{SMRY_CD, TableSpec};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One summary total line of a filing version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SummaryRecord {
    pub filing_id: i32,
    pub amend_id: i32,
    /// Line number of the summary total on the source form
    pub line_item: String,
    pub rec_type: SummaryRecordType,
    /// Source filing form or schedule
    pub form_type: FormType,
    pub amount_a: Option<Decimal>,
    pub amount_b: Option<Decimal>,
    pub amount_c: Option<Decimal>,
    /// Election date
    pub elec_dt: Option<NaiveDate>,
}

impl SummaryRecord {
    pub fn new(
        filing_id: i32,
        amend_id: i32,
        line_item: impl Into<String>,
        form_type: FormType,
    ) -> Self {
        Self {
            filing_id,
            amend_id,
            line_item: line_item.into(),
            rec_type: SummaryRecordType::Summary,
            form_type,
            amount_a: None,
            amount_b: None,
            amount_c: None,
            elec_dt: None,
        }
    }

    /// Sum of the reported column amounts, `None` when no column is filled
    pub fn total(&self) -> Option<Decimal> {
        [self.amount_a, self.amount_b, self.amount_c]
            .into_iter()
            .flatten()
            .reduce(|acc, amount| acc + amount)
    }
}

impl Versioned for SummaryRecord {
    fn version(&self) -> FilingVersion {
        FilingVersion::new(self.filing_id, self.amend_id)
    }
}

impl CalAccessRecord for SummaryRecord {
    const TABLE: &'static TableSpec = &SMRY_CD;

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field {
            "filing_id" => self.filing_id.into(),
            "amend_id" => self.amend_id.into(),
            "line_item" => FieldValue::Text(&self.line_item),
            "rec_type" => FieldValue::Text(self.rec_type.code()),
            "form_type" => FieldValue::Text(self.form_type.code()),
            "amount_a" => self.amount_a.into(),
            "amount_b" => self.amount_b.into(),
            "amount_c" => self.amount_c.into(),
            "elec_dt" => self.elec_dt.into(),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for SummaryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filing_id)
    }
}
