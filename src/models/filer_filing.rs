//! Filer to filing index records (`FILER_FILINGS_CD`)

use super::codes::FilingType;
use super::record::{CalAccessRecord, FieldValue, FilingVersion, Versioned};
use crate::schema::{FILER_FILINGS_CD, TableSpec};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Links a filer to one paper, key data entry, legacy or electronic filing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FilerFilingRecord {
    pub filer_id: i32,
    pub filing_id: i32,
    /// Period when the filing was received
    pub period_id: Option<i32>,
    pub form_id: String,
    /// 0 for the original filing, 1 to 999 for amendments
    pub filing_sequence: i32,
    /// Date the filing was entered into the system
    pub filing_date: Option<NaiveDate>,
    /// Logged paper, electronic or KDE filing
    pub stmnt_type: i32,
    /// Whether the filing has been reviewed
    pub stmnt_status: Option<i32>,
    /// Legislative session that the filing applies to
    pub session_id: i32,
    pub user_id: String,
    pub special_audit: Option<i32>,
    pub fine_audit: Option<i32>,
    pub rpt_start: Option<NaiveDate>,
    pub rpt_end: Option<NaiveDate>,
    /// When the Secretary of State received the filing
    pub rpt_date: Option<NaiveDate>,
    pub filing_type: Option<FilingType>,
}

impl FilerFilingRecord {
    pub fn new(filer_id: i32, filing_id: i32, filing_sequence: i32) -> Self {
        Self {
            filer_id,
            filing_id,
            filing_sequence,
            ..Self::default()
        }
    }
}

impl Versioned for FilerFilingRecord {
    fn version(&self) -> FilingVersion {
        FilingVersion::new(self.filing_id, self.filing_sequence)
    }
}

impl CalAccessRecord for FilerFilingRecord {
    const TABLE: &'static TableSpec = &FILER_FILINGS_CD;

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field {
            "filer_id" => self.filer_id.into(),
            "filing_id" => self.filing_id.into(),
            "period_id" => self.period_id.into(),
            "form_id" => FieldValue::Text(&self.form_id),
            "filing_sequence" => self.filing_sequence.into(),
            "filing_date" => self.filing_date.into(),
            "stmnt_type" => self.stmnt_type.into(),
            "stmnt_status" => self.stmnt_status.into(),
            "session_id" => self.session_id.into(),
            "user_id" => FieldValue::Text(&self.user_id),
            "special_audit" => self.special_audit.into(),
            "fine_audit" => self.fine_audit.into(),
            "rpt_start" => self.rpt_start.into(),
            "rpt_end" => self.rpt_end.into(),
            "rpt_date" => self.rpt_date.into(),
            "filing_type" => self.filing_type.map(FilingType::code).into(),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for FilerFilingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.filer_id, self.filing_id)
    }
}
