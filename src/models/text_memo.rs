//! Text memos attached to electronic filings (`TEXT_MEMO_CD`)

use super::record::{CalAccessRecord, FieldValue, FilingVersion, Versioned};
use crate::schema::{TEXT_MEMO_CD, TableSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TextMemoRecord {
    pub filing_id: i32,
    pub amend_id: i32,
    pub line_item: i32,
    pub rec_type: String,
    /// Source filing form or schedule
    pub form_type: String,
    /// Reference number of the transaction the memo explains
    #[serde(default)]
    pub ref_no: String,
    #[serde(default)]
    pub text4000: String,
}

impl TextMemoRecord {
    pub fn new(
        filing_id: i32,
        amend_id: i32,
        line_item: i32,
        form_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            filing_id,
            amend_id,
            line_item,
            rec_type: "TEXT".to_string(),
            form_type: form_type.into(),
            text4000: text.into(),
            ..Self::default()
        }
    }
}

impl Versioned for TextMemoRecord {
    fn version(&self) -> FilingVersion {
        FilingVersion::new(self.filing_id, self.amend_id)
    }
}

impl CalAccessRecord for TextMemoRecord {
    const TABLE: &'static TableSpec = &TEXT_MEMO_CD;

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value: FieldValue<'_> = match field {
            "filing_id" => self.filing_id.into(),
            "amend_id" => self.amend_id.into(),
            "line_item" => self.line_item.into(),
            "rec_type" => FieldValue::Text(&self.rec_type),
            "form_type" => FieldValue::Text(&self.form_type),
            "ref_no" => FieldValue::Text(&self.ref_no),
            "text4000" => FieldValue::Text(&self.text4000),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for TextMemoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filing_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_record;

    #[test]
    fn test_new_memo_is_valid() {
        let memo = TextMemoRecord::new(2001, 0, 1, "F460", "Refund of overpayment");
        assert!(validate_record(&memo).is_empty());
        assert_eq!(memo.value("form_type"), Some(FieldValue::Text("F460")));
        assert_eq!(memo.version(), FilingVersion::new(2001, 0));
    }
}
