//! Filing root records (`FILINGS_CD`)

use super::codes::FilingType;
use super::record::{CalAccessRecord, FieldValue};
use crate::schema::{FILINGS_CD, TableSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parent record from which every link to a filing is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FilingRecord {
    pub filing_id: i32,
    /// Raw filing type code. The source declares no choice set for
    /// this column, so unknown codes are kept as they are.
    pub filing_type: i32,
}

impl FilingRecord {
    pub fn new(filing_id: i32, filing_type: i32) -> Self {
        Self {
            filing_id,
            filing_type,
        }
    }

    /// Decoded filing type, when the code is a known one
    pub fn known_filing_type(&self) -> Option<FilingType> {
        FilingType::from_code(self.filing_type)
    }
}

impl CalAccessRecord for FilingRecord {
    const TABLE: &'static TableSpec = &FILINGS_CD;

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "filing_id" => Some(self.filing_id.into()),
            "filing_type" => Some(self.filing_type.into()),
            _ => None,
        }
    }
}

impl fmt::Display for FilingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.filing_id, self.filing_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_record;

    #[test]
    fn test_display_shows_id_and_type() {
        assert_eq!(FilingRecord::new(2001, 22001).to_string(), "2001 22001");
    }

    #[test]
    fn test_known_filing_type() {
        assert_eq!(FilingRecord::new(1, 22006).known_filing_type(), Some(FilingType::CalOnline));
        assert_eq!(FilingRecord::new(1, 99).known_filing_type(), None);
    }

    #[test]
    fn test_unknown_type_code_kept() {
        let filing = FilingRecord::new(1, 99);
        assert_eq!(filing.value("filing_type"), Some(FieldValue::Integer(99)));
        assert!(validate_record(&filing).is_empty());
    }

    #[test]
    fn test_values_by_field_name() {
        let filing = FilingRecord::new(2001, 22001);
        assert_eq!(filing.value("filing_id"), Some(FieldValue::Integer(2001)));
        assert_eq!(filing.value("filing_type"), Some(FieldValue::Integer(22001)));
        assert_eq!(filing.value("FILING_ID"), None);
    }
}
