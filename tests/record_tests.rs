//! Record type tests

use calaccess_raw::models::{
    Amendment, AmendmentError, CalAccessRecord, EntityCode, FieldValue, FilerFilingRecord,
    FilerNameRecord, FilingRecord, FilingType, FormType, SummaryRecord,
    SupplementalDisclosureRecord, TextMemoRecord, Versioned, latest_versions, sort_by_ordering,
};
use calaccess_raw::schema::SMRY_CD;
use calaccess_raw::validation::{
    ValidationError, validate_raw_value, validate_record, validate_rows,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::str::FromStr;

fn smith() -> FilerNameRecord {
    FilerNameRecord {
        filer_id: Some(123),
        namf: "JOHN".to_string(),
        filer_type: "CANDIDATE/OFFICEHOLDER".to_string(),
        status: "ACTIVE".to_string(),
        ..FilerNameRecord::new("A001", "SMITH")
    }
}

mod filer_name_tests {
    use super::*;

    #[test]
    fn test_values_preserved() {
        let record = smith();
        assert_eq!(record.value("filer_id"), Some(FieldValue::Integer(123)));
        assert_eq!(record.value("xref_filer_id"), Some(FieldValue::Text("A001")));
        assert_eq!(record.value("naml"), Some(FieldValue::Text("SMITH")));
        assert_eq!(record.value("namf"), Some(FieldValue::Text("JOHN")));
        assert_eq!(record.full_name(), "JOHN SMITH");
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_sorts_after_adams() {
        let adams = FilerNameRecord {
            filer_type: "LOBBYIST".to_string(),
            status: "ACTIVE".to_string(),
            ..FilerNameRecord::new("B002", "ADAMS")
        };
        let mut records = vec![smith(), adams];
        sort_by_ordering(&mut records);
        assert_eq!(records[0].naml, "ADAMS");
        assert_eq!(records[1].naml, "SMITH");
        assert!(validate_rows(&records).is_empty());
    }

    #[test]
    fn test_missing_required_text_reported() {
        let record = FilerNameRecord::new("A001", "SMITH");
        let errors = validate_record(&record);
        assert!(errors.contains(&ValidationError::Blank { column: "FILER_TYPE" }));
        assert!(errors.contains(&ValidationError::Blank { column: "STATUS" }));
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn test_known_form_type_validates() {
        let mut line = SummaryRecord::new(2001, 0, "5", FormType::F460);
        line.amount_a = Some(Decimal::from_str("1250.50").unwrap());
        assert!(validate_record(&line).is_empty());
        assert_eq!(SummaryRecord::db_table(), "SMRY_CD");
    }

    #[test]
    fn test_unknown_form_type_rejected_three_ways() {
        assert!(FormType::from_str("ZZZZ").is_err());

        let json = r#"{"FILING_ID": 1, "AMEND_ID": 0, "LINE_ITEM": "1", "REC_TYPE": "SMRY", "FORM_TYPE": "ZZZZ"}"#;
        assert!(serde_json::from_str::<SummaryRecord>(json).is_err());

        let field = SMRY_CD.field_by_column("FORM_TYPE").unwrap();
        let errors = validate_raw_value(field, "ZZZZ").unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::NotAChoice { column: "FORM_TYPE", value, .. } if value == "ZZZZ"
        ));
    }

    #[test]
    fn test_amount_precision_enforced() {
        let field = SMRY_CD.field_by_column("AMOUNT_A").unwrap();
        assert!(validate_raw_value(field, "123456789012.34").is_ok());
        assert!(validate_raw_value(field, "1.234").is_err());
        assert!(validate_raw_value(field, "12.500").is_err());
        assert!(validate_raw_value(field, "1234567890123.4").is_err());
        assert!(validate_raw_value(field, "").is_ok());
    }
}

mod amendment_tests {
    use super::*;

    #[test]
    fn test_zero_is_original() {
        let line = SummaryRecord::new(1, 0, "1", FormType::F460);
        assert_eq!(line.amendment(), Ok(Amendment::Original));

        let index = FilerFilingRecord::new(10, 1, 0);
        assert!(index.amendment().unwrap().is_original());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let line = SummaryRecord::new(1, 1000, "1", FormType::F460);
        assert_eq!(line.amendment(), Err(AmendmentError::OutOfRange(1000)));
        assert!(matches!(
            validate_record(&line).as_slice(),
            [ValidationError::OutOfRange { column: "AMEND_ID", value: 1000, .. }]
        ));

        let field = SMRY_CD.field_by_column("AMEND_ID").unwrap();
        assert!(validate_raw_value(field, "-1").is_err());
        assert!(validate_raw_value(field, "999").is_ok());
    }

    #[test]
    fn test_latest_amendment_kept() {
        let lines = vec![
            SummaryRecord::new(1, 0, "1", FormType::F460),
            SummaryRecord::new(1, 2, "1", FormType::F460),
            SummaryRecord::new(2, 0, "1", FormType::F450),
        ];
        let latest = latest_versions(&lines);
        assert_eq!(latest.len(), 2);
        assert!(latest.iter().any(|l| l.filing_id == 1 && l.amend_id == 2));
    }
}

mod round_trip_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    /// Serialize to JSON keyed by column, read back, and compare every field
    fn assert_round_trip<R>(record: &R)
    where
        R: CalAccessRecord + Serialize + DeserializeOwned,
    {
        let table = R::TABLE;
        let json = serde_json::to_value(record).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for field in table.fields {
            assert!(keys.contains(&field.db_column), "{}.{}", table, field.db_column);
        }
        assert_eq!(keys.len(), table.fields.len(), "{}", table);

        let decoded: R = serde_json::from_value(json).unwrap();
        for field in table.fields {
            let value = record.value(field.name);
            assert!(value.is_some(), "{}.{} not readable", table, field.db_column);
            assert_eq!(value, decoded.value(field.name), "{}.{}", table, field.db_column);
        }
        assert!(validate_record(record).is_empty(), "{}: {:?}", table, validate_record(record));
    }

    #[test]
    fn test_filer_name() {
        let record = FilerNameRecord {
            effect_dt: date(2015, 1, 5),
            city: "SACRAMENTO".to_string(),
            st: "CA".to_string(),
            ..smith()
        };
        assert_round_trip(&record);
    }

    #[test]
    fn test_filer_filing() {
        let record = FilerFilingRecord {
            period_id: Some(7),
            form_id: "F460".to_string(),
            filing_date: date(2016, 2, 1),
            stmnt_type: 10001,
            session_id: 2015,
            user_id: "KDE01".to_string(),
            rpt_start: date(2015, 7, 1),
            rpt_end: date(2015, 12, 31),
            filing_type: Some(FilingType::Electronic),
            ..FilerFilingRecord::new(123, 2001, 1)
        };
        assert_round_trip(&record);
    }

    #[test]
    fn test_filing() {
        assert_round_trip(&FilingRecord::new(2001, 22001));
    }

    #[test]
    fn test_summary() {
        let mut record = SummaryRecord::new(2001, 0, "5", FormType::F460);
        record.amount_a = Some(Decimal::from_str("1250.50").unwrap());
        record.amount_c = Some(Decimal::from_str("-3.25").unwrap());
        record.elec_dt = date(2016, 6, 7);
        assert_round_trip(&record);
    }

    #[test]
    fn test_supplemental_disclosure() {
        let record = SupplementalDisclosureRecord {
            filing_id: 2001,
            amend_id: 1,
            rec_type: "CVR".to_string(),
            form_type: "E530".to_string(),
            entity_cd: EntityCode::from_str("COM").unwrap(),
            filer_naml: "CITIZENS FOR PARKS".to_string(),
            rpt_date: date(2016, 5, 2),
            cand_naml: "SMITH".to_string(),
            pmnt_dt: date(2016, 4, 30),
            pmnt_amount: 1500.25,
            type_tv: 1,
            other_desc: "NONE".to_string(),
            ..Default::default()
        };
        assert_round_trip(&record);
    }

    #[test]
    fn test_text_memo() {
        let mut record = TextMemoRecord::new(2001, 0, 3, "F460", "Refund of overpayment");
        record.ref_no = "RCPT123".to_string();
        assert_round_trip(&record);
    }
}
