//! Dictionary-wide property tests

use calaccess_raw::schema::{FieldType, TABLE_LINKS, TABLES, choice_sets, table_spec};
use calaccess_raw::validation::{LinkGraph, Severity, audit_dictionary};
use std::collections::HashSet;

mod dictionary_tests {
    use super::*;

    #[test]
    fn test_six_tables_declared() {
        let names: Vec<&str> = TABLES.iter().map(|t| t.db_table).collect();
        assert_eq!(
            names,
            vec![
                "FILERNAME_CD",
                "FILER_FILINGS_CD",
                "FILINGS_CD",
                "SMRY_CD",
                "CVR_E530_CD",
                "TEXT_MEMO_CD"
            ]
        );
    }

    #[test]
    fn test_column_identifiers_are_upper_case_field_names() {
        for table in TABLES {
            let mut seen = HashSet::new();
            for field in table.fields {
                assert_eq!(field.db_column, field.name.to_uppercase(), "{}", table);
                assert!(seen.insert(field.db_column), "{}.{}", table, field.db_column);
            }
        }
    }

    #[test]
    fn test_text_widths_and_decimal_precision() {
        for table in TABLES {
            for field in table.fields {
                match field.field_type {
                    FieldType::Text { max_length } => assert!(max_length > 0),
                    FieldType::Decimal {
                        max_digits,
                        decimal_places,
                    } => assert!(decimal_places <= max_digits),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_choice_sets_unique() {
        for set in choice_sets() {
            assert!(!set.is_empty(), "{}", set.name);
            assert!(set.duplicate_codes().is_empty(), "{}", set.name);
            assert!(set.duplicate_labels().is_empty(), "{}", set.name);
        }
    }

    #[test]
    fn test_audit_only_flags_float_payment_amount() {
        let report = audit_dictionary();
        assert!(report.is_clean());
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, Severity::Warning);
        assert_eq!(report.findings[0].subject, "CVR_E530_CD.PMNT_AMOUNT");
    }

    #[test]
    fn test_shared_identifier_columns_match() {
        let filing_id = table_spec("FILINGS_CD")
            .unwrap()
            .field("filing_id")
            .unwrap();
        for name in ["SMRY_CD", "CVR_E530_CD", "TEXT_MEMO_CD", "FILER_FILINGS_CD"] {
            let field = table_spec(name).unwrap().field("filing_id").unwrap();
            assert_eq!(field.field_type, filing_id.field_type, "{}", name);
            assert!(field.indexed, "{}", name);
        }
    }
}

mod link_tests {
    use super::*;

    #[test]
    fn test_every_child_reaches_filings() {
        let graph = LinkGraph::build().unwrap();
        for link in TABLE_LINKS {
            assert!(graph.can_reach(link.parent_table, link.child_table), "{}", link);
        }
        assert_eq!(graph.parents_of("SMRY_CD"), vec!["FILINGS_CD"]);
        assert!(graph.children_of("TEXT_MEMO_CD").is_empty());
    }

    #[test]
    fn test_load_order_covers_all_tables() {
        let order = LinkGraph::build().unwrap().load_order().unwrap();
        let unique: HashSet<&str> = order.iter().copied().collect();
        assert_eq!(unique.len(), TABLES.len());
    }
}
