//! Static schema of the CAL-ACCESS raw tables
//!
//! Declares, for each source table, its ordered columns with type,
//! nullability, length and choice constraints, plus the identifier
//! columns that link tables together.

pub mod choices;
pub mod column;
pub mod relationship;
pub mod table;
pub mod tables;

pub use choices::{Choice, ChoiceSet};
pub use column::{FieldSpec, FieldType};
pub use relationship::{TABLE_LINKS, TableLink, links_from, links_to};
pub use table::TableSpec;
pub use tables::{
    CVR_E530_CD, FILER_FILINGS_CD, FILERNAME_CD, FILINGS_CD, MAX_AMENDMENT, SMRY_CD, TABLES,
    TEXT_MEMO_CD, table_spec,
};

/// Every choice set referenced by a declared field, without repeats
pub fn choice_sets() -> Vec<&'static ChoiceSet> {
    let mut sets: Vec<&'static ChoiceSet> = Vec::new();
    for table in TABLES {
        for field in table.fields {
            if let Some(set) = field.choices
                && !sets.iter().any(|s| s.name == set.name)
            {
                sets.push(set);
            }
        }
    }
    sets
}

/// Find a choice set by name, ignoring case
pub fn choice_set(name: &str) -> Option<&'static ChoiceSet> {
    choice_sets()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup_ignores_case() {
        assert_eq!(table_spec("filername_cd").map(|t| t.db_table), Some("FILERNAME_CD"));
        assert!(table_spec("NOPE_CD").is_none());
    }

    #[test]
    fn test_choice_sets_collected_once() {
        let names: Vec<&str> = choice_sets().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["FILING_TYPE", "SMRY_REC_TYPE", "SMRY_FORM_TYPE", "ENTITY_CD"]
        );
        assert!(choice_set("smry_form_type").is_some());
    }

    #[test]
    fn test_filer_name_ordering_fields_resolve() {
        let ordering: Vec<&str> = FILERNAME_CD
            .ordering_fields()
            .iter()
            .map(|f| f.db_column)
            .collect();
        assert_eq!(ordering, vec!["NAML", "NAMF"]);
    }
}
