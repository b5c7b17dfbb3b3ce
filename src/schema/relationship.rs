//! Conventional links between tables
//!
//! CAL-ACCESS declares no foreign keys. Rows are joined by matching
//! identifier values, and these descriptors record which columns are
//! joined that way.

use serde::Serialize;

/// Value-matching link from a child table column to a parent table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableLink {
    pub child_table: &'static str,
    pub child_column: &'static str,
    pub parent_table: &'static str,
    pub parent_column: &'static str,
    pub description: &'static str,
}

impl std::fmt::Display for TableLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.child_table, self.child_column, self.parent_table, self.parent_column
        )
    }
}

pub static TABLE_LINKS: &[TableLink] = &[
    TableLink {
        child_table: "FILER_FILINGS_CD",
        child_column: "FILER_ID",
        parent_table: "FILERNAME_CD",
        parent_column: "FILER_ID",
        description: "Filer who submitted the filing",
    },
    TableLink {
        child_table: "FILER_FILINGS_CD",
        child_column: "FILING_ID",
        parent_table: "FILINGS_CD",
        parent_column: "FILING_ID",
        description: "Filing located through the filer index",
    },
    TableLink {
        child_table: "SMRY_CD",
        child_column: "FILING_ID",
        parent_table: "FILINGS_CD",
        parent_column: "FILING_ID",
        description: "Summary totals reported on the filing",
    },
    TableLink {
        child_table: "CVR_E530_CD",
        child_column: "FILING_ID",
        parent_table: "FILINGS_CD",
        parent_column: "FILING_ID",
        description: "Electronic Form 530 cover detail of the filing",
    },
    TableLink {
        child_table: "TEXT_MEMO_CD",
        child_column: "FILING_ID",
        parent_table: "FILINGS_CD",
        parent_column: "FILING_ID",
        description: "Text memos attached to the filing",
    },
];

/// Links in which `db_table` is the child
pub fn links_from(db_table: &str) -> impl Iterator<Item = &'static TableLink> + '_ {
    TABLE_LINKS
        .iter()
        .filter(move |l| l.child_table.eq_ignore_ascii_case(db_table))
}

/// Links in which `db_table` is the parent
pub fn links_to(db_table: &str) -> impl Iterator<Item = &'static TableLink> + '_ {
    TABLE_LINKS
        .iter()
        .filter(move |l| l.parent_table.eq_ignore_ascii_case(db_table))
}
