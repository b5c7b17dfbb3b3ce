//! Table declarations for the CAL-ACCESS raw tables

use super::column::FieldSpec;
use super::table::TableSpec;
use crate::models::codes::{
    ENTITY_CODE_CHOICES, FILING_TYPE_CHOICES, SMRY_FORM_TYPE_CHOICES, SMRY_REC_TYPE_CHOICES,
};

const FILING_ID_HELP: &str = "Unique filing identification number";
const AMEND_ID_HELP: &str =
    "Amendment identification number. A number of 0 is the original filing and 1 to 999 amendments.";
const FORM_TYPE_HELP: &str = "Name of the source filing form or schedule";

/// Highest amendment number a filing can carry
pub const MAX_AMENDMENT: i64 = 999;

const FILING_ID: FieldSpec = FieldSpec::integer("filing_id", "FILING_ID")
    .indexed()
    .verbose("filing ID")
    .help(FILING_ID_HELP);

const AMEND_ID: FieldSpec = FieldSpec::integer("amend_id", "AMEND_ID")
    .indexed()
    .verbose("amendment ID")
    .help(AMEND_ID_HELP)
    .range(0, MAX_AMENDMENT);

// =============================================================================
// Filer identity
// =============================================================================

pub static FILERNAME_CD: TableSpec = TableSpec {
    db_table: "FILERNAME_CD",
    verbose_name: "FILERNAME_CD",
    verbose_name_plural: "FILERNAME_CD",
    record: "FilerNameRecord",
    doc: "A combination of CAL-ACCESS tables to provide the analyst with filer information. \
          The last name can also hold the full name of the filer, for both campaign and lobbying \
          entities. Full names of PACs, firms and employers are always in the last name field. \
          Major donors may be split between first and last name but usually sit in the last name \
          only. Individual lobbyists, candidates, officeholders, treasurers and responsible \
          officers use both the first and last name fields.",
    fields: &[
        FieldSpec::text("xref_filer_id", "XREF_FILER_ID", 15)
            .indexed()
            .help("The external filer id saved in the forms tables"),
        FieldSpec::integer("filer_id", "FILER_ID")
            .nullable()
            .indexed()
            .help("The internal filer id saved in Cal-Access"),
        FieldSpec::text("filer_type", "FILER_TYPE", 45).indexed(),
        FieldSpec::text("status", "STATUS", 10),
        FieldSpec::date("effect_dt", "EFFECT_DT")
            .nullable()
            .help("Effective date for status"),
        FieldSpec::text("naml", "NAML", 200)
            .help("Last name, (though sometimes the full name)"),
        FieldSpec::text("namf", "NAMF", 55)
            .blank()
            .help("First name"),
        FieldSpec::text("namt", "NAMT", 70)
            .blank()
            .help("Name prefix or title"),
        FieldSpec::text("nams", "NAMS", 32)
            .blank()
            .help("Name suffix"),
        FieldSpec::text("adr1", "ADR1", 200).blank(),
        FieldSpec::text("adr2", "ADR2", 200).blank(),
        FieldSpec::text("city", "CITY", 55).blank(),
        FieldSpec::text("st", "ST", 4).blank(),
        FieldSpec::text("zip4", "ZIP4", 10).blank(),
        FieldSpec::text("phon", "PHON", 60).blank(),
        FieldSpec::text("fax", "FAX", 60).blank(),
        FieldSpec::text("email", "EMAIL", 60).blank(),
    ],
    ordering: &["naml", "namf"],
};

// =============================================================================
// Filings index
// =============================================================================

pub static FILER_FILINGS_CD: TableSpec = TableSpec {
    db_table: "FILER_FILINGS_CD",
    verbose_name: "FILER_FILINGS_CD",
    verbose_name_plural: "FILER_FILINGS_CD",
    record: "FilerFilingRecord",
    doc: "Key table that links filers to their paper, key data entry, legacy, and electronic \
          filings. This table is used as an index to locate filing information.",
    fields: &[
        FieldSpec::integer("filer_id", "FILER_ID")
            .indexed()
            .help("Filer's unique identification number"),
        FILING_ID,
        FieldSpec::integer("period_id", "PERIOD_ID")
            .nullable()
            .blank()
            .help("Identifies the period when the filing was received."),
        FieldSpec::text("form_id", "FORM_ID", 7),
        FieldSpec::integer("filing_sequence", "FILING_SEQUENCE")
            .indexed()
            .help("Amendment number where 0 is an original filing and 1 to 999 are amendments")
            .range(0, MAX_AMENDMENT),
        FieldSpec::date("filing_date", "FILING_DATE")
            .nullable()
            .help("Date the filing was entered into the system"),
        FieldSpec::integer("stmnt_type", "STMNT_TYPE")
            .help("Type of statement. (Logged paper, electronic or KDE filing"),
        FieldSpec::integer("stmnt_status", "STMNT_STATUS")
            .nullable()
            .help("The status of the statement. If the filing has been reviewed or not reviewed."),
        FieldSpec::integer("session_id", "SESSION_ID")
            .help("Legislative session that the filing applies to"),
        FieldSpec::text("user_id", "USER_ID", 12),
        FieldSpec::integer("special_audit", "SPECIAL_AUDIT")
            .nullable()
            .blank()
            .help(
                "Denotes whether the filing has been audited for money laundering or other \
                 special condition.",
            ),
        FieldSpec::integer("fine_audit", "FINE_AUDIT")
            .nullable()
            .blank()
            .help("Indicates whether a filing has been audited for a fine"),
        FieldSpec::date("rpt_start", "RPT_START")
            .nullable()
            .blank()
            .help("Starting date for the period the filing represents"),
        FieldSpec::date("rpt_end", "RPT_END")
            .nullable()
            .blank()
            .help("Ending date for the period the filing represents"),
        FieldSpec::date("rpt_date", "RPT_DATE")
            .nullable()
            .blank()
            .help("When SOS received the filing"),
        FieldSpec::integer("filing_type", "FILING_TYPE")
            .nullable()
            .blank()
            .choices(&FILING_TYPE_CHOICES),
    ],
    ordering: &[],
};

pub static FILINGS_CD: TableSpec = TableSpec {
    db_table: "FILINGS_CD",
    verbose_name: "FILINGS_CD",
    verbose_name_plural: "FILINGS_CD",
    record: "FilingRecord",
    doc: "This table is the parent table from which all links and association to a filing are \
          derived.",
    fields: &[FILING_ID, FieldSpec::integer("filing_type", "FILING_TYPE")],
    ordering: &[],
};

// =============================================================================
// Filing contents
// =============================================================================

pub static SMRY_CD: TableSpec = TableSpec {
    db_table: "SMRY_CD",
    verbose_name: "SMRY_CD",
    verbose_name_plural: "SMRY_CD",
    record: "SummaryRecord",
    doc: "Summary totals from filings.",
    fields: &[
        FILING_ID,
        AMEND_ID,
        FieldSpec::text("line_item", "LINE_ITEM", 8)
            .indexed()
            .help("Line number of the summary total on the source form"),
        FieldSpec::text("rec_type", "REC_TYPE", 4)
            .indexed()
            .verbose("record type")
            .choices(&SMRY_REC_TYPE_CHOICES),
        FieldSpec::text("form_type", "FORM_TYPE", 8)
            .indexed()
            .help(FORM_TYPE_HELP)
            .choices(&SMRY_FORM_TYPE_CHOICES),
        FieldSpec::decimal("amount_a", "AMOUNT_A", 14, 2)
            .nullable()
            .blank()
            .verbose("amount A")
            .help("Summary amount from column A"),
        FieldSpec::decimal("amount_b", "AMOUNT_B", 14, 2)
            .nullable()
            .blank()
            .verbose("amount B")
            .help("Summary amount from column B"),
        FieldSpec::decimal("amount_c", "AMOUNT_C", 14, 2)
            .nullable()
            .blank()
            .verbose("amount C")
            .help("Summary amount from column C"),
        FieldSpec::date("elec_dt", "ELEC_DT")
            .nullable()
            .blank()
            .verbose("election date"),
    ],
    ordering: &[],
};

pub static CVR_E530_CD: TableSpec = TableSpec {
    db_table: "CVR_E530_CD",
    verbose_name: "CVR_E530_CD",
    verbose_name_plural: "CVR_E530_CD",
    record: "SupplementalDisclosureRecord",
    doc: "Cover detail of electronic Form E530 independent expenditure disclosures. \
          The table is undocumented in the printed CAL-ACCESS documentation.",
    fields: &[
        FILING_ID,
        AMEND_ID,
        FieldSpec::text("rec_type", "REC_TYPE", 3),
        FieldSpec::text("form_type", "FORM_TYPE", 4)
            .help(FORM_TYPE_HELP),
        FieldSpec::text("entity_cd", "ENTITY_CD", 32)
            .blank()
            .verbose("entity code")
            .choices(&ENTITY_CODE_CHOICES),
        FieldSpec::text("filer_naml", "FILER_NAML", 200),
        FieldSpec::text("filer_namf", "FILER_NAMF", 4).blank(),
        FieldSpec::text("filer_namt", "FILER_NAMT", 32).blank(),
        FieldSpec::text("filer_nams", "FILER_NAMS", 32).blank(),
        FieldSpec::text("report_num", "REPORT_NUM", 32).blank(),
        FieldSpec::date("rpt_date", "RPT_DATE").nullable(),
        FieldSpec::text("filer_city", "FILER_CITY", 16).blank(),
        FieldSpec::text("filer_st", "FILER_ST", 4).blank(),
        FieldSpec::text("filer_zip4", "FILER_ZIP4", 10).blank(),
        FieldSpec::text("occupation", "OCCUPATION", 15).blank(),
        FieldSpec::text("employer", "EMPLOYER", 13).blank(),
        FieldSpec::text("cand_naml", "CAND_NAML", 46),
        FieldSpec::text("cand_namf", "CAND_NAMF", 21).blank(),
        FieldSpec::text("cand_namt", "CAND_NAMT", 32).blank(),
        FieldSpec::text("cand_nams", "CAND_NAMS", 32).blank(),
        FieldSpec::integer("district_cd", "DISTRICT_CD"),
        FieldSpec::integer("office_cd", "OFFICE_CD"),
        FieldSpec::date("pmnt_dt", "PMNT_DT").nullable(),
        FieldSpec::float("pmnt_amount", "PMNT_AMOUNT"),
        FieldSpec::integer("type_literature", "TYPE_LITERATURE"),
        FieldSpec::integer("type_printads", "TYPE_PRINTADS"),
        FieldSpec::integer("type_radio", "TYPE_RADIO"),
        FieldSpec::integer("type_tv", "TYPE_TV"),
        FieldSpec::integer("type_it", "TYPE_IT"),
        FieldSpec::integer("type_billboards", "TYPE_BILLBOARDS"),
        FieldSpec::integer("type_other", "TYPE_OTHER"),
        FieldSpec::text("other_desc", "OTHER_DESC", 49),
    ],
    ordering: &[],
};

pub static TEXT_MEMO_CD: TableSpec = TableSpec {
    db_table: "TEXT_MEMO_CD",
    verbose_name: "TEXT_MEMO_CD",
    verbose_name_plural: "TEXT_MEMO_CD",
    record: "TextMemoRecord",
    doc: "This table contains all text memos attached to electronic filings.",
    fields: &[
        FILING_ID,
        AMEND_ID,
        FieldSpec::integer("line_item", "LINE_ITEM"),
        FieldSpec::text("rec_type", "REC_TYPE", 4),
        FieldSpec::text("form_type", "FORM_TYPE", 8)
            .help(FORM_TYPE_HELP),
        FieldSpec::text("ref_no", "REF_NO", 20).blank(),
        FieldSpec::text("text4000", "TEXT4000", 4000).blank(),
    ],
    ordering: &[],
};

/// Every declared table, in declaration order
pub static TABLES: &[&TableSpec] = &[
    &FILERNAME_CD,
    &FILER_FILINGS_CD,
    &FILINGS_CD,
    &SMRY_CD,
    &CVR_E530_CD,
    &TEXT_MEMO_CD,
];

/// Find a table by its database identifier, ignoring case
pub fn table_spec(db_table: &str) -> Option<&'static TableSpec> {
    TABLES
        .iter()
        .copied()
        .find(|t| t.db_table.eq_ignore_ascii_case(db_table))
}
