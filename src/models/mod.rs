//! Record types for the CAL-ACCESS raw tables
//!
//! One struct per source table. Every record implements
//! [`CalAccessRecord`], which ties it to its [`crate::schema::TableSpec`].

pub mod codes;
pub mod cvr_e530;
pub mod filer_filing;
pub mod filer_name;
pub mod filing;
pub mod record;
pub mod summary;
pub mod text_memo;

pub use codes::{EntityCode, FilingType, FormType, SummaryRecordType, UnknownCode};
pub use cvr_e530::SupplementalDisclosureRecord;
pub use filer_filing::FilerFilingRecord;
pub use filer_name::FilerNameRecord;
pub use filing::FilingRecord;
pub use record::{
    Amendment, AmendmentError, CalAccessRecord, FieldValue, FilingVersion, Versioned,
    group_by_version, latest_versions, sort_by_ordering,
};
pub use summary::SummaryRecord;
pub use text_memo::TextMemoRecord;
