//! Command implementations

pub mod export;
pub mod schema;
pub mod validate;

pub use export::{handle_ddl, handle_dictionary};
pub use schema::{handle_codes, handle_describe, handle_tables};
pub use validate::{handle_audit, handle_check, handle_conform};
