//! DDL and dictionary export commands

use crate::cli::error::CliError;
use crate::config::ExportConfig;
use crate::export::dictionary::DictionaryExporter;

/// Handle the ddl command
pub fn handle_ddl(config: &ExportConfig) -> Result<(), CliError> {
    let tables = config.selected_tables()?;
    let result = config.sql_exporter().export(&tables)?;
    print!("{}", result.content);
    Ok(())
}

/// Handle the dictionary command
pub fn handle_dictionary(config: &ExportConfig) -> Result<(), CliError> {
    let tables = config.selected_tables()?;
    let result = DictionaryExporter::new(config.dictionary_format).export(&tables)?;
    println!("{}", result.content.trim_end());
    Ok(())
}
