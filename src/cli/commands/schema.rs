//! Schema browsing commands

use crate::cli::error::CliError;
use crate::cli::output::{format_choice_set, format_table_list, format_table_text};
use crate::export::dictionary::{DictionaryExporter, DictionaryFormat};
use crate::schema::{TABLES, TableSpec, choice_set, choice_sets, table_spec};

fn lookup_table(name: &str) -> Result<&'static TableSpec, CliError> {
    table_spec(name).ok_or_else(|| {
        let known: Vec<&str> = TABLES.iter().map(|t| t.db_table).collect();
        CliError::InvalidArgument(format!(
            "Unknown table: {} (expected one of {})",
            name,
            known.join(", ")
        ))
    })
}

/// Handle the tables command
pub fn handle_tables() -> Result<(), CliError> {
    print!("{}", format_table_list(TABLES));
    Ok(())
}

/// Handle the describe command
pub fn handle_describe(table: &str, format: &str) -> Result<(), CliError> {
    let spec = lookup_table(table)?;
    let output = match format {
        "text" => format_table_text(spec),
        other => {
            let format: DictionaryFormat = other.parse().map_err(CliError::InvalidArgument)?;
            DictionaryExporter::new(format).export_table(spec)?
        }
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the codes command
pub fn handle_codes(name: &str) -> Result<(), CliError> {
    let set = choice_set(name).ok_or_else(|| {
        let known: Vec<&str> = choice_sets().iter().map(|s| s.name).collect();
        CliError::InvalidArgument(format!(
            "Unknown choice set: {} (expected one of {})",
            name,
            known.join(", ")
        ))
    })?;
    print!("{}", format_choice_set(set));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names_rejected() {
        assert!(matches!(
            handle_describe("RCPT_CD", "text"),
            Err(CliError::InvalidArgument(msg)) if msg.contains("FILERNAME_CD")
        ));
        assert!(matches!(
            handle_describe("SMRY_CD", "xml"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(handle_codes("NOPE"), Err(CliError::InvalidArgument(_))));
        assert!(handle_codes("entity_cd").is_ok());
    }
}
