//! Configuration file tests
#![cfg(feature = "config")]

use calaccess_raw::config::{ConfigError, DictionaryConfig, LogFormat};
use calaccess_raw::export::{DictionaryFormat, SqlDialect};
use std::io::Write;

mod config_tests {
    use super::*;

    #[test]
    fn test_round_trip_through_toml() {
        let config = DictionaryConfig::new()
            .with_dialect(SqlDialect::Sqlite)
            .with_tables(["FILINGS_CD", "SMRY_CD"])
            .with_choice_checks(true)
            .with_dictionary_format(DictionaryFormat::Yaml)
            .with_log_format(LogFormat::Json);
        let text = config.to_toml_string().unwrap();
        assert_eq!(DictionaryConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\ndialect = \"postgres\"\ntables = [\"SMRY_CD\"]").unwrap();

        let config = DictionaryConfig::load(file.path()).unwrap();
        assert_eq!(config.export.dialect, SqlDialect::Postgres);

        let tables = config.export.selected_tables().unwrap();
        let ddl = config.export.sql_exporter().export(&tables).unwrap();
        assert!(ddl.content.contains("COMMENT ON TABLE \"SMRY_CD\""));
    }

    #[test]
    fn test_bad_files_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\ntables = [\"NOPE_CD\"]").unwrap();
        assert!(matches!(
            DictionaryConfig::load(file.path()),
            Err(ConfigError::InvalidValue { .. })
        ));

        assert!(matches!(
            DictionaryConfig::load("/nonexistent/calaccess.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
