//! Configuration for dictionary exports and logging
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [export]
//! dialect = "postgres"
//! include_choice_checks = true
//! tables = ["FILINGS_CD", "SMRY_CD"]
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use crate::export::dictionary::DictionaryFormat;
use crate::export::sql::{SqlDialect, SqlExporter};
use crate::export::{ExportError, resolve_tables};
use crate::schema::TableSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// `[export]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub dialect: SqlDialect,
    pub include_comments: bool,
    pub include_indexes: bool,
    pub include_choice_checks: bool,
    /// Tables to export; empty means every table
    pub tables: Vec<String>,
    pub dictionary_format: DictionaryFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::Standard,
            include_comments: true,
            include_indexes: true,
            include_choice_checks: false,
            tables: Vec::new(),
            dictionary_format: DictionaryFormat::Json,
        }
    }
}

impl ExportConfig {
    /// Resolve the configured table names against the registry
    pub fn selected_tables(&self) -> Result<Vec<&'static TableSpec>, ExportError> {
        resolve_tables(&self.tables)
    }

    /// SQL exporter configured by this section
    pub fn sql_exporter(&self) -> SqlExporter {
        SqlExporter::new(self.dialect)
            .with_comments(self.include_comments)
            .with_indexes(self.include_indexes)
            .with_choice_checks(self.include_choice_checks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `calaccess_raw=debug`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl DictionaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::InvalidValue {
            key: "config",
            message: e.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "logging.level",
                message: "must not be empty".to_string(),
            });
        }
        self.export
            .selected_tables()
            .map_err(|e| ConfigError::InvalidValue {
                key: "export.tables",
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Set the SQL dialect
    pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
        self.export.dialect = dialect;
        self
    }

    /// Restrict exports to the named tables
    pub fn with_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.export.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_comments(mut self, include: bool) -> Self {
        self.export.include_comments = include;
        self
    }

    pub fn with_indexes(mut self, include: bool) -> Self {
        self.export.include_indexes = include;
        self
    }

    pub fn with_choice_checks(mut self, include: bool) -> Self {
        self.export.include_choice_checks = include;
        self
    }

    pub fn with_dictionary_format(mut self, format: DictionaryFormat) -> Self {
        self.export.dictionary_format = format;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }
}
