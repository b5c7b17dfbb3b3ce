//! calaccess-schema entry point
//!
//! Browse, export and check the CAL-ACCESS raw data dictionary.

use calaccess_raw::cli::commands::{
    handle_audit, handle_check, handle_codes, handle_conform, handle_ddl, handle_describe,
    handle_dictionary, handle_tables,
};
use calaccess_raw::config::{DictionaryConfig, LogFormat, LoggingConfig};
use calaccess_raw::export::dictionary::DictionaryFormat;
use calaccess_raw::export::sql::SqlDialect;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calaccess-schema")]
#[command(about = "CAL-ACCESS raw data dictionary - browse, export and check table layouts")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the declared tables
    Tables,

    /// Describe one table
    Describe {
        table: String,

        /// Output format: text, json, yaml or markdown
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate CREATE TABLE statements
    Ddl {
        /// SQL dialect: standard, postgres, mysql, sqlserver or sqlite
        #[arg(short, long)]
        dialect: Option<SqlDialect>,

        /// Table to include; repeat for several, omit for all
        #[arg(short, long = "table")]
        tables: Vec<String>,

        /// Skip CREATE INDEX statements
        #[arg(long)]
        no_indexes: bool,

        /// Skip table and column comments
        #[arg(long)]
        no_comments: bool,

        /// Add CHECK constraints for code tables and ranges
        #[arg(long)]
        checks: bool,
    },

    /// Write the full data dictionary
    Dictionary {
        /// Output format: json, yaml or markdown
        #[arg(short, long)]
        format: Option<DictionaryFormat>,

        /// Table to include; repeat for several, omit for all
        #[arg(short, long = "table")]
        tables: Vec<String>,
    },

    /// Show the codes of a code table
    Codes {
        /// Choice set name, e.g. SMRY_FORM_TYPE
        set: String,
    },

    /// Check one raw value against a column
    Check {
        table: String,
        column: String,
        value: String,
    },

    /// Audit the dictionary for internal consistency
    Audit {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a DDL file against the dictionary ("-" reads stdin)
    Conform {
        input: String,

        /// SQL dialect of the input
        #[arg(short, long)]
        dialect: Option<SqlDialect>,
    },
}

fn init_tracing(verbose: bool, logging: &LoggingConfig) {
    let default_level = if verbose { "debug" } else { logging.level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DictionaryConfig::load(path)?,
        None => DictionaryConfig::default(),
    };
    init_tracing(cli.verbose, &config.logging);

    match cli.command {
        Commands::Tables => handle_tables()?,
        Commands::Describe { table, format } => handle_describe(&table, &format)?,
        Commands::Ddl {
            dialect,
            tables,
            no_indexes,
            no_comments,
            checks,
        } => {
            let mut config = config;
            if let Some(dialect) = dialect {
                config = config.with_dialect(dialect);
            }
            if !tables.is_empty() {
                config = config.with_tables(tables);
            }
            if no_indexes {
                config = config.with_indexes(false);
            }
            if no_comments {
                config = config.with_comments(false);
            }
            if checks {
                config = config.with_choice_checks(true);
            }
            handle_ddl(&config.export)?;
        }
        Commands::Dictionary { format, tables } => {
            let mut config = config;
            if let Some(format) = format {
                config = config.with_dictionary_format(format);
            }
            if !tables.is_empty() {
                config = config.with_tables(tables);
            }
            handle_dictionary(&config.export)?;
        }
        Commands::Codes { set } => handle_codes(&set)?,
        Commands::Check {
            table,
            column,
            value,
        } => handle_check(&table, &column, &value)?,
        Commands::Audit { json } => handle_audit(json)?,
        Commands::Conform { input, dialect } => {
            handle_conform(&input, dialect.unwrap_or(config.export.dialect))?
        }
    }

    Ok(())
}
