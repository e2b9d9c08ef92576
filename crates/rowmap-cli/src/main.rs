//! rowmap CLI - render SQL column fragments from a record mapping file.

use clap::{Parser, Subcommand};
use rowmap::{ColumnSet, Config, RowmapError};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "rowmap")]
#[command(about = "Render SQL column fragments from a record mapping file")]
#[command(version)]
struct Cli {
    /// Path to YAML record mapping file
    #[arg(short, long, default_value = "records.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the mapping file
    Check,

    /// List declared records and their column counts
    List,

    /// Print the column fragments for a record
    Render {
        /// Record name as declared in the mapping file
        record: String,

        /// Extra columns appended after the record's own
        #[arg(long, value_name = "COLUMN")]
        add: Vec<String>,

        /// Columns removed after additions are applied
        #[arg(long, value_name = "COLUMN")]
        remove: Vec<String>,
    },
}

/// Rendered fragments for one record.
#[derive(Serialize)]
struct Fragments {
    record: String,
    names: Vec<String>,
    names_string: String,
    symbolized_names_string: String,
    updates_string: String,
}

impl Fragments {
    fn new(record: &str, columns: &ColumnSet) -> Self {
        Self {
            record: record.to_string(),
            names: columns.names().to_vec(),
            names_string: columns.names_string(),
            symbolized_names_string: columns.symbolized_names_string(),
            updates_string: columns.updates_string(),
        }
    }
}

#[derive(Serialize)]
struct RecordSummary {
    name: String,
    columns: usize,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), RowmapError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = Config::load(&cli.config)?;
    info!("Loaded {} records from {:?}", config.records.len(), cli.config);

    match cli.command {
        Commands::Check => {
            if cli.output_json {
                println!(
                    "{}",
                    serde_json::json!({ "valid": true, "records": config.records.len() })
                );
            } else {
                println!("Configuration is valid ({} records)", config.records.len());
            }
        }

        Commands::List => {
            let summaries: Vec<RecordSummary> = config
                .records
                .iter()
                .map(|record| RecordSummary {
                    name: record.name.clone(),
                    columns: record.column_set().len(),
                })
                .collect();

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in &summaries {
                    println!("{}\t{}", summary.name, summary.columns);
                }
            }
        }

        Commands::Render {
            record,
            add,
            remove,
        } => {
            let mapping = config.record(&record).ok_or_else(|| {
                RowmapError::Config(format!("record '{}' is not declared", record))
            })?;

            let mut columns = mapping.column_set();
            columns.add(&add).remove(&remove);
            debug!("Rendering {} columns for record {}", columns.len(), record);

            let fragments = Fragments::new(&record, &columns);
            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&fragments)?);
            } else {
                println!("names:      {}", fragments.names_string);
                println!("symbolized: {}", fragments.symbolized_names_string);
                println!("updates:    {}", fragments.updates_string);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries rendered output.
fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
