//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use timesheet_import::config::ImportConfig;
use timesheet_import::output::OutputMode;

/// timesheet-import - Validate timesheet import files
#[derive(Parser, Debug)]
#[command(
    name = "timesheet-import",
    version,
    about = "Validate timesheet import files",
    long_about = "Parse timesheet import files against known employees and projects.\n\n\
                  A file declares one employee and one or more dated sections of entries.\n\
                  The first malformed line rejects the whole file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a file and show its entries per project
    Import {
        /// Import file to read
        file: PathBuf,

        /// Reference data file (employees and projects)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Write new or renamed entities back to the reference file
        #[arg(short, long)]
        save: bool,
    },

    /// Validate a file without importing it
    Check {
        /// Import file to read
        file: PathBuf,

        /// Reference data file (employees and projects)
        #[arg(short, long)]
        reference: Option<PathBuf>,
    },

    /// List every error a file can be rejected with
    Errors,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = ImportConfig::load(&std::env::current_dir()?)?;

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Import {
            file,
            reference,
            save,
        }) => commands::import(
            &file,
            reference.as_deref(),
            save || config.save_reference,
            &config,
            output_mode,
        ),
        Some(Command::Check { file, reference }) => {
            commands::check(&file, reference.as_deref(), &config, output_mode)
        },
        Some(Command::Errors) => {
            commands::errors(output_mode);
            Ok(())
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": timesheet_import::VERSION
                    })
                );
            } else {
                println!("timesheet-import v{}", timesheet_import::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": timesheet_import::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("timesheet-import v{}", timesheet_import::VERSION);
                println!("\nRun 'timesheet-import --help' for usage");
                println!("Run 'timesheet-import check <FILE>' to validate a file");
            }
            Ok(())
        },
    }
}
