//! Passkey admin CLI - backup and restore tooling for WebAuthn device exports.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use passkey_core::ExportFormat;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod exit_codes;
mod utils;

use exit_codes::ExitCode;

const EXIT_CODES_HELP: &str = "Exit codes:
  0   Success
  1   General error
  65  Export contains an invalid device
  66  Export file could not be read
  74  Output could not be written";

#[derive(Parser)]
#[command(name = "passkey-admin")]
#[command(author, version, about = "Backup and restore WebAuthn device exports", long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
struct Cli {
    /// Suppress human-readable output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every device contained in an export
    Inspect {
        /// Path to the export file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check that every device in an export decodes
    Validate {
        /// Path to the export file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Decode an export and write it back in canonical form
    ///
    /// Files ending in .yaml or .yml are read as YAML, others as JSON.
    Normalize {
        /// Path to the export file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Output format (defaults to the input file's format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Yaml => ExportFormat::Yaml,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { file } => commands::inspect::execute(file, cli.quiet),
        Commands::Validate { file } => commands::validate::execute(file, cli.quiet),
        Commands::Normalize {
            file,
            output,
            format,
        } => commands::normalize::execute(file, output, format.map(Into::into), cli.quiet),
    };

    let exit = match result {
        Ok(()) => ExitCode::success(),
        Err(err) => ExitCode::from_anyhow(&err),
    };

    if let Some(message) = exit.message {
        eprintln!("Error: {message}");
    }

    std::process::exit(exit.code);
}
