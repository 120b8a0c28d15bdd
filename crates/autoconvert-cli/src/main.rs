//! autoconvert CLI - Map conversion code generator
//!
//! Commands:
//! - `autoconvert generate` - Generate conversion artifacts for annotated structs
//! - `autoconvert check` - Validate an autoconvert.toml config

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "autoconvert")]
#[command(author, version, about = "Code generator for map conversions", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate artifacts for every annotated struct in the sources
    Generate {
        /// Source file or directory (repeatable)
        #[arg(short, long, required = true)]
        source: Vec<PathBuf>,

        /// Output directory for generated files
        #[arg(short, long)]
        output: PathBuf,

        /// Path to autoconvert.toml (default: ./autoconvert.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Spaces per indentation level
        #[arg(short, long)]
        indent: Option<usize>,

        /// Path generated code uses to reach the runtime crate
        #[arg(long)]
        runtime_crate: Option<String>,

        /// Leave generated files writable
        #[arg(long)]
        no_read_only: bool,
    },

    /// Validate an autoconvert.toml config
    Check {
        /// Path to autoconvert.toml (default: ./autoconvert.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            source,
            output,
            config,
            indent,
            runtime_crate,
            no_read_only,
        } => {
            let options = generate::GenerateOptions {
                sources: source,
                output,
                config,
                indent,
                runtime_crate,
                no_read_only,
            };
            let report = generate::run(&options)?;
            for line in generate::summary(&report) {
                println!("{line}");
            }
            if !report.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check { config } => {
            check::run(config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
