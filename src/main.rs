//! todo2asana - Main Entry Point
//!
//! Command-line front end for the converter. The actual implementation is
//! in the `todo2asana` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use todo2asana::{ExportConfig, run};
use tracing_subscriber::EnvFilter;

/// Convert a Microsoft To Do JSON export into Asana CSV import files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the To Do JSON export
    file: PathBuf,

    /// Directory the CSV files are written to
    #[arg(short, long, default_value = "asana_data")]
    output: PathBuf,

    /// Optional TOML file overriding the row limits
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn install_tracing() {
    // RUST_LOG overrides the default INFO level
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    install_tracing();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    run(&args.file, &args.output, &config)
}
