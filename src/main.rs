use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use budget::cli::{handle_command, Commands};
use budget::config::{resolve_data_file, DATA_FILE_ENV};
use budget::log::init_logging;
use budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budgeting helper",
    long_about = "Record income and expenses, set monthly limits per category, \
                  and summarize any month. Data is kept in a single JSON file."
)]
struct Cli {
    /// Path to the JSON data file
    #[arg(long, global = true, env = DATA_FILE_ENV, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let data_file = resolve_data_file(cli.data_file)?;
    tracing::debug!(path = %data_file.display(), "Using data file");

    let storage = Storage::new(data_file);
    handle_command(&storage, cli.command)?;
    Ok(())
}
