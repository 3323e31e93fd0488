mod commands;
mod manifest;
mod report;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MSGLINT_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "msglint",
    version,
    about = "Checks message declarations for duplicate tags and format mismatches"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate one or more declaration manifests.
    Check(commands::check::CheckArgs),
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Command::Check(args) => commands::check::run(args),
    };

    match outcome {
        Ok(status) => status,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
