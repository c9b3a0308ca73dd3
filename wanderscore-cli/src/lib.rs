//! Command-line interface for scoring travel destinations.
//!
//! The `score` subcommand reads a JSON request holding one traveller profile
//! and a list of destinations, scores every destination, and prints a JSON
//! report in input order. Logging goes to stderr and is filtered through
//! `WANDERSCORE_LOG` (default `warn`).
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod score;

pub use error::CliError;
use score::{ScoreArgs, run_score};

pub(crate) const ARG_SCORE_REQUEST: &str = "request";
pub(crate) const ARG_SCORING_CONFIG: &str = "scoring-config";
pub(crate) const ENV_SCORE_REQUEST: &str = "WANDERSCORE_CMDS_SCORE_REQUEST_PATH";
const ENV_LOG: &str = "WANDERSCORE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Wanderscore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when logging cannot be installed, arguments fail to
/// parse, or the selected command fails.
pub fn run() -> Result<(), CliError> {
    init_logging()?;
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

fn init_logging() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::InitLogging)
}

#[derive(Debug, Parser)]
#[command(
    name = "wanderscore",
    about = "Score travel destinations against a traveller profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every destination in a JSON request.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
