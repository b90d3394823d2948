use crate::reading::{run_batch, run_fates, run_read, BatchArgs, FatesArgs, ReadArgs};
use clap::{Parser, Subcommand};
use northchild_engine::config::AppConfig;
use northchild_engine::error::AppError;
use northchild_engine::fate::FateEngine;
use northchild_engine::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "northchild",
    about = "Read a Northchild fate from a fifteen-point allocation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the fate for a single allocation
    Read(ReadArgs),
    /// Evaluate every build in a CSV sheet
    Batch(BatchArgs),
    /// List the fate table with display names and asset paths
    Fates(FatesArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, assets = ?config.assets, "configuration loaded");

    let engine = FateEngine::new(config.assets);

    match cli.command {
        Command::Read(args) => run_read(&engine, args),
        Command::Batch(args) => run_batch(&engine, args),
        Command::Fates(args) => run_fates(&engine, args),
    }
}
