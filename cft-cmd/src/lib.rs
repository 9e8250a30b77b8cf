//! Command implementations for the footprint CLI.
//!
//! Provides subcommands for running a footprint calculation (with
//! optional save and export) and for listing the stored run history.

use clap::Subcommand;

pub mod calculate;
pub mod history;

/// Default path of the local history database.
pub const DEFAULT_DB_PATH: &str = "footprint_history.db";

#[derive(Subcommand)]
pub enum Command {
    /// Estimate an annual footprint from lifestyle inputs
    Calculate(calculate::CalculateArgs),

    /// List saved runs and the annual footprint trend
    History {
        /// Path to the history database
        #[arg(long, default_value = DEFAULT_DB_PATH)]
        db: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Calculate(args) => calculate::run_calculate(args),
        Command::History { db } => history::run_history(&db),
    }
}
