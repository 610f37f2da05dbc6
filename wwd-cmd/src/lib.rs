//! Command implementations for the WWD CLI.
//!
//! Provides subcommands for inspecting a vegetation dataset file from
//! the terminal: summary statistics, available dates, and monitored
//! points. Everything is a synchronous local file read.

use clap::Subcommand;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print per-index summary statistics (count, mean, min, max)
    Summary {
        /// Path to the vegetation dataset CSV
        #[arg(short = 'd', long)]
        dataset: String,

        /// Restrict to a single date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Restrict to a single point id
        #[arg(long)]
        point: Option<String>,
    },

    /// List the distinct dates present in a dataset
    Dates {
        /// Path to the vegetation dataset CSV
        #[arg(short = 'd', long)]
        dataset: String,
    },

    /// List the monitored points in a dataset with their coordinates
    Points {
        /// Path to the vegetation dataset CSV
        #[arg(short = 'd', long)]
        dataset: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            dataset,
            date,
            point,
        } => report::run_summary(&dataset, date.as_deref(), point.as_deref()),
        Command::Dates { dataset } => report::run_dates(&dataset),
        Command::Points { dataset } => report::run_points(&dataset),
    }
}
