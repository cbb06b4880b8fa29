mod app;
mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blackout-cli", about = "Keep spaced-repetition reviews off blackout dates", version)]
struct Cli {
    /// Configuration file (default: <config dir>/blackout-scheduler/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra blackout date (MM-DD or YYYY-MM-DD), may be repeated
    #[arg(long = "blackout", global = true)]
    blackouts: Vec<String>,

    /// Override the maximum number of days added per adjustment
    #[arg(long, global = true)]
    max_skip: Option<u32>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a date is a blackout date
    Check {
        /// Date to check (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Move a proposed interval off blackout dates
    Adjust {
        /// Proposed interval in days
        interval: u32,
        /// Reference date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Adjust the intervals proposed for every rating
    Preview {
        #[arg(long, default_value = "0")]
        again: u32,
        #[arg(long)]
        hard: u32,
        #[arg(long)]
        good: u32,
        #[arg(long)]
        easy: u32,
        /// Reference date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Load the configuration and report each blackout entry
    Validate,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.config.as_deref(), cli.blackouts, cli.max_skip)?;

    match cli.command {
        Command::Check { date } => {
            commands::check::run(&app, date, &cli.format)?;
        }
        Command::Adjust { interval, today } => {
            let today = today.unwrap_or_else(app::local_today);
            commands::adjust::run(&app, interval, today, &cli.format)?;
        }
        Command::Preview { again, hard, good, easy, today } => {
            let today = today.unwrap_or_else(app::local_today);
            let proposed = blackout_lib::scheduler::ProposedIntervals { again, hard, good, easy };
            commands::preview::run(&app, &proposed, today, &cli.format)?;
        }
        Command::Validate => {
            commands::validate::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
