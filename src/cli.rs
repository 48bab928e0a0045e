use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crs",
    version,
    about = "Comprehensive Ranking System score estimator and projector"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an applicant profile as of today
    Score(ScoreCommand),
    /// Project the score across upcoming birthdays and work anniversaries
    Project(ProjectCommand),
    /// Print the encoded point tables
    Tables,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Applicant profile (TOML)
    pub profile: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ProjectCommand {
    /// Applicant profile (TOML)
    pub profile: PathBuf,
    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Number of upcoming birthdays and anniversaries to sample
    #[arg(long)]
    pub years: Option<u32>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
