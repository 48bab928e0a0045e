mod cli;
mod config;
mod error;
mod projection;
mod report;
mod scoring;
mod tables;
mod telemetry;
mod types;

use crate::error::CrsError;
use crate::tables::PointTables;
use crate::types::config::CrsConfig;
use crate::types::report::ScoreReport;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn settings_root(profile: &Path) -> &Path {
    match profile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, CrsError> {
    let cli = cli::Cli::parse();
    let root = match &cli.command {
        cli::Commands::Score(cmd) => settings_root(&cmd.profile),
        cli::Commands::Project(cmd) => settings_root(&cmd.profile),
        cli::Commands::Tables => Path::new("."),
    };
    let settings = config::load_config(root)?.unwrap_or_default();
    telemetry::init(cli.verbose, cli.quiet, settings.log_level())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let profile = config::load_profile(&cmd.profile)?;
            let report = ScoreReport {
                table_version: PointTables::current().version.to_string(),
                breakdown: scoring::score(&profile),
                projection: None,
            };
            println!("{}", report::render(&report, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Project(cmd) => {
            let profile = config::load_profile(&cmd.profile)?;
            let today = cmd
                .today
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut window = settings.projection_window();
            if let Some(years) = cmd.years {
                window.horizon_years = years;
                CrsConfig::validate_window(window)?;
            }

            let points = projection::project(&profile, today, window);
            let empty = points.is_empty();
            let report = ScoreReport {
                table_version: PointTables::current().version.to_string(),
                breakdown: scoring::score(&profile),
                projection: Some(points),
            };
            println!("{}", report::render(&report, output_format(&cmd.format))?);

            if empty {
                eprintln!(
                    "warning: projection is empty; {} needs a valid birth_date and canadian_work_start",
                    cmd.profile.display()
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Tables => {
            println!(
                "{}",
                report::md::tables_to_markdown(PointTables::current())
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
