use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use log::LevelFilter;

mod commands;
mod config;
mod console_report;
mod create_report;
mod detect;
mod error;
mod list_members;
mod logging;
mod types;

use config::{default_members_dir, RunConfig};
use error::ReportError;

/// Reports which members have completed assignment 1 and assignment 2
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Members directory, or an output mode (console, markdown, both) when given alone
    first: Option<Utf8PathBuf>,

    /// Output mode: console, markdown or both
    mode: Option<String>,

    /// Logging level. One of: off, error, warn, info, debug, trace
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Args::parse();

    if let Err(e) = logging::init_logging(cli.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match RunConfig::from_args(
        cli.first.as_deref(),
        cli.mode.as_deref(),
        default_members_dir,
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match commands::generate_report(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ReportError::MembersDirNotFound(_)) => {
            println!("Error: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
