use snaphttp::cli::ProbeArgs;
use snaphttp::error::SnaphttpError;
use snaphttp::logger::initialize as LoggerInitialize;
use snaphttp::probe::{self, ProbeOutcome};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

fn main() -> ExitCode {
    let args = ProbeArgs::parse();

    match run(&args) {
        Ok(ProbeOutcome::Body(body)) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Ok(ProbeOutcome::Failure { diagnostic, .. }) => {
            println!("{diagnostic}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ProbeArgs) -> Result<ProbeOutcome, SnaphttpError> {
    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("snaphttp"));

    // Ensure log directory exists
    create_dir_all(&log_dir).map_err(|e| SnaphttpError::Logger {
        message: format!("Failed to create log directory: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir, args.verbose)?;

    info!("snaphttp starting");
    info!("Log directory: {}", log_dir.display());

    let config = probe::load_config(args)?;
    probe::run(args, &config)
}
