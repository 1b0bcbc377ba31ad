//! Main entry point for the `fsreport` CLI application.
//!
//! Parses `--path` and `--report`, sets up logging, and runs [`ReportGenerator`].
//! Any failure is printed as a single `Error: ...` line on stderr with exit status 1.

use anyhow::{Context, Result};
use clap::Parser;
use fsreport::{Args, ReportGenerator, ReportOptions};
use std::process::ExitCode;

fn init_logging(args: &Args) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .try_init()
        .context("Failed to initialize logger")
}

fn run(args: &Args) -> Result<()> {
    let generator = ReportGenerator::new(ReportOptions {
        language: args.lang,
    });
    let summary = generator.generate(&args.path, &args.report)?;
    println!("Report saved: {}", summary.destination.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(&args).and_then(|()| run(&args)) {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
