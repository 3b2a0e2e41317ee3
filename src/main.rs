// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use tiny_checks::app::{self, Report, Verdict};
use tiny_checks::cli::{self, Args};
use tiny_checks::logging;

const EXIT_CHECK_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match execute(&args) {
        Ok(report) => {
            print_report(&report, args.quiet);
            if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_CHECK_FAILED)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn execute(args: &Args) -> anyhow::Result<Report> {
    let plan = cli::build_plan(args)?;
    Ok(app::run(&plan)?)
}

fn print_report(report: &Report, quiet: bool) {
    for verdict in &report.verdicts {
        match verdict {
            Verdict::Passed { name, value } => {
                if !quiet {
                    println!("ok   {name} = {value}");
                }
            }
            Verdict::Failed { value, reason, .. } => {
                eprintln!("FAIL {reason} (got {value})");
            }
        }
    }
}
