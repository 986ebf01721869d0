#![forbid(unsafe_code)]
//! Processes command line arguments and runs the miner.

use clap::Parser;
use colored::*;
use std::process::ExitCode;
use theblockchainkiller::cli::{init_logging, run_miner, run_miner_usage_hint, RunMinerArgs};
use theblockchainkiller::config::ProcessEnvironment;

fn main() -> ExitCode {
    let args = RunMinerArgs::parse();
    init_logging("info");

    match run_miner(&args, &ProcessEnvironment) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            if e.is_missing_key() {
                eprintln!("{}", run_miner_usage_hint().yellow());
            }
            ExitCode::FAILURE
        }
    }
}
