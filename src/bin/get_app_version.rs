#![forbid(unsafe_code)]
//! Prints the version of the app for use in container builds.

use clap::Parser;
use colored::*;
use std::process::ExitCode;
use theblockchainkiller::cli::{init_logging, run_get_app_version, GetAppVersionArgs};
use theblockchainkiller::config::ProcessEnvironment;

fn main() -> ExitCode {
    let _args = GetAppVersionArgs::parse();
    init_logging("warn");

    let stdout = std::io::stdout();
    match run_get_app_version(&ProcessEnvironment, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
