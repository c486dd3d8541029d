use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::args::Cli;
use crate::cli::commands::{backup, exit_for_error};
use crate::error::MediavaultError;
use crate::types::RunMode;

pub mod args;
pub mod commands;

const CONFIG_FILE: &str = "/etc/mediavault.yaml";

pub fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    println!("=== Mediavault Backup ===");

    let run_mode = RunMode {
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
        verbose: cli.verbose,
    };
    // The built-in default path may be absent; an explicit --config must exist.
    let (config_path, allow_missing) = match cli.config {
        Some(path) => (path, false),
        None => (PathBuf::from(CONFIG_FILE), true),
    };

    match backup::run_backup_command(&config_path, allow_missing, run_mode) {
        Ok(()) => Ok(()),
        Err(err @ MediavaultError::Config(_)) => exit_for_error(&err),
        Err(err) => Err(err.into()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .try_init();
}
