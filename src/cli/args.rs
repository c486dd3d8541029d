use std::path::PathBuf;

use clap::Parser;

const RESTORE_HELP: &str = "\
TO RESTORE FROM A BACKUP:
  1. Stop the application:
       cd <composeDir> && docker compose stop

  2. Copy the backup folders back (replace YYYY-MM-DD with your backup date):
       sudo rsync -a --delete <mountPoint>/<backupDir>/YYYY-MM-DD/library/ ./library/
       sudo rsync -a --delete <mountPoint>/<backupDir>/YYYY-MM-DD/postgres/ ./postgres/

  3. Start the application:
       docker compose start";

#[derive(Parser, Debug)]
#[command(name = "mediavault", version, after_help = RESTORE_HELP)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print destructive actions and subprocesses instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Answer every prompt affirmatively (unattended runs)
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
