use std::process::Command;

use crate::error::{MediavaultError, Result};
use crate::types::RunMode;

pub fn maybe_print_command(cmd: &Command, run_mode: RunMode) {
    if !run_mode.dry_run && !run_mode.verbose {
        return;
    }
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    println!("{} {}", program, args.join(" "));
}

pub fn run_command(cmd: &mut Command, run_mode: RunMode) -> Result<i32> {
    maybe_print_command(cmd, run_mode);
    tracing::debug!(
        program = %cmd.get_program().to_string_lossy(),
        "spawning subprocess"
    );
    if run_mode.dry_run {
        return Ok(0);
    }
    let status = cmd.status().map_err(|e| {
        MediavaultError::message(format!("{}: {}", cmd.get_program().to_string_lossy(), e))
    })?;
    Ok(status.code().unwrap_or(1))
}

/// Like `run_command` but a nonzero exit code is an error.
pub fn run_checked(cmd: &mut Command, run_mode: RunMode) -> Result<()> {
    let rc = run_command(cmd, run_mode)?;
    if rc != 0 {
        return Err(MediavaultError::message(format!(
            "{} failed with exit code {}",
            cmd.get_program().to_string_lossy(),
            rc
        )));
    }
    Ok(())
}
