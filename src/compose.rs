use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Result;
use crate::types::RunMode;
use crate::util::command::run_checked;

/// Handle on the docker-compose project whose volumes get backed up.
#[derive(Debug, Clone)]
pub struct ComposeApp {
    dir: PathBuf,
    run_mode: RunMode,
}

impl ComposeApp {
    pub fn new(dir: &Path, run_mode: RunMode) -> Self {
        Self {
            dir: dir.to_path_buf(),
            run_mode,
        }
    }

    pub fn stop(&self) -> Result<()> {
        println!("\nStopping containers...");
        self.compose("stop")
    }

    pub fn start(&self) -> Result<()> {
        println!("\nStarting containers...");
        self.compose("start")
    }

    fn compose(&self, action: &str) -> Result<()> {
        let mut cmd = Command::new("docker");
        cmd.arg("compose").arg(action).current_dir(&self.dir);
        run_checked(&mut cmd, self.run_mode)
    }

    /// Stop the containers and return a guard that restarts them when it goes
    /// out of scope. The application must never stay stopped because a backup
    /// step failed.
    pub fn stop_guarded(&self) -> Result<RestartGuard<'_>> {
        self.stop()?;
        Ok(RestartGuard {
            app: self,
            armed: true,
        })
    }
}

pub struct RestartGuard<'a> {
    app: &'a ComposeApp,
    armed: bool,
}

impl RestartGuard<'_> {
    /// Restart explicitly on the success path, so a failed restart is
    /// reported as an error rather than swallowed by `Drop`.
    pub fn restart(mut self) -> Result<()> {
        self.armed = false;
        self.app.start()
    }
}

impl Drop for RestartGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(err) = self.app.start() {
                println!("container restart failed: {}", err);
            }
        }
    }
}
