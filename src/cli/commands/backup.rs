use std::path::Path;

use crate::backup::{cleanup_partial_backup, maybe_prune_oldest, run_backup, today_dest};
use crate::compose::ComposeApp;
use crate::config::load::load_config;
use crate::error::Result;
use crate::inventory::{dir_size, gigabytes, list_backups, print_disk_stats, print_inventory};
use crate::mount::inspect::mountpoint_is_mounted;
use crate::prompt::{confirm, DefaultAnswer};
use crate::types::RunMode;

pub fn run_backup_command(
    config_path: &Path,
    allow_missing_config: bool,
    run_mode: RunMode,
) -> Result<()> {
    let cfg = load_config(config_path, allow_missing_config)?;
    if run_mode.verbose {
        println!("loaded config {}", config_path.display());
        println!("  mount point: {}", cfg.mount_point.display());
        println!("  backup root: {}", cfg.backup_root.display());
        println!("  compose dir: {}", cfg.compose_dir.display());
        println!("  volumes: {}", cfg.volumes.join(", "));
        println!("  max backups: {}", cfg.max_backups);
    }

    // Preflight: abort before touching containers or source volumes.
    if cfg.require_root && !euid_is_root() {
        println!("Error: this program must be run as root (sudo).");
        println!("The docker volumes are owned by root.");
        std::process::exit(1);
    }
    if !mountpoint_is_mounted(&cfg.mount_point)? {
        println!("Error: {} is not mounted.", cfg.mount_point.display());
        std::process::exit(1);
    }

    print_disk_stats(&cfg.mount_point)?;
    let entries = list_backups(&cfg.backup_root)?;
    print_inventory(&entries);

    maybe_prune_oldest(&cfg.backup_root, cfg.max_backups, run_mode)?;

    let dest = today_dest(&cfg.backup_root);
    let dest_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if dest.exists() {
        println!("\nBackup for today ({}) already exists.", dest_name);
        if !confirm("Overwrite?", DefaultAnswer::No, run_mode)? {
            println!("Backup cancelled.");
            return Ok(());
        }
    }

    if !confirm("\nProceed with backup?", DefaultAnswer::Yes, run_mode)? {
        println!("Backup cancelled.");
        return Ok(());
    }

    let app = ComposeApp::new(&cfg.compose_dir, run_mode);
    let guard = app.stop_guarded()?;
    match run_backup(&cfg, &dest, run_mode) {
        Ok(()) => guard.restart()?,
        Err(err) => {
            if let Err(cleanup_err) = cleanup_partial_backup(&dest, run_mode) {
                println!("cleanup failed: {}", cleanup_err);
            }
            // The guard restarts the containers as it drops.
            return Err(err);
        }
    }

    println!(
        "\nBackup complete: {} ({:.2} GB)",
        dest_name,
        gigabytes(dir_size(&dest))
    );
    print_disk_stats(&cfg.mount_point)?;

    Ok(())
}

fn euid_is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
