use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::backup::rsync::mirror_volume;
use crate::config::model::RuntimeConfig;
use crate::error::Result;
use crate::inventory::{list_backups, BackupEntry};
use crate::prompt::{confirm, DefaultAnswer};
use crate::types::RunMode;

pub mod rsync;

/// Destination directory for a run started today.
pub fn today_dest(backup_root: &Path) -> PathBuf {
    backup_root.join(Local::now().format("%Y-%m-%d").to_string())
}

/// The entry to prune when retention is exceeded: the first in sorted order,
/// i.e. the oldest given the date-stamped naming.
pub fn retention_overflow<'a>(
    entries: &'a [BackupEntry],
    max_backups: usize,
) -> Option<&'a BackupEntry> {
    if entries.len() > max_backups {
        entries.first()
    } else {
        None
    }
}

/// Prompt once to delete the oldest backup when more than `max_backups`
/// exist. Declining is not an error; the run continues.
pub fn maybe_prune_oldest(root: &Path, max_backups: usize, run_mode: RunMode) -> Result<()> {
    let entries = list_backups(root)?;
    let Some(oldest) = retention_overflow(&entries, max_backups) else {
        return Ok(());
    };
    println!(
        "\nYou have {} backups (max {}).",
        entries.len(),
        max_backups
    );
    let question = format!("Delete oldest backup '{}'?", oldest.name);
    if !confirm(&question, DefaultAnswer::No, run_mode)? {
        return Ok(());
    }
    println!("Deleting {}...", oldest.name);
    if run_mode.dry_run {
        println!("dry-run: rm -rf {}", oldest.path.display());
    } else {
        fs::remove_dir_all(&oldest.path)?;
        println!("Deleted.");
    }
    Ok(())
}

/// Mirror each configured volume into a like-named subdirectory of `dest`.
/// The caller is responsible for having stopped the application first.
pub fn run_backup(cfg: &RuntimeConfig, dest: &Path, run_mode: RunMode) -> Result<()> {
    if run_mode.dry_run {
        println!("dry-run: mkdir -p {}", dest.display());
    } else {
        fs::create_dir_all(dest)?;
    }

    println!("\nBacking up to: {}", dest.display());
    for volume in &cfg.volumes {
        let source = cfg.compose_dir.join(volume);
        if !source.exists() {
            println!("  Skipping {} (not found)", volume);
            continue;
        }
        println!("  Syncing {}...", volume);
        tracing::debug!(volume = %volume, dest = %dest.display(), "mirroring volume");
        mirror_volume(&source, &dest.join(volume), run_mode)?;
    }
    Ok(())
}

/// Remove a destination a failed run left behind, so a half-written backup
/// never counts against retention.
pub fn cleanup_partial_backup(dest: &Path, run_mode: RunMode) -> Result<()> {
    if !dest.exists() {
        return Ok(());
    }
    println!("\nBackup failed, cleaning up {}...", dest.display());
    if run_mode.dry_run {
        println!("dry-run: rm -rf {}", dest.display());
    } else {
        fs::remove_dir_all(dest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn entry(name: &str) -> BackupEntry {
        BackupEntry {
            name: name.to_string(),
            path: PathBuf::from("/tmp").join(name),
        }
    }

    #[test]
    fn overflow_picks_lexicographically_smallest() {
        let entries = vec![entry("2025-01-01"), entry("2025-01-02"), entry("2025-01-03")];
        assert!(retention_overflow(&entries, 3).is_none());
        let oldest = retention_overflow(&entries, 2).expect("overflow");
        assert_eq!(oldest.name, "2025-01-01");
    }

    #[test]
    fn today_dest_is_date_stamped() {
        let dest = today_dest(Path::new("/mnt/backups"));
        let name = dest.file_name().expect("name").to_string_lossy().to_string();
        assert_eq!(name.len(), 10);
        assert_eq!(&name[4..5], "-");
        assert_eq!(&name[7..8], "-");
        assert!(dest.starts_with("/mnt/backups"));
    }

    #[test]
    fn prune_removes_exactly_the_oldest() {
        let root = tempdir().expect("tempdir");
        for name in ["2025-01-01", "2025-01-02", "2025-01-03"] {
            fs::create_dir(root.path().join(name)).expect("mkdir");
        }
        let run_mode = RunMode {
            assume_yes: true,
            ..RunMode::default()
        };
        maybe_prune_oldest(root.path(), 2, run_mode).expect("prune");
        assert!(!root.path().join("2025-01-01").exists());
        assert!(root.path().join("2025-01-02").exists());
        assert!(root.path().join("2025-01-03").exists());
    }

    #[test]
    fn prune_within_retention_is_a_no_op() {
        let root = tempdir().expect("tempdir");
        fs::create_dir(root.path().join("2025-01-01")).expect("mkdir");
        let run_mode = RunMode {
            assume_yes: true,
            ..RunMode::default()
        };
        maybe_prune_oldest(root.path(), 7, run_mode).expect("prune");
        assert!(root.path().join("2025-01-01").exists());
    }

    #[test]
    fn cleanup_removes_partial_destination() {
        let root = tempdir().expect("tempdir");
        let dest = root.path().join("2025-08-23");
        fs::create_dir(&dest).expect("mkdir");
        File::create(dest.join("partial")).expect("file");
        cleanup_partial_backup(&dest, RunMode::default()).expect("cleanup");
        assert!(!dest.exists());
    }

    #[test]
    fn cleanup_tolerates_missing_destination() {
        let root = tempdir().expect("tempdir");
        let dest = root.path().join("never-created");
        cleanup_partial_backup(&dest, RunMode::default()).expect("cleanup");
    }

    #[test]
    fn dry_run_prune_keeps_the_directory() {
        let root = tempdir().expect("tempdir");
        for name in ["2025-01-01", "2025-01-02"] {
            fs::create_dir(root.path().join(name)).expect("mkdir");
        }
        let run_mode = RunMode {
            dry_run: true,
            assume_yes: true,
            ..RunMode::default()
        };
        maybe_prune_oldest(root.path(), 1, run_mode).expect("prune");
        assert!(root.path().join("2025-01-01").exists());
    }
}
