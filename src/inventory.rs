use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::mount::usage::disk_usage;

const BAR_WIDTH: usize = 40;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Directories under the backup root, sorted ascending by name. With the
/// `YYYY-MM-DD` naming that sort is chronological. A missing root means no
/// backups yet, not an error.
pub fn list_backups(root: &Path) -> Result<Vec<BackupEntry>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        entries.push(BackupEntry {
            name,
            path: entry.path(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Recursive size in bytes; symlinks are counted as themselves, not followed.
pub fn dir_size(path: &Path) -> u64 {
    let mut total = 0;
    for entry in WalkDir::new(path).follow_links(false) {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_file() {
            if let Ok(meta) = entry.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

pub fn gigabytes(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

pub fn render_usage_bar(used: u64, total: u64, width: usize) -> String {
    if total == 0 {
        return format!("[{}]", "?".repeat(width));
    }
    let ratio = used as f64 / total as f64;
    let filled = (width as f64 * ratio) as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.1}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        ratio * 100.0
    )
}

pub fn print_disk_stats(mount_point: &Path) -> Result<()> {
    let usage = disk_usage(mount_point)?;
    println!("\nDisk: {}", mount_point.display());
    println!("  {}", render_usage_bar(usage.used, usage.total, BAR_WIDTH));
    println!(
        "  Used: {:.1} GB / {:.1} GB ({:.1} GB free)",
        gigabytes(usage.used),
        gigabytes(usage.total),
        gigabytes(usage.free)
    );
    Ok(())
}

pub fn print_inventory(entries: &[BackupEntry]) {
    if entries.is_empty() {
        println!("\nNo existing backups found.");
        return;
    }
    println!("\nExisting backups ({}):", entries.len());
    for entry in entries {
        println!(
            "  {}  ({:.2} GB)",
            entry.name,
            gigabytes(dir_size(&entry.path))
        );
    }
}
