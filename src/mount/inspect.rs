use std::fs;
use std::path::Path;

use crate::error::{MediavaultError, Result};

fn read_mounts() -> Result<String> {
    fs::read_to_string("/proc/self/mounts")
        .map_err(|e| MediavaultError::message(format!("read /proc/self/mounts: {}", e)))
}

/// True when `mountpoint` is the target of an active mount, not merely an
/// existing directory.
pub fn mountpoint_is_mounted(mountpoint: &Path) -> Result<bool> {
    let contents = read_mounts()?;
    Ok(contents_list_mountpoint(&contents, mountpoint))
}

fn contents_list_mountpoint(contents: &str, mountpoint: &Path) -> bool {
    for line in contents.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            continue;
        }
        if Path::new(fields[1]) == mountpoint {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNTS: &str = "\
/dev/nvme0n1p2 / ext4 rw,relatime 0 0
/dev/sda1 /run/media/backup/external ext4 rw,nosuid,nodev 0 0
tmpfs /run tmpfs rw,nosuid,nodev,mode=755 0 0
broken-line
";

    #[test]
    fn finds_active_mountpoint() {
        assert!(contents_list_mountpoint(
            MOUNTS,
            Path::new("/run/media/backup/external")
        ));
        assert!(contents_list_mountpoint(MOUNTS, Path::new("/")));
    }

    #[test]
    fn existing_directory_is_not_a_mount() {
        assert!(!contents_list_mountpoint(
            MOUNTS,
            Path::new("/run/media/backup")
        ));
        assert!(!contents_list_mountpoint(MOUNTS, Path::new("/home")));
    }
}
