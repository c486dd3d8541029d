use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::error::{MediavaultError, Result};

#[derive(Debug, Clone, Copy)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Filesystem usage of the volume holding `path`, via `statvfs(3)`.
/// `free` is the space available to unprivileged users.
pub fn disk_usage(path: &Path) -> Result<DiskUsage> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| MediavaultError::message(format!("path contains NUL: {}", path.display())))?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(MediavaultError::message(format!(
            "statvfs {}: {}",
            path.display(),
            io::Error::last_os_error()
        )));
    }
    let frsize = stat.f_frsize as u64;
    let total = stat.f_blocks as u64 * frsize;
    let free = stat.f_bavail as u64 * frsize;
    let used = total - stat.f_bfree as u64 * frsize;
    Ok(DiskUsage { total, used, free })
}
