use std::path::Path;
use std::process::Command;

use crate::error::Result;
use crate::types::RunMode;
use crate::util::command::run_checked;

/// Mirror flags: the destination becomes an exact reflection of the source,
/// including deletion of files no longer present.
pub fn rsync_args(source: &Path, dest: &Path) -> Vec<String> {
    vec![
        "-a".to_string(),
        "--delete".to_string(),
        "--info=progress2".to_string(),
        format!("{}/", source.display()),
        format!("{}/", dest.display()),
    ]
}

pub fn mirror_volume(source: &Path, dest: &Path, run_mode: RunMode) -> Result<()> {
    let mut cmd = Command::new("rsync");
    cmd.args(rsync_args(source, dest));
    run_checked(&mut cmd, run_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_carry_mirror_semantics_and_trailing_slashes() {
        let args = rsync_args(Path::new("/srv/media/library"), Path::new("/mnt/b/2025-08-23/library"));
        assert_eq!(
            args,
            vec![
                "-a",
                "--delete",
                "--info=progress2",
                "/srv/media/library/",
                "/mnt/b/2025-08-23/library/",
            ]
        );
    }
}
