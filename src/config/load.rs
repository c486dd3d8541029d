use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::model::{Config, RuntimeConfig};
use crate::error::{ConfigError, Result};
use crate::util::paths::is_safe_name;

/// Load and validate a config file. A missing file is only acceptable when
/// `allow_missing` is set (the built-in default path); an explicitly
/// requested path must exist.
pub fn load_config(path: &Path, allow_missing: bool) -> Result<RuntimeConfig> {
    let cfg = if path.exists() {
        let mut contents = String::new();
        File::open(path)?.read_to_string(&mut contents)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
    } else if allow_missing {
        Config::default()
    } else {
        return Err(ConfigError::Invalid(format!("config file not found: {}", path.display())).into());
    };
    validate(cfg)
}

fn validate(cfg: Config) -> Result<RuntimeConfig> {
    let mount_point = PathBuf::from(cfg.mount_point.trim());
    if !mount_point.is_absolute() {
        return Err(ConfigError::Invalid("mountPoint must be an absolute path".to_string()).into());
    }
    let compose_dir = PathBuf::from(cfg.compose_dir.trim());
    if !compose_dir.is_absolute() {
        return Err(ConfigError::Invalid("composeDir must be an absolute path".to_string()).into());
    }
    if !is_safe_name(cfg.backup_dir.trim()) {
        return Err(ConfigError::Invalid(format!(
            "backupDir {} must use only letters, digits, '.', '-', '_'",
            cfg.backup_dir
        ))
        .into());
    }
    if cfg.volumes.is_empty() {
        return Err(ConfigError::Invalid("volumes must not be empty".to_string()).into());
    }
    let mut names = HashSet::new();
    for volume in &cfg.volumes {
        if !is_safe_name(volume) {
            return Err(ConfigError::Invalid(format!(
                "volume {} must use only letters, digits, '.', '-', '_'",
                volume
            ))
            .into());
        }
        if !names.insert(volume.clone()) {
            return Err(ConfigError::Invalid(format!("duplicate volume {}", volume)).into());
        }
    }
    if cfg.max_backups == 0 {
        return Err(ConfigError::Invalid("maxBackups must be at least 1".to_string()).into());
    }

    let backup_root = mount_point.join(cfg.backup_dir.trim());
    Ok(RuntimeConfig {
        mount_point,
        backup_root,
        compose_dir,
        volumes: cfg.volumes,
        max_backups: cfg.max_backups,
        require_root: cfg.require_root,
    })
}
