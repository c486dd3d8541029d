use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_mount_point", rename = "mountPoint")]
    pub mount_point: String,
    #[serde(default = "default_backup_dir", rename = "backupDir")]
    pub backup_dir: String,
    #[serde(default = "default_compose_dir", rename = "composeDir")]
    pub compose_dir: String,
    #[serde(default = "default_volumes")]
    pub volumes: Vec<String>,
    #[serde(default = "default_max_backups", rename = "maxBackups")]
    pub max_backups: usize,
    #[serde(default = "default_require_root", rename = "requireRoot")]
    pub require_root: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            backup_dir: default_backup_dir(),
            compose_dir: default_compose_dir(),
            volumes: default_volumes(),
            max_backups: default_max_backups(),
            require_root: default_require_root(),
        }
    }
}

/// Validated form of [`Config`] with paths resolved.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub mount_point: PathBuf,
    /// Backup root; lives under `mount_point`.
    pub backup_root: PathBuf,
    pub compose_dir: PathBuf,
    pub volumes: Vec<String>,
    pub max_backups: usize,
    pub require_root: bool,
}

fn default_mount_point() -> String {
    "/run/media/backup/external".to_string()
}

fn default_backup_dir() -> String {
    "backups".to_string()
}

fn default_compose_dir() -> String {
    "/srv/media".to_string()
}

fn default_volumes() -> Vec<String> {
    vec!["library".to_string(), "postgres".to_string()]
}

fn default_max_backups() -> usize {
    7
}

fn default_require_root() -> bool {
    true
}
