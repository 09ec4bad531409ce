//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use anyhow::{anyhow, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

const APP_DIR: &str = "apk_relocate";

/// Config file location: `$APK_RELOCATE_CONFIG` when set (a directory means
/// `<dir>/config.xml`), else `<config dir>/apk_relocate/config.xml`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(p);
        if p.is_dir() {
            return Ok(p.join("config.xml"));
        }
        return Ok(p);
    }
    let base = config_dir()
        .or_else(|| env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| anyhow!("cannot determine a config directory (no HOME)"))?;
    Ok(base.join(APP_DIR).join("config.xml"))
}

/// Suggested log file location: next to an explicit config file, else the OS data dir.
pub fn default_log_path() -> Result<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        let cfg = default_config_path()?;
        if let Some(parent) = cfg.parent() {
            return Ok(parent.join("apk_relocate.log"));
        }
    }
    let base = data_dir()
        .or_else(|| {
            env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share"))
        })
        .ok_or_else(|| anyhow!("cannot determine a data directory (no HOME)"))?;
    Ok(base.join(APP_DIR).join("apk_relocate.log"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if let Ok(meta) = fs::symlink_metadata(anc) {
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
