//! Where linepad keeps its files
//!
//! Everything lives under one directory, resolved in this order:
//! `$LINEPAD_CONFIG_DIR`, then `$XDG_CONFIG_HOME/linepad`, then
//! `~/.config/linepad` (`%APPDATA%\linepad` on Windows).
//!
//! ```text
//! linepad/
//!   config.yaml
//!   themes/<id>.yaml
//!   logs/linepad.log.<date>
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "linepad";

/// Environment variable that replaces the whole directory lookup
pub const CONFIG_DIR_ENV: &str = "LINEPAD_CONFIG_DIR";

/// File name prefix handed to the rolling log appender
pub const LOG_FILE_PREFIX: &str = "linepad.log";

fn resolve(explicit: Option<PathBuf>, platform_base: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| platform_base.map(|base| base.join(APP_DIR)))
}

#[cfg(target_os = "windows")]
fn platform_base() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_base() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

/// Base directory, or `None` when no home can be found
pub fn config_dir() -> Option<PathBuf> {
    resolve(env::var_os(CONFIG_DIR_ENV).map(PathBuf::from), platform_base())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// A user theme file, if one with this id exists
pub fn user_theme_file(id: &str) -> Option<PathBuf> {
    themes_dir()
        .map(|dir| theme_file_in(&dir, id))
        .filter(|path| path.is_file())
}

fn theme_file_in(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.yaml", id))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory (and its parents), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
