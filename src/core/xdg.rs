//! XDG Base Directory support
//!
//! Resolves where keylink keeps its config file, its SQLite database,
//! and its search history log.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "keylink";

/// XDG directory layout for keylink
///
/// Resolution order for each directory (highest first):
/// 1. `KEYLINK_*_DIR` env var
/// 2. `XDG_*_HOME` env var joined with `keylink`
/// 3. XDG default under the home directory
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl XdgDirs {
    pub fn new() -> Self {
        Self {
            config_dir: resolve("KEYLINK_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve("KEYLINK_DATA_DIR", "XDG_DATA_HOME", &[".local", "share"]),
            state_dir: resolve("KEYLINK_STATE_DIR", "XDG_STATE_HOME", &[".local", "state"]),
        }
    }

    /// Config file path (`KEYLINK_CONFIG_FILE` overrides)
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("KEYLINK_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// SQLite database holding the resource table
    pub fn database_file(&self) -> PathBuf {
        self.data_dir.join("keylink.db")
    }

    /// Append-only search history log
    pub fn history_file(&self) -> PathBuf {
        self.state_dir.join("search_history.txt")
    }

    /// Create all directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.data_dir)?;
        fs::create_dir_all(&self.state_dir)?;
        Ok(())
    }

    /// Log the resolved paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Data: {:?}", self.data_dir);
        tracing::debug!("  State: {:?}", self.state_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(app_var: &str, xdg_var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(dir) = env::var(app_var) {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = env::var(xdg_var) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in home_default {
        path.push(part);
    }
    path.join(APP_DIR)
}
