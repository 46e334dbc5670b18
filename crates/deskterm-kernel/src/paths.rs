//! XDG Base Directory paths for deskterm state.
//!
//! | Purpose | XDG Variable | Default | deskterm Path |
//! |---------|--------------|---------|---------------|
//! | File store | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/deskterm/storage/` |
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/deskterm/config.toml` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the data directory for persistent state.
///
/// Uses `$XDG_DATA_HOME/deskterm` or falls back to `~/.local/share/deskterm`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("deskterm")
}

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/deskterm` or falls back to `~/.config/deskterm`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join("deskterm")
}

/// Directory holding one file per storage key.
pub fn storage_dir() -> PathBuf {
    data_dir().join("storage")
}

/// Default location of the config file.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
