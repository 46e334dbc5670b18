//! REPL configuration, loaded from TOML.
//!
//! ```toml
//! storage_dir = "/home/amy/.local/share/deskterm/storage"
//! ephemeral = false
//! color = true
//! show_desktop = true
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use deskterm_kernel::paths;

/// Configuration for a REPL session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Directory the file store is persisted under.
    pub storage_dir: PathBuf,
    /// Keep files in memory only; nothing is read or written on disk.
    pub ephemeral: bool,
    /// Color error and success lines.
    pub color: bool,
    /// Print the desktop icon row whenever it changes.
    pub show_desktop: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            storage_dir: paths::storage_dir(),
            ephemeral: false,
            color: true,
            show_desktop: true,
        }
    }
}

impl ReplConfig {
    /// An in-memory config with plain output, for tests and scripting.
    pub fn ephemeral() -> Self {
        Self {
            ephemeral: true,
            color: false,
            ..Self::default()
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing deskterm config")
    }

    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load a config file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
