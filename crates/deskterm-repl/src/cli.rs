//! Command-line flags. Flags win over the config file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use deskterm_kernel::paths;

use crate::config::ReplConfig;

#[derive(Debug, Parser)]
#[command(name = "deskterm", version, about = "A terminal over a persisted virtual file store")]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/deskterm/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to persist files under
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    /// Keep files in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the desktop icon row
    #[arg(long)]
    pub no_desktop: bool,
}

impl Cli {
    /// Resolve the effective configuration.
    pub fn into_config(self) -> Result<ReplConfig> {
        let mut config = match &self.config {
            Some(path) => ReplConfig::load(path)?,
            None => ReplConfig::load_or_default(&paths::config_file())?,
        };
        if let Some(dir) = self.storage_dir {
            config.storage_dir = dir;
        }
        if self.ephemeral {
            config.ephemeral = true;
        }
        if self.no_color {
            config.color = false;
        }
        if self.no_desktop {
            config.show_desktop = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "color = true\nshow_desktop = true\n").unwrap();

        let cli = Cli::parse_from([
            "deskterm",
            "--config",
            path.to_str().unwrap(),
            "--no-color",
            "--storage-dir",
            "/tmp/elsewhere",
        ]);
        let config = cli.into_config().unwrap();
        assert!(!config.color);
        assert!(config.show_desktop);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let cli = Cli::parse_from(["deskterm", "--config", "/definitely/not/here.toml"]);
        assert!(cli.into_config().is_err());
    }
}
