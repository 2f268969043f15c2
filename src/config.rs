//! User configuration.
//!
//! Read from `config.toml` in the platform config directory
//! (e.g. `~/.config/calcpad/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::Mode;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keypad to start in.
    pub mode: Mode,
    /// Insert thousands separators into the main display.
    pub group_digits: bool,
    /// Show the history panel below the memory indicator.
    pub show_history: bool,
}

impl Config {
    /// Default location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `path` is `None`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            debug!("no config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mode, Mode::Simple);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "mode = \"scientific\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.mode, Mode::Scientific);
        assert!(!config.group_digits);
        assert!(!config.show_history);
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "mode = \"simple\"\ngroup_digits = true\nshow_history = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.group_digits);
        assert!(config.show_history);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "mode = \"graphing\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
