//! Configuration loading and management
//!
//! Handles parsing of `tick.toml` configuration files. The file lives in
//! the platform config directory, overridable via `--config` / `TICK_CONFIG`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// List command configuration
    #[serde(default)]
    pub list: ListConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the task snapshot (default: platform data dir)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// List-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// View shown when `tick list` is run without `--view`
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_view() -> String {
    "all".to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
        }
    }
}

impl Config {
    /// Load configuration from a `tick.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path, or from the platform
    /// config directory, or return defaults when no file exists.
    ///
    /// An explicit path that fails to load is an error; the implicit
    /// platform file falls back to defaults.
    pub fn load_default(explicit: Option<&Path>) -> crate::error::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = ProjectDirs::from("", "", "tick")
            .map(|dirs| dirs.config_dir().join("tick.toml"));
        match implicit {
            Some(path) if path.exists() => Ok(Self::load(&path).unwrap_or_default()),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        let view = self.list.default_view.trim();
        view.parse::<crate::task::TaskFilter>().map_err(|_| {
            crate::error::Error::InvalidConfig(format!(
                "list.default_view: invalid view '{view}' (expected all|active|completed)"
            ))
        })?;
        Ok(())
    }
}
