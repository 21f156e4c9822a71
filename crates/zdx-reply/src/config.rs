//! Configuration for reply formatting.
//!
//! Loads configuration from ${ZDX_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::button_tags::{ButtonTagOptions, MAX_CALLBACK_DATA_BYTES};

/// Inline button configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonsConfig {
    /// Maximum callback data size in bytes.
    pub max_callback_data_bytes: usize,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            max_callback_data_bytes: MAX_CALLBACK_DATA_BYTES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub buttons: ButtonsConfig,
}

pub mod paths {
    //! Path resolution for ZDX configuration.
    //!
    //! ZDX_HOME resolution order:
    //! 1. ZDX_HOME environment variable (if set)
    //! 2. ~/.config/zdx (default)

    use std::ffi::OsString;
    use std::path::PathBuf;

    use anyhow::{Context, Result};

    /// Returns the ZDX home directory.
    ///
    /// Checks ZDX_HOME env var first, falls back to ~/.config/zdx
    pub fn zdx_home() -> Result<PathBuf> {
        resolve_home(std::env::var_os("ZDX_HOME"), dirs::home_dir())
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(zdx_home()?.join("config.toml"))
    }

    pub(super) fn resolve_home(
        zdx_home: Option<OsString>,
        user_home: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(home) = zdx_home {
            return Ok(PathBuf::from(home));
        }

        user_home
            .map(|h| h.join(".config").join("zdx"))
            .context("Could not determine home directory (set ZDX_HOME)")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path()?)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Creates a config file with the default template.
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Parser limits derived from this config.
    pub fn button_tag_options(&self) -> ButtonTagOptions {
        ButtonTagOptions {
            max_data_bytes: self.buttons.max_callback_data_bytes,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.buttons.max_callback_data_bytes == 0 {
            bail!("buttons.max_callback_data_bytes must be at least 1");
        }
        Ok(())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}
