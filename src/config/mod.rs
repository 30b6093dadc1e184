//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic stays independent of the
//! serde schema.

mod structs;

pub use structs::{DebugConfig, FileConfig, GeneralConfig, StoreConfig, TerminalConfig};

use crate::internal;
use crate::level::Threshold;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// A completely empty config file must still produce a working logger — `#[serde(default)]`
/// on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Threshold applies across all sinks.
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
    pub store: StoreConfig,
    pub debug: DebugConfig,
}

impl Config {
    /// Loads `<config dir>/tierlog/config.toml`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::information(&format!("Config loaded from {}", config_path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns error on TOML syntax or type mismatches.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no resolvable config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "tierlog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown names fall back to `All` so a typo never silences the logger.
    #[must_use]
    pub fn parse_threshold(&self) -> Threshold {
        self.general.threshold.parse().unwrap_or_else(|e| {
            internal::warning(&format!("{e}, falling back to 'all'"));
            Threshold::All
        })
    }
}
