//! Configuration struct definitions.

use crate::debug_mode::EnvDebugMode;
use crate::logger::DEFAULT_FILE_PATH;
use crate::output::SqliteStore;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold name (all, high, medium, low).
    pub threshold: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threshold: "all".to_string(),
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable colors.
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable the file sink.
    pub enabled: bool,
    /// Directory holding the per-session log files.
    pub path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: DEFAULT_FILE_PATH.to_string(),
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Enable the record sink.
    pub enabled: bool,
    /// `SQLite` database file.
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: SqliteStore::DEFAULT_PATH.to_string(),
        }
    }
}

/// Debug-mode switch configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Environment variable that turns DEBUG/TRACE on when set to `1`.
    pub env_var: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            env_var: EnvDebugMode::DEFAULT_VAR.to_string(),
        }
    }
}
