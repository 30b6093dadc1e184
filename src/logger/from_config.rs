//! Logger construction from a loaded `Config`.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::debug_mode::EnvDebugMode;
use crate::internal;

impl Logger {
    /// Loads the default config file and builds a logger from it.
    #[must_use]
    pub fn from_default_config(identity: &str) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warning(&format!("Config unreadable, using defaults: {e}"));
            Config::default()
        });
        Self::from_config(identity, &config)
    }

    /// Applies threshold, colors, sink toggles, paths and the debug variable from `config`.
    #[must_use]
    pub fn from_config(identity: &str, config: &Config) -> Self {
        internal::debug(&format!("Initializing logger for identity={identity}"));
        Self::configure(LoggerBuilder::new(identity), config).build()
    }

    /// Shared with the internal logger, which layers its own overrides on top.
    pub(crate) fn configure(builder: LoggerBuilder, config: &Config) -> LoggerBuilder {
        builder
            .threshold(config.parse_threshold())
            .colors(config.terminal.colors)
            .file_sink(config.file.enabled)
            .file_path(&config.file.path)
            .record_sink(config.store.enabled)
            .store_path(&config.store.path)
            .debug_mode(EnvDebugMode::new(&config.debug.env_var))
    }
}
