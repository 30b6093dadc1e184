//! Utility functions for the CLI.

use super::Cli;
use crate::config::Config;
use crate::logger::{Logger, LoggerBuilder};

/// Loads `--config` when given, the default location otherwise.
///
/// # Errors
/// Propagates read and parse failures.
pub fn load_config(cli: &Cli) -> Result<Config, crate::Error> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Builds a logger from config, then applies command-line overrides on top.
#[must_use]
pub fn build_logger(config: &Config, cli: &Cli, identity: &str) -> Logger {
    let mut builder = Logger::configure(LoggerBuilder::new(identity), config);

    if let Some(threshold) = cli.threshold {
        builder = builder.threshold(threshold.into());
    }
    if let Some(path) = &cli.path {
        builder = builder.file_path(path);
    }
    if cli.file {
        builder = builder.file_sink(true);
    }
    if cli.store {
        builder = builder.record_sink(true);
    }
    if cli.no_color {
        builder = builder.colors(false);
    }

    builder.build()
}
