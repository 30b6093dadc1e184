//! tierlog's own diagnostic logger — bootstrapped early so config problems and store
//! setup can be reported through the same formatting pipeline users see.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, tests) race to call `init`. Console only: the internal
//! logger never opens a file or store, so it cannot re-enter itself.

use crate::config::Config;
use crate::logger::{Logger, LoggerBuilder};
use std::sync::{Mutex, OnceLock};

const IDENTITY: &str = "tierlog";

static INTERNAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Fallback initializer that loads config itself — used when no caller provides one.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        Mutex::new(build_internal_logger(&config))
    });
    if !was_init {
        debug("Internal logger ready");
    }
}

/// Preferred initializer — reuses the already-loaded config to avoid double I/O.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Mutex::new(build_internal_logger(config)));
    if !was_init {
        debug(&format!("Threshold: {}", config.general.threshold));
        if config.file.enabled {
            debug(&format!("File sink: path={}", config.file.path));
        }
        if config.store.enabled {
            debug(&format!("Record sink: path={}", config.store.path));
        }
        debug("Internal logger ready");
    }
}

fn build_internal_logger(config: &Config) -> Logger {
    Logger::configure(LoggerBuilder::new(IDENTITY), config)
        .file_sink(false)
        .record_sink(false)
        .build()
}

/// Pre-init calls silently vanish rather than crashing — safe during early startup.
fn with_logger(f: impl FnOnce(&Logger)) {
    if let Some(logger) = INTERNAL_LOGGER.get()
        && let Ok(logger) = logger.lock()
    {
        f(&logger);
    }
}

/// Visible only while debug mode is on.
pub fn debug(msg: &str) {
    with_logger(|l| l.debug(msg));
}

pub fn information(msg: &str) {
    with_logger(|l| l.information(msg));
}

pub fn warning(msg: &str) {
    with_logger(|l| l.warning(msg));
}

pub fn error(msg: &str) {
    with_logger(|l| l.error(msg));
}
