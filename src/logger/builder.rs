//! Stepwise construction so callers only name the collaborators they want to replace.

use super::Logger;
use crate::debug_mode::{DebugMode, EnvDebugMode};
use crate::fmt;
use crate::level::Threshold;
use crate::output::{Appender, Console, FileAppender, RecordStore, SqliteStore, TerminalConsole};
use chrono::Local;
use std::cell::Cell;
use std::path::PathBuf;

/// Default destination directory for log files, relative to the working directory.
pub const DEFAULT_FILE_PATH: &str = "logs/";

pub struct LoggerBuilder {
    identity: String,
    threshold: Threshold,
    file_enabled: bool,
    record_enabled: bool,
    file_path: String,
    store_path: PathBuf,
    console: Box<dyn Console>,
    appender: Box<dyn Appender>,
    store: Option<Box<dyn RecordStore>>,
    debug_mode: Box<dyn DebugMode>,
}

impl LoggerBuilder {
    /// Terminal console, filesystem appender, `DEBUG=1` switch, everything else off.
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            threshold: Threshold::All,
            file_enabled: false,
            record_enabled: false,
            file_path: DEFAULT_FILE_PATH.to_string(),
            store_path: PathBuf::from(SqliteStore::DEFAULT_PATH),
            console: Box::new(TerminalConsole::new()),
            appender: Box::new(FileAppender::new()),
            store: None,
            debug_mode: Box::new(EnvDebugMode::default()),
        }
    }

    #[must_use]
    pub const fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn file_sink(mut self, enabled: bool) -> Self {
        self.file_enabled = enabled;
        self
    }

    #[must_use]
    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Enabling here opens the store and creates its schema during `build`.
    #[must_use]
    pub const fn record_sink(mut self, enabled: bool) -> Self {
        self.record_enabled = enabled;
        self
    }

    /// Database file opened lazily when the record sink is first enabled.
    #[must_use]
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// A ready-made store; `store_path` is ignored once one is supplied.
    #[must_use]
    pub fn record_store(mut self, store: impl RecordStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    #[must_use]
    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    /// Shortcut for the default terminal console with colors switched on or off.
    #[must_use]
    pub fn colors(self, enabled: bool) -> Self {
        self.console(TerminalConsole::new().colors(enabled))
    }

    #[must_use]
    pub fn appender(mut self, appender: impl Appender + 'static) -> Self {
        self.appender = Box::new(appender);
        self
    }

    #[must_use]
    pub fn debug_mode(mut self, debug_mode: impl DebugMode + 'static) -> Self {
        self.debug_mode = Box::new(debug_mode);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut logger = Logger {
            identity: self.identity,
            threshold: self.threshold,
            file_enabled: self.file_enabled,
            record_enabled: false,
            file_path: self.file_path,
            store_path: self.store_path,
            session_stamp: fmt::timestamp(Local::now()),
            console: self.console,
            appender: self.appender,
            store: self.store,
            debug_mode: self.debug_mode,
            reporting: Cell::new(false),
        };

        if self.record_enabled {
            logger.set_record_sink_enabled(true);
        }

        logger
    }
}
