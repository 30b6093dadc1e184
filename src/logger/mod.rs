//! Dispatch engine: gate the call, build the header once, then fan out to the console
//! and whichever of the file and record sinks are enabled.
//!
//! A failing file or record sink never reaches the caller. The failure is reported as a
//! single FATAL event that reaches the console only, and the next call retries the sink.

mod builder;
mod from_config;

pub use builder::{DEFAULT_FILE_PATH, LoggerBuilder};

use crate::debug_mode::DebugMode;
use crate::fmt;
use crate::level::{EventKind, Threshold};
use crate::output::{Appender, Console, LogRecord, RecordStore, SqliteStore};
use chrono::Local;
use std::cell::Cell;
use std::panic::Location;
use std::path::PathBuf;

/// Single-owner logger. `Send` so it can be moved to a worker thread, but not `Sync`:
/// configuration changes take `&mut self` and the reporting guard is a plain cell.
pub struct Logger {
    identity: String,
    threshold: Threshold,
    file_enabled: bool,
    record_enabled: bool,
    file_path: String,
    store_path: PathBuf,
    /// Captured once at construction; names the log file for the logger's whole lifetime.
    session_stamp: String,
    console: Box<dyn Console>,
    appender: Box<dyn Appender>,
    store: Option<Box<dyn RecordStore>>,
    debug_mode: Box<dyn DebugMode>,
    /// Set while a sink failure is being reported; the report then reaches the console only.
    reporting: Cell<bool>,
}

impl Logger {
    /// Console-only unless the toggles say otherwise. Enabling the record sink here
    /// opens `logs/logs.db` and creates its schema immediately.
    #[must_use]
    pub fn new(identity: impl Into<String>, file_sink: bool, record_sink: bool) -> Self {
        Self::builder(identity)
            .file_sink(file_sink)
            .record_sink(record_sink)
            .build()
    }

    /// Every collaborator (console, appender, store, debug switch) can be swapped before building.
    #[must_use]
    pub fn builder(identity: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(identity)
    }

    pub const fn set_threshold(&mut self, threshold: Threshold) {
        self.threshold = threshold;
    }

    /// Pure toggle — the file is not touched until the next write.
    pub const fn set_file_sink_enabled(&mut self, enabled: bool) {
        self.file_enabled = enabled;
    }

    /// Enabling (re-)runs the idempotent schema step, opening the store first if needed.
    /// Disabling keeps the handle open.
    pub fn set_record_sink_enabled(&mut self, enabled: bool) {
        self.record_enabled = enabled;
        if enabled {
            self.init_store();
        }
    }

    /// Replaces the destination directory for later writes. Not validated or created here.
    pub fn set_file_path(&mut self, path: impl Into<String>) {
        self.file_path = path.into();
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub const fn file_sink_enabled(&self) -> bool {
        self.file_enabled
    }

    #[must_use]
    pub const fn record_sink_enabled(&self) -> bool {
        self.record_enabled
    }

    /// `true` once a record store handle is held, whether or not the sink is enabled.
    #[must_use]
    pub fn has_record_store(&self) -> bool {
        self.store.is_some()
    }

    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    #[must_use]
    pub fn session_stamp(&self) -> &str {
        &self.session_stamp
    }

    /// Full path of the file this logger appends to, with `~` expanded.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.file_dir().join(fmt::log_file_name(&self.session_stamp))
    }

    pub fn fatal(&self, message: &str) {
        self.dispatch(EventKind::Fatal, message, None);
    }

    pub fn error(&self, message: &str) {
        self.dispatch(EventKind::Error, message, None);
    }

    pub fn warning(&self, message: &str) {
        self.dispatch(EventKind::Warning, message, None);
    }

    pub fn success(&self, message: &str) {
        self.dispatch(EventKind::Success, message, None);
    }

    pub fn information(&self, message: &str) {
        self.dispatch(EventKind::Information, message, None);
    }

    pub fn debug(&self, message: &str) {
        self.dispatch(EventKind::Debug, message, None);
    }

    /// The header records the file and line of whoever called `trace`.
    #[track_caller]
    pub fn trace(&self, message: &str) {
        self.dispatch(EventKind::Trace, message, Some(Location::caller()));
    }

    /// For wrappers that capture the call site themselves.
    pub fn trace_at(&self, location: &Location<'_>, message: &str) {
        self.dispatch(EventKind::Trace, message, Some(location));
    }

    /// Dispatch by value. A `Trace` records the caller of `log`.
    #[track_caller]
    pub fn log(&self, kind: EventKind, message: &str) {
        let location = if kind == EventKind::Trace {
            Some(Location::caller())
        } else {
            None
        };
        self.dispatch(kind, message, location);
    }

    /// Whether a call of this kind would currently reach the sinks.
    #[must_use]
    pub fn admits(&self, kind: EventKind) -> bool {
        kind.gate().admits(self.threshold, || self.debug_mode.enabled())
    }

    fn dispatch(&self, kind: EventKind, message: &str, location: Option<&Location<'_>>) {
        if !self.admits(kind) {
            return;
        }

        let header = kind.header(location);
        let timestamp = fmt::timestamp(Local::now());
        let record = LogRecord {
            identity: &self.identity,
            kind,
            timestamp: &timestamp,
            header: &header,
            message,
        };

        self.console.print(&record);

        if self.reporting.get() {
            return;
        }

        if self.file_enabled {
            self.write_file(&record);
        }

        if self.record_enabled {
            self.write_store(&record);
        }
    }

    fn file_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file_path).as_ref())
    }

    fn write_file(&self, record: &LogRecord<'_>) {
        let dir = self.file_dir();
        if !dir.is_dir() {
            self.report_suppressed(&format!(
                "File path for logger is not valid: {}",
                self.file_path
            ));
            return;
        }

        let path = dir.join(fmt::log_file_name(&self.session_stamp));
        if let Err(e) = self.appender.append(&path, &record.plain_line()) {
            self.report_suppressed(&format!("Failed to write log file {}: {e}", path.display()));
        }
    }

    fn write_store(&self, record: &LogRecord<'_>) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.insert(record) {
            self.report_suppressed(&format!("Failed to write log record: {e}"));
        }
    }

    fn init_store(&mut self) {
        if self.store.is_none() {
            let raw = self.store_path.to_string_lossy();
            let path = PathBuf::from(shellexpand::tilde(&raw).as_ref());
            match SqliteStore::open(&path) {
                Ok(store) => self.store = Some(Box::new(store)),
                Err(e) => {
                    self.report_suppressed(&format!(
                        "Failed to open record store {}: {e}",
                        path.display()
                    ));
                    return;
                }
            }
        }

        if let Some(store) = &self.store
            && let Err(e) = store.init_schema()
        {
            self.report_suppressed(&format!("Failed to initialize record store: {e}"));
        }
    }

    /// Raise the guard, report through the normal FATAL path, then restore it.
    /// With the guard up the FATAL skips the file and record sinks, so a second broken
    /// sink cannot turn one failure into a cascade of reports.
    fn report_suppressed(&self, message: &str) {
        let prior = self.reporting.replace(true);
        self.fatal(message);
        self.reporting.set(prior);
    }
}
