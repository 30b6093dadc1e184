//! `tierlog` - Leveled multi-sink logger.
//!
//! Each call names its event kind (`fatal`, `error`, `warning`, `success`,
//! `information`, `debug`, `trace`). The logger checks the kind against the
//! configured threshold (or the debug switch for `debug`/`trace`), then writes
//! one line to the console and, when enabled, to a per-session log file and a
//! `SQLite` record store. A failing file or store never propagates to the caller.
//!
//! # Example
//!
//! ```
//! use tierlog::{Logger, Threshold};
//!
//! let mut log = Logger::builder("MyLogger").colors(false).build();
//!
//! log.information("Application started");
//! log.set_threshold(Threshold::Low);
//! log.warning("filtered out");
//! log.error("still visible");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `tierlog` command-line binary

pub mod config;
pub mod debug_mode;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use debug_mode::{DebugMode, EnvDebugMode};
pub use error::Error;
pub use level::{EventKind, Gate, Threshold};
pub use logger::{Logger, LoggerBuilder};
pub use output::{
    Appender, Console, FileAppender, LogRecord, RecordStore, SqliteStore, StoredRow,
    TerminalConsole,
};
