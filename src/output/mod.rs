//! The logger reaches every sink through a narrow trait so the core never depends on
//! terminal, filesystem or database details — and tests can swap any of them out.

mod file;
mod store;
mod terminal;

pub use file::FileAppender;
pub use store::{SqliteStore, StoredRow};
pub use terminal::TerminalConsole;

use crate::level::EventKind;
use std::path::Path;

/// Everything a sink needs to render one event, borrowed for the duration of the fan-out.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub identity: &'a str,
    pub kind: EventKind,
    pub timestamp: &'a str,
    pub header: &'a str,
    pub message: &'a str,
}

impl LogRecord<'_> {
    /// Uncolored encoding used by the file sink and color-less consoles.
    #[must_use]
    pub fn plain_line(&self) -> String {
        crate::fmt::plain(self.identity, self.timestamp, self.header, self.message)
    }
}

/// Console writes are unconditional and assumed infallible, so there is no error to report.
pub trait Console: Send {
    fn print(&self, record: &LogRecord<'_>);
}

/// Append-to-file-by-path. Must create the file when absent, but never its directory.
pub trait Appender: Send {
    /// # Errors
    /// Any I/O failure opening or writing the file.
    fn append(&self, path: &Path, line: &str) -> Result<(), crate::Error>;
}

/// Row-oriented store. Each insert is its own committed unit — no batching, no flush step.
pub trait RecordStore: Send {
    /// Must be idempotent: running it on an initialized store is a no-op.
    ///
    /// # Errors
    /// Store-level failures creating the schema.
    fn init_schema(&self) -> Result<(), crate::Error>;

    /// # Errors
    /// Store-level failures inserting or committing the row.
    fn insert(&self, record: &LogRecord<'_>) -> Result<(), crate::Error>;
}
