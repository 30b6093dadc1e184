//! Append-only text file sink.

use super::Appender;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Opens the file per call in append mode; the directory must already exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAppender;

impl FileAppender {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Appender for FileAppender {
    fn append(&self, path: &Path, line: &str) -> Result<(), crate::Error> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        // Single write with the newline so a line is never split across appends
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        file.write_all(content.as_bytes())?;

        Ok(())
    }
}
