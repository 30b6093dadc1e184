//! Reads the record store back — the console scrolls away, the table doesn't.

use crate::config::Config;
use crate::internal;
use crate::output::SqliteStore;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_records(config: &Config, last: Option<usize>) -> ExitCode {
    let path = shellexpand::tilde(&config.store.path).into_owned();
    // Opening would create an empty database; a viewer must not do that
    if !Path::new(&path).is_file() {
        internal::error(&format!("Record store not found: {path}"));
        return ExitCode::FAILURE;
    }

    let rows = match SqliteStore::open(&path).and_then(|store| store.rows()) {
        Ok(rows) => rows,
        Err(e) => {
            internal::error(&format!("Cannot read record store {path}: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let skip = last.map_or(0, |n| rows.len().saturating_sub(n));
    let mut out = io::stdout().lock();
    for row in rows.iter().skip(skip) {
        let line = crate::fmt::plain(&row.logger, &row.timestamp, &row.header, &row.message);
        if writeln!(out, "{:>6}  {line}", row.id).is_err() {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
