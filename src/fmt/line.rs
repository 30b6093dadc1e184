//! Plain-text encodings shared by the console and file sinks.

use chrono::{DateTime, Local};

/// strftime pattern for event timestamps and the session stamp: `YYYY-MM-DD--HH-MM-SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d--%H-%M-%S";

#[must_use]
pub fn timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Session stamp with dashes swapped for underscores, plus the `.log` extension.
#[must_use]
pub fn log_file_name(session_stamp: &str) -> String {
    format!("{}.log", session_stamp.replace('-', "_"))
}

/// `(<identity>) <timestamp> ~ <header> <message>` — the message is appended verbatim.
#[must_use]
pub fn plain(identity: &str, timestamp: &str, header: &str, message: &str) -> String {
    format!("({identity}) {timestamp} ~ {header} {message}")
}
