//! The most common CLI operation — shell scripts emit a single line without writing Rust.

use crate::internal;
use crate::level::EventKind;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(kind: EventKind, message: &[String], logger: &Logger) -> ExitCode {
    if message.is_empty() {
        internal::warning("Usage: tierlog log <kind> <message>");
        return ExitCode::FAILURE;
    }
    logger.log(kind, &message.join(" "));
    ExitCode::SUCCESS
}
