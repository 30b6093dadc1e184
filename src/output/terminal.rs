//! Terminal is the always-on sink — users expect immediate colored feedback on stdout.

use super::{Console, LogRecord};
use crate::fmt::Color;
use std::io::{self, Write};

/// Writes one line per event to stdout, identity in cyan and the rest in the kind's style.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConsole {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Rendering hot path for every console line.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord<'_>) -> String {
        if !self.colors_enabled {
            return record.plain_line();
        }

        let ident = Color::cyan().fg_ansi();
        let style = record.kind.style().ansi();
        let reset = Color::RESET;
        format!(
            "{ident}({}) {reset}{style}{} ~ {} {}{reset}",
            record.identity, record.timestamp, record.header, record.message
        )
    }
}

impl Console for TerminalConsole {
    fn print(&self, record: &LogRecord<'_>) {
        let line = self.format_record(record);
        // A closed stdout must not take the caller down with it.
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}
