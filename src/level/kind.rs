//! The closed set of event kinds and the single gate each one answers to.

use super::Threshold;
use crate::fmt::{Color, Style};
use std::fmt;
use std::panic::Location;
use std::str::FromStr;

/// Semantic classification of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Fatal,
    Error,
    Warning,
    Success,
    Information,
    Debug,
    /// Carries the caller's source location in its header.
    Trace,
}

/// How a kind is admitted — either an ordinal threshold check or the external debug switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Passes when the configured threshold is at most this tier.
    Threshold(Threshold),
    /// Ignores the threshold; passes only while debug mode is on.
    DebugMode,
}

impl Gate {
    /// `debug_mode` is only consulted for `Gate::DebugMode`, so callers pass a closure to keep the read lazy.
    pub fn admits(self, threshold: Threshold, debug_mode: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Threshold(required) => threshold <= required,
            Self::DebugMode => debug_mode(),
        }
    }
}

impl EventKind {
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Fatal,
            Self::Error,
            Self::Warning,
            Self::Success,
            Self::Information,
            Self::Debug,
            Self::Trace,
        ]
    }

    #[must_use]
    pub const fn gate(self) -> Gate {
        match self {
            Self::Fatal | Self::Error => Gate::Threshold(Threshold::Low),
            Self::Warning => Gate::Threshold(Threshold::Medium),
            Self::Success => Gate::Threshold(Threshold::High),
            Self::Information => Gate::Threshold(Threshold::All),
            Self::Debug | Self::Trace => Gate::DebugMode,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Information => "information",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Header text written in front of the message on every sink.
    ///
    /// Trace headers embed the call site; a trace without a location gets the bare `[TRACE]:` tag.
    #[must_use]
    pub fn header(self, location: Option<&Location<'_>>) -> String {
        match (self, location) {
            (Self::Fatal, _) => "[FATAL]:".to_string(),
            (Self::Error, _) => "[ERROR]:".to_string(),
            (Self::Warning, _) => "[WARNING]:".to_string(),
            (Self::Success, _) => "[SUCCESS]:".to_string(),
            (Self::Information, _) => "[INFORMATION]:".to_string(),
            (Self::Debug, _) => "[DEBUG]:".to_string(),
            (Self::Trace, Some(loc)) => format!(
                "[TRACE]: - File Path: {} - Line Number: {} -",
                loc.file(),
                loc.line()
            ),
            (Self::Trace, None) => "[TRACE]:".to_string(),
        }
    }

    /// Console styling per kind; purely cosmetic, but every kind gets its own look.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Fatal => Style::bold(Color::red()),
            Self::Error => Style::bold(Color::pink()),
            Self::Warning => Style::bold(Color::yellow()),
            Self::Success => Style::bold(Color::green()),
            Self::Information => Style::bold(Color::blue()),
            Self::Debug => Style::dim(),
            Self::Trace => Style::bold(Color::grey()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event kind: '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for EventKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "success" | "ok" => Ok(Self::Success),
            "information" | "info" => Ok(Self::Information),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}
