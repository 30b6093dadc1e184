//! Thresholds and event kinds that decide whether a call reaches any sink.

mod kind;

pub use kind::{EventKind, Gate, ParseKindError};

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a kind's required tier can be compared against the configured threshold.
///
/// Ascending strictness: `All` shows everything, `Low` keeps only FATAL and ERROR.
/// The naming is inverted relative to severity — the most severe kinds require the
/// loosest-named tier — and is kept as-is for compatibility with existing configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Threshold {
    /// Every ordinal-gated kind passes.
    #[default]
    All = 0,
    /// Drops INFORMATION.
    High = 1,
    /// Drops INFORMATION and SUCCESS.
    Medium = 2,
    /// Only FATAL and ERROR pass.
    Low = 3,
}

impl Threshold {
    /// Lowercase because config files and CLI args use lowercase threshold strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::All, Self::High, Self::Medium, Self::Low]
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown threshold" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThresholdError(String);

impl fmt::Display for ParseThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown threshold: '{}'", self.0)
    }
}

impl std::error::Error for ParseThresholdError {}

impl FromStr for Threshold {
    type Err = ParseThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "high" => Ok(Self::High),
            "medium" | "med" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseThresholdError(s.to_string())),
        }
    }
}
