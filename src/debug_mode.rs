//! DEBUG and TRACE ignore the threshold and follow a process-wide switch instead.
//! The switch is a trait so tests can drive it without touching the real environment.

use std::env;

/// Read on every DEBUG/TRACE call, never cached — flipping the source takes effect immediately.
pub trait DebugMode: Send {
    fn enabled(&self) -> bool;
}

impl<F> DebugMode for F
where
    F: Fn() -> bool + Send,
{
    fn enabled(&self) -> bool {
        self()
    }
}

/// Debug mode is on while the named environment variable equals `"1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDebugMode {
    var: String,
}

impl Default for EnvDebugMode {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl EnvDebugMode {
    pub const DEFAULT_VAR: &'static str = "DEBUG";

    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl DebugMode for EnvDebugMode {
    fn enabled(&self) -> bool {
        env::var(&self.var).is_ok_and(|v| v == "1")
    }
}
