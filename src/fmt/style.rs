//! Display style attached to each event kind on the console.

use super::Color;

/// Foreground color plus weight. Either part may be absent (DEBUG is dim and uncolored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    #[must_use]
    pub const fn bold(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: true,
            dim: false,
        }
    }

    #[must_use]
    pub const fn dim() -> Self {
        Self {
            color: None,
            bold: false,
            dim: true,
        }
    }

    /// SGR prefix for this style; pair it with [`Color::RESET`].
    #[must_use]
    pub fn ansi(self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str("\x1b[1m");
        }
        if self.dim {
            out.push_str("\x1b[2m");
        }
        if let Some(color) = self.color {
            out.push_str(&color.fg_ansi());
        }
        out
    }
}
