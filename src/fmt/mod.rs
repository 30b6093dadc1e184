//! Formatting pieces: the per-kind palette, timestamps and the plain line encoding.

mod color;
pub mod line;
mod style;

pub use color::Color;
pub use line::{TIMESTAMP_FORMAT, log_file_name, plain, timestamp};
pub use style::Style;
