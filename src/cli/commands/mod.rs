//! Each subcommand lives in its own file — keeps the match arm in main thin
//! and lets each handler own its argument validation and error reporting.

mod demo;
mod log;
mod records;

pub use demo::cmd_demo;
pub use log::cmd_log;
pub use records::cmd_records;
