//! Walks every event kind through two loggers so the gating table is visible at a glance.

use crate::cli::{Cli, build_logger};
use crate::config::Config;
use crate::level::Threshold;
use crate::logger::Logger;
use std::process::ExitCode;

fn all_kinds(logger: &Logger) {
    logger.fatal("Testing Fatal Message Logging to Console");
    logger.error("Testing Error Message Logging to Console");
    logger.warning("Testing Warning Message Logging to Console");
    logger.success("Testing Success Message Logging to Console 6");
    logger.information("Testing Information Message Logging to Console");
    logger.debug("Testing Debug Message Logging to Console");
    logger.trace("Testing Trace Message Logging to Console");
}

fn enable_sinks(logger: &mut Logger) {
    logger.set_file_sink_enabled(true);
    logger.set_record_sink_enabled(true);
}

/// First logger at the default threshold then at `low`, second logger fresh.
/// Both get the file and record sinks switched on through the runtime setters.
#[must_use]
pub fn cmd_demo(config: &Config, cli: &Cli) -> ExitCode {
    let mut first = build_logger(config, cli, "MyLogger");
    enable_sinks(&mut first);
    all_kinds(&first);

    first.set_threshold(Threshold::Low);
    all_kinds(&first);

    let mut second = build_logger(config, cli, "Logger Two");
    enable_sinks(&mut second);
    all_kinds(&second);

    ExitCode::SUCCESS
}
