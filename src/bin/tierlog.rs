//! `tierlog` binary — one-shot logging, a demo of the gating table, and a record viewer.
//!
//! Usage:
//!   tierlog [options] log <kind> <message...>   Log a message
//!   tierlog [options] demo                      Run every kind through two loggers
//!   tierlog [options] records [-n N]            Print stored records

use clap::Parser;
use std::process::ExitCode;
use tierlog::cli::{Cli, Command, build_logger, cmd_demo, cmd_log, cmd_records, load_config};
use tierlog::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives paths, threshold and colors — must load before any logger is created
    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match &cli.command {
        Command::Log { kind, message } => {
            let logger = build_logger(&config, &cli, &cli.identity);
            cmd_log((*kind).into(), message, &logger)
        }
        Command::Demo => cmd_demo(&config, &cli),
        Command::Records { last } => cmd_records(&config, *last),
    }
}
