//! CLI module for tierlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use crate::level::{EventKind, Threshold};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Threshold for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThresholdArg {
    All,
    High,
    Medium,
    Low,
}

impl From<ThresholdArg> for Threshold {
    fn from(arg: ThresholdArg) -> Self {
        match arg {
            ThresholdArg::All => Self::All,
            ThresholdArg::High => Self::High,
            ThresholdArg::Medium => Self::Medium,
            ThresholdArg::Low => Self::Low,
        }
    }
}

/// Event kind for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    Fatal,
    Error,
    Warning,
    Success,
    Information,
    Debug,
    Trace,
}

impl From<KindArg> for EventKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Fatal => Self::Fatal,
            KindArg::Error => Self::Error,
            KindArg::Warning => Self::Warning,
            KindArg::Success => Self::Success,
            KindArg::Information => Self::Information,
            KindArg::Debug => Self::Debug,
            KindArg::Trace => Self::Trace,
        }
    }
}

/// tierlog - Leveled logging from the command line.
#[derive(Parser)]
#[command(
    name = "tierlog",
    version,
    about = "Leveled logging to console, file and SQLite from the command line"
)]
pub struct Cli {
    /// Logger identity shown in front of every line
    #[arg(short, long, default_value = "tierlog")]
    pub identity: String,
    /// Override the configured threshold
    #[arg(short, long, value_enum)]
    pub threshold: Option<ThresholdArg>,
    /// Enable the file sink
    #[arg(long)]
    pub file: bool,
    /// Enable the record store sink
    #[arg(long)]
    pub store: bool,
    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub path: Option<String>,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Config file to load instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log one message.
    Log {
        /// Event kind
        #[arg(value_enum)]
        kind: KindArg,
        /// Log message
        message: Vec<String>,
    },
    /// Run every kind through two loggers, before and after tightening the threshold.
    Demo,
    /// Print rows from the record store.
    Records {
        /// Only show the last N rows
        #[arg(short = 'n', long)]
        last: Option<usize>,
    },
}

pub use commands::{cmd_demo, cmd_log, cmd_records};
pub use util::{build_logger, load_config};
