//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_TIMEOUT_SECS;

/// Logging level for the binary.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options for the `adstxt` binary.
#[derive(Debug, Parser)]
#[command(name = "adstxt", about = "Fetch and parse a host's ads.txt file")]
pub struct Opt {
    /// Host to resolve ads.txt from (e.g. "example.com")
    pub host: String,

    /// Timeout in seconds for the whole request/response exchange
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Minimum log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
