//! Configuration for the CLI binary and shared constants.

mod constants;
mod types;

pub use constants::{ADS_TXT_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS};
pub use types::{LogLevel, Opt};
