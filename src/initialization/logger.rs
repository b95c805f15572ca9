//! Logger initialization.

use log::LevelFilter;

use crate::error_handling::InitializationError;

/// Initializes the logger with the specified minimum level.
///
/// Reads `RUST_LOG` from the environment first, then overrides the global
/// filter with the provided level so explicit CLI control wins. Chatty
/// dependencies are pinned to info and above.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger was already
/// installed.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.try_init()?;
    Ok(())
}
