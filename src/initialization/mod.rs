//! Initialization of ambient resources.
//!
//! This module constructs the pieces the resolver's surroundings need: an
//! HTTP client wired with the ads.txt redirect policy, and the logger for the
//! CLI binary.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger;
