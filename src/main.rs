//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `adstxt` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use adstxt::config::Opt;
use adstxt::initialization::{init_client, init_logger};
use adstxt::resolve;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger(opt.log_level.clone().into()).context("Failed to initialize logger")?;

    let client = init_client(Duration::from_secs(opt.timeout_seconds))
        .context("Failed to build HTTP client")?;

    match resolve(&client, &opt.host).await {
        Ok(ads_txt) => {
            println!("{}", ads_txt);
            Ok(())
        }
        Err(e) => {
            eprintln!("adstxt error: {}", e);
            process::exit(1);
        }
    }
}
