//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;
use crate::error_handling::InitializationError;
use crate::fetch::redirect_policy;

/// Initializes an HTTP client suitable for ads.txt resolution.
///
/// Creates a `reqwest::Client` configured with:
/// - the ads.txt redirect policy (at most one external hop, 10-hop cutoff)
/// - the given end-to-end timeout
/// - the crate's default User-Agent header
///
/// # Arguments
///
/// * `timeout` - Deadline for the whole request/response exchange
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(timeout: Duration) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(redirect_policy())
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
