//! ads.txt resolution over HTTPS.
//!
//! This module fetches `https://<host>/ads.txt` through an injected HTTP
//! capability ([`HttpDoer`]) and hands the body to the parser. Transport
//! configuration (TLS, timeouts, pooling) and the redirect-following loop
//! belong to the capability; this module only supplies the redirect decision
//! function (see [`evaluate_redirect`]) and interprets the final outcome.

mod redirects;

// Re-export public API
pub use redirects::{evaluate_redirect, redirect_policy, RedirectDecision};

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, Request, Response, StatusCode, Url};

use crate::config::ADS_TXT_PATH;
use crate::error_handling::{MultipleExternalRedirects, ResolveError};
use crate::model::AdsTxt;
use crate::parse::parse;

/// Capability that executes one HTTP request and yields the response.
///
/// Implemented for [`reqwest::Client`]; tests supply mocks to exercise the
/// resolver without a live network. Implementations are expected to perform
/// their own redirect handling, consulting [`redirect_policy`] (or
/// [`evaluate_redirect`]) per hop.
#[async_trait]
pub trait HttpDoer: Send + Sync {
    /// Executes the request and returns the final response or a transport
    /// error.
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl HttpDoer for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        reqwest::Client::execute(self, request).await
    }
}

/// Requests and parses ads.txt from the provided host.
///
/// Builds a GET for `https://<host>/ads.txt`, executes it via `doer`, and
/// parses the body on success. A `404` means the host publishes no ads.txt
/// and yields an empty [`AdsTxt`], not an error. The response body is
/// released on every exit path.
///
/// # Errors
///
/// - [`ResolveError::InvalidHost`] when `host` cannot form a request URL
/// - [`ResolveError::RequestFailed`] on transport faults
/// - [`ResolveError::RedirectPolicy`] when the redirect chain attempted a
///   second external hop
/// - [`ResolveError::UnexpectedStatus`] on non-2xx, non-404 statuses
/// - [`ResolveError::Parse`] when the body is not well-formed ads.txt
pub async fn resolve<D: HttpDoer + ?Sized>(doer: &D, host: &str) -> Result<AdsTxt, ResolveError> {
    let target = format!("https://{}{}", host, ADS_TXT_PATH);
    let url = Url::parse(&target).map_err(|source| ResolveError::InvalidHost {
        host: host.to_string(),
        source,
    })?;

    let response = doer
        .execute(Request::new(Method::GET, url))
        .await
        .map_err(normalize_transport_error)?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(AdsTxt::default());
    }
    if !response.status().is_success() {
        return Err(ResolveError::UnexpectedStatus(response.status()));
    }

    let body = response.text().await.map_err(normalize_transport_error)?;
    Ok(parse(body.as_bytes())?)
}

/// Collapses a transport error to [`ResolveError::RequestFailed`], except a
/// redirect-policy rejection, which is recovered from the error's source
/// chain and surfaced distinctly.
fn normalize_transport_error(err: reqwest::Error) -> ResolveError {
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        if cause.downcast_ref::<MultipleExternalRedirects>().is_some() {
            return ResolveError::from(MultipleExternalRedirects);
        }
        source = cause.source();
    }
    debug!("ads.txt request failed: {err}");
    ResolveError::RequestFailed
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
