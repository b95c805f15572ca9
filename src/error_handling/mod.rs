//! Error type definitions.
//!
//! This module defines the error taxonomies surfaced by the library:
//! - `ParseError`: structural faults in an ads.txt payload; any of these
//!   aborts the whole parse and discards partial results
//! - `ResolveError`: faults while fetching a host's ads.txt
//! - `MultipleExternalRedirects`: the redirect policy's rejection, kept as
//!   its own type so it can travel through reqwest's error source chain
//! - `InitializationError`: failures constructing the ambient pieces
//!   (logger, HTTP client)

use std::fmt;

use log::SetLoggerError;
use thiserror::Error;

/// The record field a percent-decode failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    /// First record field: the advertising system domain.
    AdSystemDomain,
    /// Second record field: the seller account identifier.
    SellerAccountId,
    /// Optional fourth record field: the certification authority identifier.
    CertAuthorityId,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::AdSystemDomain => write!(f, "ad system domain"),
            RecordField::SellerAccountId => write!(f, "seller account ID"),
            RecordField::CertAuthorityId => write!(f, "certification authority ID"),
        }
    }
}

/// Error types for parsing an ads.txt payload.
///
/// All variants abort the parse of the payload they occur in; the parser
/// never returns truncated partial results alongside an error.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A record line's third field was neither `DIRECT` nor `RESELLER`.
    #[error("relationship type {0:?} is neither DIRECT nor RESELLER")]
    UnrecognizedRelationship(String),

    /// A record line's ad system domain decoded to the empty string.
    #[error("ad system domain is required")]
    MissingAdSystemDomain,

    /// A record line's seller account ID decoded to the empty string.
    #[error("seller account ID is required")]
    MissingSellerAccountId,

    /// A record field carried a malformed percent-escape, or decoded to
    /// bytes that were not valid UTF-8.
    #[error("invalid percent-encoding in {field} {value:?}")]
    PercentDecode {
        /// Which record field failed to decode.
        field: RecordField,
        /// The raw, still-encoded field text.
        value: String,
    },

    /// The input stream faulted mid-read.
    #[error("failed to read ads.txt input: {0}")]
    Read(#[from] std::io::Error),
}

/// Rejection raised by the redirect policy when a chain attempts a second hop
/// outside the original root domain.
///
/// Section 3.1 of the ads.txt specification allows at most one redirect to a
/// destination outside the original root domain. The resolver recognizes this
/// type inside reqwest's error source chain and surfaces it distinctly
/// instead of the generic request failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("at most one redirect to a destination outside the original root domain is allowed")]
pub struct MultipleExternalRedirects;

/// Error types for resolving a host's ads.txt.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The host could not be formed into a valid `https://<host>/ads.txt` URL.
    #[error("invalid ads.txt request target for host {host:?}")]
    InvalidHost {
        /// The host the caller asked to resolve.
        host: String,
        /// The underlying URL parse failure.
        source: url::ParseError,
    },

    /// The request failed at the transport level (connection, timeout, TLS).
    /// Underlying detail is logged at debug level, not propagated.
    #[error("ads.txt request was not successful")]
    RequestFailed,

    /// The redirect chain attempted more than one external hop.
    #[error(transparent)]
    RedirectPolicy(#[from] MultipleExternalRedirects),

    /// The server answered with a non-2xx, non-404 status.
    #[error("unexpected HTTP status {0} fetching ads.txt")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The response body was not a well-formed ads.txt payload.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}
