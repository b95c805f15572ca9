//! Shared constants.

/// Request path where the ads.txt specification roots the file.
pub const ADS_TXT_PATH: &str = "/ads.txt";

/// Prior hops after which redirect following stops and the last received
/// response is used.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent header for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("adstxt/", env!("CARGO_PKG_VERSION"));

/// Default end-to-end request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
