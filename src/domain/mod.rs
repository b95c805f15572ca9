//! Root-domain extraction.
//!
//! This module determines the registrable (root) domain of a hostname using
//! the Public Suffix List, compiled into the binary via the `psl` crate. The
//! redirect policy compares root domains to decide whether a hop crosses an
//! organizational boundary.

/// Extracts the root domain of a hostname: the public suffix plus exactly one
/// label to its left.
///
/// When no label precedes the suffix (e.g. the host *is* a public suffix),
/// the suffix itself is returned; when the PSL has no answer at all (IP
/// literals, single nonsense labels), the normalized host is returned
/// unchanged. The function is total and has no side effects.
///
/// # Examples
///
/// ```
/// use adstxt::extract_root_domain;
///
/// assert_eq!(extract_root_domain("bar.foo.com"), "foo.com");
/// assert_eq!(extract_root_domain("bar.foo.co.uk"), "foo.co.uk");
/// ```
pub fn extract_root_domain(host: &str) -> String {
    // PSL lookups expect a lowercase name without a trailing root dot.
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    match psl::domain_str(&host) {
        Some(domain) => domain.to_string(),
        None => psl::suffix_str(&host).unwrap_or(&host).to_string(),
    }
}
