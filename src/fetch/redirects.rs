//! HTTP redirect policy for ads.txt resolution.
//!
//! Section 3.1 of the ads.txt specification (v1.0.3) allows at most one
//! redirect to a destination outside the original root domain. This module
//! implements that rule as a pure decision function over the redirect chain,
//! plus a `reqwest` policy adapter that installs it on a client.

use reqwest::redirect::{Attempt, Policy};
use reqwest::Url;

use crate::config::MAX_REDIRECT_HOPS;
use crate::domain::extract_root_domain;
use crate::error_handling::MultipleExternalRedirects;

/// Outcome of evaluating one candidate redirect hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Follow the candidate request.
    Follow,
    /// Stop following and use the last received response.
    Stop,
    /// Abort the exchange: a second external hop was attempted.
    Abort(MultipleExternalRedirects),
}

/// Decides whether a candidate redirect may be followed.
///
/// Pure function of the chain history: `via` holds every request issued so
/// far, oldest first, and `next` is the candidate target. A chain of
/// [`MAX_REDIRECT_HOPS`] or more prior hops stops (bounded-hop cutoff, not an
/// error). A hop staying within the original request's root domain is always
/// allowed; a hop leaving it is allowed only if every prior hop stayed
/// inside, which is checked against the most recent prior hop.
pub fn evaluate_redirect(via: &[Url], next: &Url) -> RedirectDecision {
    if via.len() >= MAX_REDIRECT_HOPS {
        return RedirectDecision::Stop;
    }
    let origin = match via.first() {
        Some(url) => url,
        None => return RedirectDecision::Follow,
    };
    let origin_root = extract_root_domain(origin.host_str().unwrap_or_default());
    let next_root = extract_root_domain(next.host_str().unwrap_or_default());
    if origin_root == next_root {
        return RedirectDecision::Follow;
    }
    if via.len() > 1 {
        let prior = &via[via.len() - 1];
        let prior_root = extract_root_domain(prior.host_str().unwrap_or_default());
        if prior_root != origin_root {
            // The chain already left the original root domain once.
            return RedirectDecision::Abort(MultipleExternalRedirects);
        }
    }
    RedirectDecision::Follow
}

/// Builds a `reqwest` redirect policy enforcing [`evaluate_redirect`].
///
/// Install with [`reqwest::ClientBuilder::redirect`];
/// [`crate::initialization::init_client`] does so by default. An aborted hop
/// surfaces [`MultipleExternalRedirects`] inside the request error's source
/// chain, where the resolver picks it back out.
pub fn redirect_policy() -> Policy {
    Policy::custom(|attempt: Attempt| {
        match evaluate_redirect(attempt.previous(), attempt.url()) {
            RedirectDecision::Follow => attempt.follow(),
            RedirectDecision::Stop => attempt.stop(),
            RedirectDecision::Abort(err) => attempt.error(err),
        }
    })
}
