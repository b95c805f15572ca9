// Redirect decision tests. Resolution itself is covered by the integration
// tests in tests/resolve.rs with mock doers.

use super::*;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn chain(hosts: &[&str]) -> Vec<Url> {
    hosts
        .iter()
        .map(|host| url(&format!("https://{}/ads.txt", host)))
        .collect()
}

#[test]
fn test_stop_following_after_ten_hops() {
    let via = chain(&["www.example.com"; 10]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://www.example.com/ads.txt")),
        RedirectDecision::Stop
    );
    // Domain boundaries are irrelevant once the cutoff is reached
    assert_eq!(
        evaluate_redirect(&via, &url("https://thirdparty.net/ads.txt")),
        RedirectDecision::Stop
    );
}

#[test]
fn test_internal_redirects_are_always_allowed() {
    let via = chain(&["foo.example.com", "bar.example.com"]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://baz.example.com/ads.txt")),
        RedirectDecision::Follow
    );
}

#[test]
fn test_one_external_redirect_is_allowed() {
    let via = chain(&["foo.example.com"]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://baz.thirdparty.net/ads.txt")),
        RedirectDecision::Follow
    );
}

#[test]
fn test_second_external_redirect_is_rejected() {
    let via = chain(&["foo.example.com", "baz.thirdparty.net"]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://foobar.thirdparty.net/ads.txt")),
        RedirectDecision::Abort(MultipleExternalRedirects)
    );
}

#[test]
fn test_internal_hop_then_one_external_is_allowed() {
    let via = chain(&["example.com", "www.example.com"]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://baz.thirdparty.com/ads.txt")),
        RedirectDecision::Follow
    );
}

#[test]
fn test_internal_hop_then_two_external_is_rejected() {
    let via = chain(&["example.com", "www.example.com", "foobar.thirdparty.net"]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://baz.thirdparty.net/ads.txt")),
        RedirectDecision::Abort(MultipleExternalRedirects)
    );
}

#[test]
fn test_external_hop_back_to_origin_root_is_internal() {
    // Returning to the original root domain after an external hop compares
    // equal to the origin and is allowed.
    let via = chain(&["example.com", "thirdparty.net"]);
    assert_eq!(
        evaluate_redirect(&via, &url("https://www.example.com/ads.txt")),
        RedirectDecision::Follow
    );
}
