//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

use crate::constants::headers;

/// Headers a desktop browser would send; the game pages are served
/// differently to bare clients.
pub fn browser_headers() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(header::USER_AGENT, HeaderValue::from_static(headers::USER_AGENT));
    map.insert(header::ACCEPT, HeaderValue::from_static(headers::ACCEPT));
    map.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(headers::ACCEPT_LANGUAGE),
    );
    map.insert(
        header::ACCEPT_ENCODING,
        HeaderValue::from_static(headers::ACCEPT_ENCODING),
    );
    map.insert(header::CONNECTION, HeaderValue::from_static(headers::CONNECTION));
    map.insert(
        HeaderName::from_static("upgrade-insecure-requests"),
        HeaderValue::from_static(headers::UPGRADE_INSECURE_REQUESTS),
    );
    map
}

/// Creates the client used for the page fetch.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
///
/// # Features
/// * Browser-like default headers
/// * A single overall request timeout (default: 30 seconds, configurable via config/env)
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .default_headers(browser_headers())
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
