//! Single GET of a game page.

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and returns the body as text.
///
/// One attempt only. Non-success statuses, timeouts and connection
/// failures are mapped onto the specific `AppError` variants; a body that
/// is blank after trimming counts as a failed fetch. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(transport_error(url, e));
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::http_not_found(url),
            400..=499 => AppError::http_client_error(status_code, reason, url),
            _ => AppError::http_server_error(status_code, reason, url),
        });
    }

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read response body from URL {}: {}", url, e);
            return Err(transport_error(url, e));
        }
    };

    let body = String::from_utf8_lossy(&bytes).into_owned();
    if body.trim().is_empty() {
        error!("Empty response body from URL: {url}");
        return Err(AppError::empty_response(url));
    }

    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(512).collect();
    debug!("Response text (first 512 chars): {preview}");

    Ok(body)
}

fn transport_error(url: &str, e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::Fetch(e)
    }
}
