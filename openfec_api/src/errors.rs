//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// OpenFEC rejected the API key (HTTP 403).
    #[error("Invalid API key (HTTP 403)")]
    InvalidApiKey,
    /// OpenFEC throttled the request (HTTP 429).
    #[error("Rate limited by OpenFEC API (HTTP 429)")]
    RateLimited,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON shape we expect.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// Transport failure (DNS, TLS, timeout, connection reset).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}
