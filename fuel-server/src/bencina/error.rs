//! Bencina client error types.

/// Errors from the Bencina en Línea HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum BencinaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Station detail not found
    #[error("station {0} not found")]
    StationNotFound(String),

    /// Rate limited by the API
    #[error("rate limited by Bencina API")]
    RateLimited,
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
