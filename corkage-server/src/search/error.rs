//! Place search error types.

/// Errors from a place search provider.
#[derive(Debug, thiserror::Error)]
pub enum PlaceSearchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing REST API key
    #[error("unauthorized: check KAKAO_REST_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Feature not configured or not available
    #[error("not configured: {0}")]
    NotConfigured(String),
}

/// Errors from a map search session.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A newer search started before this one finished
    #[error("search superseded by a newer one")]
    Superseded,

    #[error(transparent)]
    Provider(#[from] PlaceSearchError),
}
