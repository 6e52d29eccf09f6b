//! Holiday API error types.

/// Errors that can occur when fetching public holidays.
///
/// These never reach the calendar's callers; the calendar logs them and
/// carries on with an empty holiday list.
#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    /// HTTP request failed (network error, client timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The source did not answer within the configured bound
    #[error("holiday lookup timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Local holiday data could not be loaded
    #[error("holiday data error: {message}")]
    Data { message: String },
}
