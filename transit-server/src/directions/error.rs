//! Directions API error types.

/// Errors that can occur when fetching or converting directions.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("directions API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The API answered but offered no route between the points
    #[error("no route found between the requested points")]
    NoRoute,
}
