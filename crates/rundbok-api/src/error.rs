//! API error types.

use thiserror::Error;

/// Convenience alias for API results.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced by the backend client.
///
/// An empty result set is not an error; list endpoints settle successfully
/// with empty data.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connect failure,
    /// timeout, rejected TLS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but its payload could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
