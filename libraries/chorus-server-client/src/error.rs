//! Error types for the Chorus API client.

use thiserror::Error;

/// Errors that can occur when talking to the Chorus backend.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// No valid session; the user must log in
    #[error("Authentication required")]
    AuthRequired,

    /// Login rejected (bad credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<ApiClientError> for chorus_core::ChorusError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::AuthRequired | ApiClientError::AuthFailed(_) => {
                chorus_core::ChorusError::AuthRequired
            }
            other => chorus_core::ChorusError::Network(other.to_string()),
        }
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiClientError>;
