//! Errors raised while fetching collections from the backend.

use thiserror::Error;

use crate::traits::HttpError;

/// Why a collection fetch did not produce data.
///
/// The recovering fetch operations never surface this to views; it is logged
/// and replaced by fallback data. Other [`DataSource`](crate::sync::DataSource)
/// implementations may return it to drive the hook error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The server answered with a non-2xx status.
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON shape.
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }

    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } => !matches!(source, HttpError::InvalidUrl(_)),
            FetchError::Status { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            FetchError::Decode { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { source, .. } => match source {
                HttpError::Timeout(_) => "E_FETCH_TIMEOUT",
                HttpError::ConnectionFailed(_) => "E_FETCH_CONN",
                HttpError::InvalidUrl(_) => "E_FETCH_URL",
                HttpError::Io(_) | HttpError::Other(_) => "E_FETCH_TRANSPORT",
            },
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode { .. } => "E_FETCH_DECODE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { .. } => {
                "Unable to reach the server. Showing sample data.".to_string()
            }
            FetchError::Status { status, .. } => match *status {
                404 => "The requested data was not found.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            FetchError::Decode { .. } => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }
}
