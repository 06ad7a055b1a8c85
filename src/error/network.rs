//! Network-related error types.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure talking to the trivia provider.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NetworkError {
    /// Transport failure before a response arrived.
    #[error("{0}")]
    Http(HttpError),

    /// Non-2xx HTTP status.
    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Body was not the JSON shape the endpoint promises.
    #[error("Invalid response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

impl NetworkError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::Http(HttpError::ConnectionFailed(_)) => {
                "Unable to connect to the trivia server. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Http(HttpError::Timeout(_)) => {
                "The trivia server took too long to respond.".to_string()
            }
            NetworkError::Http(err) => err.to_string(),
            NetworkError::Status { status, .. } => match *status {
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The trivia server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The trivia server returned an error (HTTP {}).", status),
            },
            NetworkError::Parse { .. } => {
                "The trivia server sent a response that could not be read.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::Http(_) => "NET_HTTP",
            NetworkError::Status { .. } => "NET_STATUS",
            NetworkError::Parse { .. } => "NET_PARSE",
        }
    }
}

impl From<HttpError> for NetworkError {
    fn from(err: HttpError) -> Self {
        NetworkError::Http(err)
    }
}
