use thiserror::Error;

/// Errors that can occur while fetching the current mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// The request never produced a response (connection refused, DNS, CORS, ...).
    #[error("Failed to reach the mode endpoint: {message}")]
    Transport {
        /// Error message from the HTTP layer
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("Mode endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body was not a valid mode payload.
    #[error("Failed to decode mode response: {error}")]
    Decode {
        /// Error message from the deserializer
        error: String,
    },

    /// The configured endpoint could not be turned into a request URL.
    #[error("Invalid mode endpoint '{endpoint}': {error}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Why it could not be resolved
        error: String,
    },
}

impl From<reqwest::Error> for ModeError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ModeError::Status { status: status.as_u16() }
        } else if err.is_decode() {
            ModeError::Decode { error: err.to_string() }
        } else {
            ModeError::Transport { message: err.to_string() }
        }
    }
}
