use thiserror::Error;

/// Client-side operation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Request never produced a response (connection refused, CORS, DNS, ...)
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Client initialization failed: {message}")]
    InitializationFailed { message: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
