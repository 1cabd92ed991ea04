//! Errors reported by the pack service client.

use thiserror::Error;

/// Errors that can occur while talking to the pack service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the service.
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The service answered with a non-success status.
    #[error("Pack service error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Invalid response from pack service: {0}")]
    Decode(String),

    /// "Create pack" succeeded but returned no usable id.
    #[error("Pack service returned an empty pack id")]
    MissingPackId,
}

impl ServiceError {
    /// Short machine-readable error kind for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::Client(_) => "client_error",
            ServiceError::Connection { .. } => "connection_error",
            ServiceError::Timeout { .. } => "request_timeout",
            ServiceError::Status { .. } => "status_error",
            ServiceError::Decode(_) => "decode_error",
            ServiceError::MissingPackId => "missing_pack_id",
        }
    }
}
