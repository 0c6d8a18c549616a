//! Error types for the HTTP surface.

use std::error::Error;
use std::fmt;

use crate::error::StoreError;

/// Error type for request handling.
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed validation or could not be decoded.
    Invalid(String),
    /// No record with the requested id.
    NotFound(String),
    /// The store failed to read or persist.
    Store(StoreError),
    /// A blocking store call panicked or was cancelled.
    Task(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Invalid(msg) => write!(f, "{}", msg),
            ApiError::NotFound(id) => write!(f, "animal not found: {}", id),
            ApiError::Store(e) => write!(f, "internal persistence error: {}", e),
            ApiError::Task(msg) => write!(f, "store task failed: {}", msg),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Invalid(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Store(_) | ApiError::Task(_) => 500,
        }
    }
}

#[cfg(feature = "http")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            // Not-found carries no body.
            ApiError::NotFound(_) => status.into_response(),
            ApiError::Store(_) | ApiError::Task(_) => {
                tracing::error!(error = %self, "request failed in store");
                (status, self.to_string()).into_response()
            }
            ApiError::Invalid(_) => (status, self.to_string()).into_response(),
        }
    }
}
