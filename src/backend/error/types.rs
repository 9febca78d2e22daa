/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses.
 *
 * # Error Categories
 *
 * - Domain errors (`SocialError`) from the relationship engine
 * - Directory errors from the persistence layer
 * - Handler errors (bad requests caught at the HTTP boundary)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::directory::DirectoryError;
use crate::shared::SocialError;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Domain error from the relationship engine
    #[error(transparent)]
    Social(#[from] SocialError),

    /// Error from the user directory (persistence layer)
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Handler error (e.g., invalid request at the HTTP boundary)
    #[error("Handler error: {message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Social::InvalidOperation` / `Social::Validation` - 400 Bad Request
    /// - `Social::NotFound` - 404 Not Found
    /// - `Directory` - 500 Internal Server Error
    /// - `Handler` - uses the status code from the error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Social(err) => match err {
                SocialError::InvalidOperation { .. } => StatusCode::BAD_REQUEST,
                SocialError::NotFound { .. } => StatusCode::NOT_FOUND,
                SocialError::Validation { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Handler { status, .. } => *status,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Social(err) => err.to_string(),
            Self::Directory(err) => err.to_string(),
            Self::Handler { message, .. } => message.clone(),
        }
    }
}
