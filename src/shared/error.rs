//! Shared Error Types
//!
//! This module defines the domain error taxonomy for social-graph operations.
//! These errors are transport-agnostic; the backend maps them onto HTTP
//! status codes.
//!
//! # Error Categories
//!
//! - `InvalidOperation` - the operation is never permitted (self-follow)
//! - `NotFound` - a referenced user or edge does not exist
//! - `Validation` - input data failed validation
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.
use thiserror::Error;

/// Domain errors for social-graph operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SocialError {
    /// The operation is never permitted, regardless of state
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Human-readable error message
        message: String,
    },

    /// A referenced user or edge does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Input data failed validation
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SocialError {
    /// Create a new invalid-operation error
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
