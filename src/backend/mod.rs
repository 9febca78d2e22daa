//! Backend Module
//!
//! This module contains all server-side code for the Flock application.
//! It provides an Axum HTTP server around the relationship engine.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`engine`** - The relationship engine and its pair-update locking
//! - **`directory`** - User directory implementations (PostgreSQL, in-memory)
//! - **`social`** - HTTP handlers for the social-graph endpoints
//! - **`error`** - Backend-specific error types
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) containing the relationship
//! engine, the active user directory, and the optional database pool. State
//! is shared across request handlers using `Arc`; the engine itself holds no
//! per-request state.
//!
//! # Error Handling
//!
//! Handlers return `BackendError`, which implements `IntoResponse` and maps
//! domain errors onto HTTP status codes. Errors propagate with the `?`
//! operator; no handler swallows an error into a degraded success.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// The relationship engine
pub mod engine;

/// User directory (persistence boundary)
pub mod directory;

/// HTTP handlers for social-graph endpoints
pub mod social;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use engine::RelationshipEngine;
pub use directory::{Directory, UserDirectory};
pub use error::BackendError;
