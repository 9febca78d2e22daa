//! Server Module
//!
//! Server initialization, application state, and configuration.

/// Server initialization
pub mod init;

/// Application state
pub mod state;

/// Server configuration
pub mod config;

pub use init::create_app;
pub use state::AppState;
