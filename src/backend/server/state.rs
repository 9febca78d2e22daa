/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The relationship engine (over the runtime-selected directory)
 * - The user directory (for handlers that create/read users directly)
 * - The optional database pool
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `Arc<RelationshipEngine<Directory>>` shares one engine (and one lock
 *   registry) across all handlers
 * - Both directory backends are internally synchronized and cheap to clone
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::directory::Directory;
use crate::backend::engine::RelationshipEngine;

/// Application state for the Axum server
#[derive(Clone)]
pub struct AppState {
    /// The relationship engine, single writer of the social graph
    pub engine: Arc<RelationshipEngine<Directory>>,

    /// The active user directory backend
    pub directory: Directory,

    /// Database connection pool
    ///
    /// `None` when the database is not configured (`DATABASE_URL` unset);
    /// the server then runs on the in-memory directory.
    pub db_pool: Option<PgPool>,
}

/// Allow handlers to extract the engine directly
impl FromRef<AppState> for Arc<RelationshipEngine<Directory>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.engine.clone()
    }
}

/// Allow handlers to extract the directory directly
impl FromRef<AppState> for Directory {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.directory.clone()
    }
}

/// Allow handlers to extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
