/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, directory selection, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool
 * 2. Select the directory backend (PostgreSQL, or in-memory fallback)
 * 3. Build the relationship engine
 * 4. Create and configure the router
 * 5. Start the periodic lock-registry cleanup task
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::directory::{Directory, MemoryDirectory, PgDirectory};
use crate::backend::engine::RelationshipEngine;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, max_page_size};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// The function is designed to be resilient: a missing or unreachable
/// database downgrades the server to the in-memory directory with a warning
/// instead of refusing to start.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing Flock backend server");

    // Step 1: Load the optional database pool
    let db_pool = load_database().await;

    // Step 2: Select the directory backend
    let directory = match &db_pool {
        Some(pool) => Directory::Postgres(PgDirectory::new(pool.clone())),
        None => {
            tracing::warn!("Using in-memory directory; user records will not survive restarts");
            Directory::Memory(MemoryDirectory::new())
        }
    };

    // Step 3: Build the relationship engine
    let engine = Arc::new(RelationshipEngine::new(directory.clone(), max_page_size()));

    let app_state = AppState {
        engine: engine.clone(),
        directory,
        db_pool,
    };

    // Step 4: Create router with all routes
    let app = create_router(app_state);

    // Step 5: Periodically drop pair locks nobody holds
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            engine.locks().cleanup();
            tracing::debug!("Cleaned up unheld pair locks");
        }
    });

    tracing::info!("Router configured with periodic lock cleanup task");

    app
}
