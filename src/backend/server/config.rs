/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * focusing on the optional PostgreSQL database connection and the
 * pagination ceiling.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development:
 * - `DATABASE_URL` - PostgreSQL connection string (optional)
 * - `FLOCK_MAX_PAGE_SIZE` - ceiling on list page sizes (default 50)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. When
 * the database fails to initialize, the server falls back to the in-memory
 * directory.
 */

use sqlx::PgPool;

use crate::shared::page::DEFAULT_MAX_PAGE_SIZE;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured, or
/// `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Falling back to the in-memory directory.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory directory.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Ceiling on list page sizes, from `FLOCK_MAX_PAGE_SIZE`
pub fn max_page_size() -> u32 {
    match std::env::var("FLOCK_MAX_PAGE_SIZE") {
        Ok(value) => match value.parse::<u32>() {
            Ok(size) if size >= 1 => size,
            _ => {
                tracing::warn!(
                    "Invalid FLOCK_MAX_PAGE_SIZE '{}', using default {}",
                    value,
                    DEFAULT_MAX_PAGE_SIZE
                );
                DEFAULT_MAX_PAGE_SIZE
            }
        },
        Err(_) => DEFAULT_MAX_PAGE_SIZE,
    }
}
