//! User Directory
//!
//! The persistence boundary for user records. The relationship engine talks
//! to storage exclusively through the narrow [`UserDirectory`] trait: fetch
//! one record, batch-fetch several, persist a set of updated records as one
//! logical commit, and insert a new record.
//!
//! Two implementations are provided:
//!
//! - [`PgDirectory`] - PostgreSQL via sqlx, used when `DATABASE_URL` is set
//! - [`MemoryDirectory`] - process-local map, used by tests and by
//!   database-less development runs

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::User;

/// PostgreSQL-backed directory
pub mod postgres;

/// In-memory directory
pub mod memory;

pub use memory::MemoryDirectory;
pub use postgres::PgDirectory;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Underlying database failure
    #[error("Directory error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Narrow persistence interface consumed by the relationship engine
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a single user record, or `None` if it does not exist
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError>;

    /// Batch-fetch user records for list rendering.
    ///
    /// Missing ids are skipped; result order is unspecified.
    async fn query(&self, ids: &[Uuid]) -> Result<Vec<User>, DirectoryError>;

    /// Persist updated records as one logical commit.
    ///
    /// Either every record in `users` is saved or none is; partial
    /// application must not be observable to callers.
    async fn save(&self, users: &[User]) -> Result<(), DirectoryError>;

    /// Insert a new user record
    async fn insert(&self, user: &User) -> Result<(), DirectoryError>;
}

/// Runtime-selected directory backend.
///
/// PostgreSQL when the database is configured, otherwise process-local
/// memory. The enum keeps `AppState` free of generics while the engine and
/// tests stay generic over [`UserDirectory`].
#[derive(Clone)]
pub enum Directory {
    Postgres(PgDirectory),
    Memory(MemoryDirectory),
}

#[async_trait]
impl UserDirectory for Directory {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        match self {
            Self::Postgres(dir) => dir.get_by_id(id).await,
            Self::Memory(dir) => dir.get_by_id(id).await,
        }
    }

    async fn query(&self, ids: &[Uuid]) -> Result<Vec<User>, DirectoryError> {
        match self {
            Self::Postgres(dir) => dir.query(ids).await,
            Self::Memory(dir) => dir.query(ids).await,
        }
    }

    async fn save(&self, users: &[User]) -> Result<(), DirectoryError> {
        match self {
            Self::Postgres(dir) => dir.save(users).await,
            Self::Memory(dir) => dir.save(users).await,
        }
    }

    async fn insert(&self, user: &User) -> Result<(), DirectoryError> {
        match self {
            Self::Postgres(dir) => dir.insert(user).await,
            Self::Memory(dir) => dir.insert(user).await,
        }
    }
}
