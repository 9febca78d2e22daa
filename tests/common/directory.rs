//! Call-counting directory wrapper
//!
//! Wraps a `MemoryDirectory` and counts batch-fetch calls, so tests can
//! assert that the empty-list short-circuit never touches the directory.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use flock::backend::directory::{DirectoryError, MemoryDirectory, UserDirectory};
use flock::shared::User;

/// Directory that counts `query` calls
#[derive(Clone, Default)]
pub struct CountingDirectory {
    inner: MemoryDirectory,
    query_calls: Arc<AtomicUsize>,
}

impl CountingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batch-fetch calls made so far
    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for CountingDirectory {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        self.inner.get_by_id(id).await
    }

    async fn query(&self, ids: &[Uuid]) -> Result<Vec<User>, DirectoryError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.query(ids).await
    }

    async fn save(&self, users: &[User]) -> Result<(), DirectoryError> {
        self.inner.save(users).await
    }

    async fn insert(&self, user: &User) -> Result<(), DirectoryError> {
        self.inner.insert(user).await
    }
}
