//! In-memory user directory
//!
//! Backs tests and database-less development runs. Records live in a
//! `HashMap` behind an async `RwLock`; `save` replaces whole records, which
//! matches the commit granularity the engine relies on.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DirectoryError, UserDirectory};
use crate::shared::User;

/// Process-local user directory
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn query(&self, ids: &[Uuid]) -> Result<Vec<User>, DirectoryError> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn save(&self, users: &[User]) -> Result<(), DirectoryError> {
        let mut map = self.users.write().await;
        for user in users {
            map.insert(user.id, user.clone());
        }
        Ok(())
    }

    async fn insert(&self, user: &User) -> Result<(), DirectoryError> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(())
    }
}
