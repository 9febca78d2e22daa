//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Engine and directory fixtures
//! - A call-counting directory wrapper
//! - User seeding helpers

pub mod directory;

pub use directory::CountingDirectory;

use flock::backend::directory::{MemoryDirectory, UserDirectory};
use flock::backend::engine::RelationshipEngine;
use flock::shared::User;
use uuid::Uuid;

/// Page-size ceiling used across tests
pub const MAX_PAGE_SIZE: u32 = 50;

/// Build an engine over a fresh in-memory directory
pub fn engine() -> RelationshipEngine<MemoryDirectory> {
    RelationshipEngine::new(MemoryDirectory::new(), MAX_PAGE_SIZE)
}

/// Insert a user with empty lists and return their id
pub async fn seed_user<D: UserDirectory>(engine: &RelationshipEngine<D>, username: &str) -> Uuid {
    let user = User::new(username, format!("User {}", username), None);
    engine
        .directory()
        .insert(&user)
        .await
        .expect("seeding a user must succeed");
    user.id
}

/// Fetch a user's record through the engine's directory
pub async fn fetch<D: UserDirectory>(engine: &RelationshipEngine<D>, id: Uuid) -> User {
    engine
        .directory()
        .get_by_id(id)
        .await
        .expect("directory fetch must succeed")
        .expect("user must exist")
}
