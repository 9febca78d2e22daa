/**
 * Pair-Update Serialization
 *
 * Follow and unfollow perform a read-modify-write across two user records.
 * Two interleaved requests touching the same record would silently drop one
 * side's update, so every mutation first takes the async mutexes of both
 * affected users.
 *
 * Locks are keyed per user id and acquired in sorted id order, which also
 * serializes two different pairs that share one user. Sorted acquisition
 * keeps lock ordering consistent across requests, so two pairs can never
 * deadlock each other.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

/// Registry of per-user async mutexes
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the mutex guarding a single user's record
    fn user(&self, id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks.entry(id).or_default().clone()
    }

    /// Lock both users' mutexes, lower id first.
    ///
    /// The returned guards hold the locks until dropped.
    pub async fn lock_pair(&self, a: Uuid, b: Uuid) -> (OwnedMutexGuard<()>, OwnedMutexGuard<()>) {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let first_guard = self.user(first).lock_owned().await;
        let second_guard = self.user(second).lock_owned().await;
        (first_guard, second_guard)
    }

    /// Drop lock entries nobody currently holds or awaits
    pub fn cleanup(&self) {
        self.locks
            .lock()
            .unwrap()
            .retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    /// Number of live lock entries (for debugging)
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().unwrap().is_empty()
    }
}
