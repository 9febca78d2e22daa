/**
 * Relationship Engine
 *
 * The single writer of the social graph. Every mutation goes through this
 * engine, which is solely responsible for the bidirectional invariant on the
 * redundant follower/following lists: `B.id ∈ A.followings` holds exactly
 * when `A.id ∈ B.followers`.
 *
 * # Operations
 *
 * - `follow` / `unfollow` - mutate both sides of an edge and persist the two
 *   records as one logical commit, then re-classify the relationship from
 *   the follower's perspective
 * - `list_followers` / `list_followings` - resolve a page of a user's list
 *   into summaries carrying a relationship label for the viewer
 *
 * # Concurrency
 *
 * The engine holds no per-request state; the directory is the only shared
 * mutable resource. Each mutation takes per-user async locks for both ends
 * of the edge (sorted id order) before the read-modify-write, so concurrent
 * requests on overlapping pairs cannot drop updates.
 */

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::backend::directory::UserDirectory;
use crate::backend::error::BackendError;
use crate::shared::{Page, PageOptions, Relationship, SocialError, User, UserSummary};

/// Pair-update serialization
pub mod locks;

pub use locks::UserLocks;

/// Result of a follow or unfollow mutation
#[derive(Debug, Clone, Serialize)]
pub struct FollowOutcome {
    /// Human-readable confirmation
    pub message: String,
    /// Relationship classified after the mutation, from the acting user's
    /// perspective
    pub relationship: Relationship,
}

/// Which of a subject's two lists is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Followers,
    Followings,
}

/// The relationship engine over a user directory
pub struct RelationshipEngine<D> {
    directory: D,
    locks: UserLocks,
    max_page_size: u32,
}

impl<D: UserDirectory> RelationshipEngine<D> {
    pub fn new(directory: D, max_page_size: u32) -> Self {
        Self {
            directory,
            locks: UserLocks::new(),
            max_page_size,
        }
    }

    /// The lock registry, exposed so the server can run periodic cleanup
    pub fn locks(&self) -> &UserLocks {
        &self.locks
    }

    /// The directory the engine operates on
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Fetch a user or fail with `NotFound`
    async fn require(&self, id: Uuid) -> Result<User, BackendError> {
        self.directory
            .get_by_id(id)
            .await?
            .ok_or_else(|| SocialError::not_found(format!("user {} not found", id)).into())
    }

    /// Create a follow edge from `follower_id` to `following_id`.
    ///
    /// Idempotent on the edge: a repeated follow changes nothing and
    /// re-reports the current classification. Both records persist as one
    /// logical commit.
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` if the two ids are equal
    /// - `NotFound` if either user does not exist
    pub async fn follow(
        &self,
        follower_id: Uuid,
        following_id: Uuid,
    ) -> Result<FollowOutcome, BackendError> {
        if follower_id == following_id {
            return Err(SocialError::invalid_operation("users cannot follow themselves").into());
        }

        let _guards = self.locks.lock_pair(follower_id, following_id).await;

        let mut follower = self.require(follower_id).await?;
        let mut following = self.require(following_id).await?;

        // Idempotent insert on both sides: never a duplicate entry.
        if !follower.followings.contains(&following_id) {
            follower.followings.push(following_id);
        }
        if !following.followers.contains(&follower_id) {
            following.followers.push(follower_id);
        }

        self.directory
            .save(&[follower.clone(), following.clone()])
            .await?;

        let relationship = Relationship::classify(&follower, &following);
        tracing::info!(%follower_id, %following_id, relationship = %relationship, "follow edge created");

        Ok(FollowOutcome {
            message: format!("You are now following {}", following.username),
            relationship,
        })
    }

    /// Remove the follow edge from `follower_id` to `following_id`.
    ///
    /// Not idempotent: removing an edge that does not exist fails with
    /// `NotFound`.
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` if the two ids are equal
    /// - `NotFound` if either user is missing, or the edge does not exist
    pub async fn unfollow(
        &self,
        follower_id: Uuid,
        following_id: Uuid,
    ) -> Result<FollowOutcome, BackendError> {
        if follower_id == following_id {
            return Err(SocialError::invalid_operation("users cannot unfollow themselves").into());
        }

        let _guards = self.locks.lock_pair(follower_id, following_id).await;

        let mut follower = self.require(follower_id).await?;
        let mut following = self.require(following_id).await?;

        if !follower.followings.contains(&following_id) {
            return Err(SocialError::not_found(format!(
                "{} is not following {}",
                follower.username, following.username
            ))
            .into());
        }

        follower.followings.retain(|id| *id != following_id);
        following.followers.retain(|id| *id != follower_id);

        self.directory
            .save(&[follower.clone(), following.clone()])
            .await?;

        // The forward edge is gone, so this resolves to Follow or FollowBack.
        let relationship = Relationship::classify(&follower, &following);
        tracing::info!(%follower_id, %following_id, relationship = %relationship, "follow edge removed");

        Ok(FollowOutcome {
            message: format!("You unfollowed {}", following.username),
            relationship,
        })
    }

    /// Page through the users who follow `subject_id`
    pub async fn list_followers(
        &self,
        subject_id: Uuid,
        viewer_id: Uuid,
        opts: PageOptions,
    ) -> Result<Page<UserSummary>, BackendError> {
        self.page_of(subject_id, viewer_id, opts, ListKind::Followers)
            .await
    }

    /// Page through the users `subject_id` follows
    pub async fn list_followings(
        &self,
        subject_id: Uuid,
        viewer_id: Uuid,
        opts: PageOptions,
    ) -> Result<Page<UserSummary>, BackendError> {
        self.page_of(subject_id, viewer_id, opts, ListKind::Followings)
            .await
    }

    /// Resolve one page of a subject's follower or following list.
    ///
    /// Classification is dual-mode: when the viewer browses their own list,
    /// each entry is classified against the viewer; when browsing someone
    /// else's list, the viewer-vs-subject classification is computed once
    /// and stamped on every entry.
    async fn page_of(
        &self,
        subject_id: Uuid,
        viewer_id: Uuid,
        opts: PageOptions,
        kind: ListKind,
    ) -> Result<Page<UserSummary>, BackendError> {
        let opts = opts.clamped(self.max_page_size);
        let subject = self.require(subject_id).await?;

        let ids = match kind {
            ListKind::Followers => &subject.followers,
            ListKind::Followings => &subject.followings,
        };

        // Empty list: answer without touching the directory again.
        if ids.is_empty() {
            return Ok(Page::empty(opts));
        }

        let total = ids.len();
        let slice: Vec<Uuid> = ids
            .iter()
            .skip(opts.offset())
            .take(opts.page_size as usize)
            .copied()
            .collect();

        let self_view = viewer_id == subject_id;
        let viewer = if self_view {
            subject.clone()
        } else {
            self.require(viewer_id).await?
        };
        let fixed = if self_view {
            None
        } else {
            Some(Relationship::classify(&viewer, &subject))
        };

        let fetched = self.directory.query(&slice).await?;
        let by_id: HashMap<Uuid, User> = fetched.into_iter().map(|u| (u.id, u)).collect();

        let mut items = Vec::with_capacity(slice.len());
        for id in &slice {
            // Ids with no surviving record are skipped rather than rendered
            // as holes.
            let Some(entry) = by_id.get(id) else {
                tracing::warn!(user_id = %id, "list entry references a missing user record");
                continue;
            };
            let relationship = match fixed {
                Some(relationship) => relationship,
                None => Relationship::classify(&viewer, entry),
            };
            items.push(UserSummary::of(entry, relationship));
        }

        Ok(Page::from_slice(items, total, opts))
    }
}
