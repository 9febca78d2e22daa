/**
 * User Model
 *
 * This module defines the user record held by the directory and the summary
 * projection used when rendering follower/following pages.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::relationship::Relationship;

/// A user record as stored in the directory.
///
/// `followers` and `followings` are the two redundant halves of the social
/// graph: for any users A and B, `B.id ∈ A.followings` must hold exactly when
/// `A.id ∈ B.followers`. The relationship engine is the only writer of these
/// two lists and keeps them in lockstep on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique handle)
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Avatar reference (URL or storage key)
    pub avatar: Option<String>,
    /// Users who follow this user. Ordered, no duplicates.
    pub followers: Vec<Uuid>,
    /// Users this user follows. Ordered, no duplicates.
    pub followings: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with empty follower/following lists
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            full_name: full_name.into(),
            avatar,
            followers: Vec::new(),
            followings: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether this user follows `other`
    pub fn follows(&self, other: Uuid) -> bool {
        self.followings.contains(&other)
    }

    /// Whether this user is followed by `other`
    pub fn followed_by(&self, other: Uuid) -> bool {
        self.followers.contains(&other)
    }
}

/// Projection of a user for follower/following list rendering.
///
/// Carries the viewer-dependent relationship label alongside the identity
/// fields, so the presentation layer can render a follow button state
/// without further queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub user_name: String,
    pub full_name: String,
    pub avatar: Option<String>,
    pub relationship: Relationship,
}

impl UserSummary {
    /// Build a summary of `user` carrying the given relationship label
    pub fn of(user: &User, relationship: Relationship) -> Self {
        Self {
            id: user.id,
            user_name: user.username.clone(),
            full_name: user.full_name.clone(),
            avatar: user.avatar.clone(),
            relationship,
        }
    }
}
