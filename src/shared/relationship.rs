/**
 * Relationship Classification
 *
 * This module defines the four-state classification of the edge pair between
 * two users. It is the one piece of logic shared by the follow/unfollow
 * results and the follower/following list rendering, so it lives in exactly
 * one place.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::user::User;

/// The state of the directional edge pair between a viewer and a subject.
///
/// The four cases are exhaustive and mutually exclusive: each is determined
/// by the presence or absence of the edge in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    /// No edge in either direction
    #[serde(rename = "follow")]
    Follow,
    /// Viewer follows subject; subject does not follow back
    #[serde(rename = "following")]
    Following,
    /// Subject follows viewer; viewer does not follow back
    #[serde(rename = "follow back")]
    FollowBack,
    /// Both directions present (mutual)
    #[serde(rename = "friend")]
    Friend,
}

impl Relationship {
    /// Classify the edge pair between `viewer` and `subject`.
    ///
    /// Callers guarantee `viewer.id != subject.id`; a user has no
    /// relationship with themselves.
    pub fn classify(viewer: &User, subject: &User) -> Self {
        let forward = viewer.follows(subject.id);
        let reverse = subject.follows(viewer.id);
        match (forward, reverse) {
            (true, true) => Self::Friend,
            (true, false) => Self::Following,
            (false, true) => Self::FollowBack,
            (false, false) => Self::Follow,
        }
    }

    /// The wire label for this relationship
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Following => "following",
            Self::FollowBack => "follow back",
            Self::Friend => "friend",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
