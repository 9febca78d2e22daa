//! Social-Graph HTTP Surface
//!
//! HTTP handlers for user registration/lookup and the four relationship
//! operations.

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    create_user, follow_user, get_user, list_followers, list_followings, unfollow_user,
};
