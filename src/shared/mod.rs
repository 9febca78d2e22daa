//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the relationship engine and the HTTP surface. All types are designed for
//! serialization and transmission over HTTP.

/// User records and list summaries
pub mod user;

/// Relationship classification between two users
pub mod relationship;

/// Pagination primitives for list endpoints
pub mod page;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use user::{User, UserSummary};
pub use relationship::Relationship;
pub use page::{Page, PageOptions};
pub use error::SocialError;
