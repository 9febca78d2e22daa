//! Flock - Main Library
//!
//! Flock is a social-graph backend built with Rust. Its core is the
//! relationship engine: the single writer of the redundant follower/following
//! lists stored on every user record, and the single source of truth for the
//! follow / following / follow back / friend classification between any two
//! users.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the engine and its callers
//!   - User records and list summaries
//!   - Relationship classification
//!   - Pagination primitives
//!   - Domain error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and route configuration
//!   - The relationship engine and its pair-update locking
//!   - User directory implementations (PostgreSQL, in-memory)
//!   - Backend error types and HTTP conversion

/// Types shared between the engine and its callers
pub mod shared;

/// Server-side code
pub mod backend;
