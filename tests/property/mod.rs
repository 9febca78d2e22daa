//! Property-based tests

pub mod relationship_proptest;
