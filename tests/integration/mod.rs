//! Integration tests for the relationship engine

pub mod engine_test;
