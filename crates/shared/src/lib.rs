//! Shared utilities and common types for the call analytics backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic (scores, identifiers, metric names)

pub mod validation;
