//! Storage layer for the call analytics backend.
//!
//! This crate contains:
//! - Storage traits consumed by request handlers
//! - In-memory store implementations
//! - Demo seed data
//! - Store operation metrics

pub mod error;
pub mod metrics;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::StoreError;
