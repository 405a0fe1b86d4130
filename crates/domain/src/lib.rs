//! Domain layer for the call analytics backend.
//!
//! This crate contains:
//! - Domain models (CallRecord, Campaign, AnalyticsSnapshot)
//! - The analytics aggregation and campaign selection services
//! - Request payloads and their validation rules

pub mod models;
pub mod services;
