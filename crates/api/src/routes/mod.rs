//! HTTP route handlers.

pub mod analytics;
pub mod calls;
pub mod campaigns;
pub mod health;
