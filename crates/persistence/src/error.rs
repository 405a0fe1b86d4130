//! Store error types.

use thiserror::Error;

/// Errors returned by the in-memory stores.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Campaign already exists: {0}")]
    CampaignExists(String),

    #[error("Call record already exists: {0}")]
    RecordExists(String),
}
