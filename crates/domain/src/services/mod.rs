//! Domain services for call analytics.
//!
//! Services contain business logic that operates on domain models.

pub mod analytics;
pub mod campaign_selection;

pub use analytics::{agent_performance, compute_analytics, COMPLIANCE_THRESHOLD, TOP_AGENT_LIMIT};

pub use campaign_selection::{
    bucket_for, select_campaign_records, CampaignRecords, CampaignSelection, UNASSIGNED_CAMPAIGN,
};
