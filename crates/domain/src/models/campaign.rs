//! Campaign domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::services::UNASSIGNED_CAMPAIGN;

/// Lifecycle state of a calling campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Active => write!(f, "active"),
            CampaignStatus::Paused => write!(f, "paused"),
            CampaignStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A named outbound or inbound calling initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a campaign.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    #[validate(custom(function = "validate_campaign_id"))]
    pub id: String,

    #[validate(length(
        min = 2,
        max = 100,
        message = "Campaign name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[serde(default)]
    pub status: CampaignStatus,
}

impl CreateCampaignRequest {
    pub fn into_campaign(self, created_at: DateTime<Utc>) -> Campaign {
        Campaign {
            id: self.id,
            name: self.name,
            status: self.status,
            created_at,
        }
    }
}

/// Validates a new campaign id. The unassigned bucket id is reserved.
pub fn validate_campaign_id(id: &str) -> Result<(), ValidationError> {
    shared::validation::validate_identifier(id)?;
    if id == UNASSIGNED_CAMPAIGN {
        let mut err = ValidationError::new("reserved_identifier");
        err.message = Some(
            format!("'{}' is reserved for calls without a campaign", UNASSIGNED_CAMPAIGN).into(),
        );
        return Err(err);
    }
    Ok(())
}

/// Response for campaign listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCampaignsResponse {
    pub campaigns: Vec<Campaign>,
    pub total: usize,
}
