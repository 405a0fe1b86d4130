//! Campaign endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use domain::models::{Campaign, CreateCampaignRequest, ListCampaignsResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List all campaigns, sorted by id.
///
/// GET /api/v1/campaigns
pub async fn list_campaigns(State(state): State<AppState>) -> Json<ListCampaignsResponse> {
    let campaigns = state.stores.campaigns.list_campaigns().await;
    let total = campaigns.len();
    Json(ListCampaignsResponse { campaigns, total })
}

/// Create a campaign.
///
/// POST /api/v1/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(request): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    request.validate()?;

    let campaign = state
        .stores
        .campaigns
        .create_campaign(request.into_campaign(Utc::now()))
        .await?;

    info!(campaign_id = %campaign.id, status = %campaign.status, "Campaign created");

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// Get a single campaign.
///
/// GET /api/v1/campaigns/:campaign_id
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<Campaign>, ApiError> {
    state
        .stores
        .campaigns
        .find_campaign(&campaign_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Campaign not found: {}", campaign_id)))
}
