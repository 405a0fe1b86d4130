//! Call record endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{AnalyticsQuery, CallRecord, IngestCallRecordRequest};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_call_ingested;
use crate::middleware::RequestId;

/// Response for call record listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCallRecordsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    pub records: Vec<CallRecord>,
    pub total: usize,
}

/// List call records for the selected campaign, or all records.
///
/// GET /api/v1/calls?campaignId=<id>
pub async fn list_calls(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<ListCallRecordsResponse> {
    let records = state
        .stores
        .call_records
        .get_records(query.campaign_id.as_deref())
        .await;

    Json(ListCallRecordsResponse {
        campaign_id: query.campaign_id,
        total: records.len(),
        records,
    })
}

/// Ingest a single call record.
///
/// POST /api/v1/calls
///
/// Records naming a campaign require that campaign to exist. Records without
/// one are stored unassigned.
pub async fn ingest_call(
    State(state): State<AppState>,
    request_id: RequestId,
    Json(request): Json<IngestCallRecordRequest>,
) -> Result<(StatusCode, Json<CallRecord>), ApiError> {
    request.validate()?;

    if let Some(campaign_id) = request.campaign_id.as_deref() {
        if state.stores.campaigns.find_campaign(campaign_id).await.is_none() {
            return Err(ApiError::NotFound(format!(
                "Campaign not found: {}",
                campaign_id
            )));
        }
    }

    let (campaign_id, record) = request.into_record();
    state
        .stores
        .call_records
        .add_record(campaign_id.as_deref(), record.clone())
        .await?;

    record_call_ingested(&record.status.to_string());
    info!(
        request_id = %request_id.as_str(),
        record_id = %record.id,
        campaign_id = campaign_id.as_deref().unwrap_or("-"),
        status = %record.status,
        "Call record ingested"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
