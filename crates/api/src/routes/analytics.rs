//! Call analytics endpoint handlers.
//!
//! Analytics are recomputed from the stored records on every request.

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::{AgentPerformanceResponse, AnalyticsQuery, AnalyticsSnapshot};
use domain::services::{agent_performance, compute_analytics};
use tracing::debug;

use crate::app::AppState;
use crate::middleware::metrics::record_analytics_computed;

/// Summary analytics for the selected campaign, or across all campaigns.
///
/// GET /api/v1/analytics?campaignId=<id>
///
/// An unknown campaign yields the all-zero snapshot.
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<AnalyticsSnapshot> {
    let records = state
        .stores
        .call_records
        .get_records(query.campaign_id.as_deref())
        .await;

    let snapshot = compute_analytics(&records);
    record_analytics_computed("snapshot", query.campaign_id.is_some(), records.len());

    debug!(
        campaign_id = query.campaign_id.as_deref().unwrap_or("-"),
        total_calls = snapshot.total_calls,
        success_rate = snapshot.success_rate,
        "Computed analytics snapshot"
    );

    Json(snapshot)
}

/// Full agent ranking for the selected campaign.
///
/// GET /api/v1/analytics/agents?campaignId=<id>
pub async fn get_agent_performance(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<AgentPerformanceResponse> {
    let records = state
        .stores
        .call_records
        .get_records(query.campaign_id.as_deref())
        .await;

    let agents = agent_performance(&records);
    record_analytics_computed("agents", query.campaign_id.is_some(), records.len());

    Json(AgentPerformanceResponse {
        campaign_id: query.campaign_id,
        agents,
    })
}
