//! Call analytics domain models.
//!
//! Snapshots are derived values: computed fresh from a set of call records on
//! every request and never stored.

use serde::{Deserialize, Serialize};

/// Query parameters selecting which campaign feeds the analytics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    /// Selected campaign; omitted means every campaign.
    #[serde(default)]
    pub campaign_id: Option<String>,
}

/// Counts of calls per detected sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBreakdown {
    pub positive: i64,
    pub neutral: i64,
    pub negative: i64,
}

impl SentimentBreakdown {
    /// Number of calls that carried any sentiment.
    pub fn total(&self) -> i64 {
        self.positive + self.neutral + self.negative
    }
}

/// Success statistics for a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformance {
    pub agent: String,
    pub total_calls: i64,
    pub completed_calls: i64,
    /// Rounded percentage of completed calls.
    pub success_rate: i64,
}

/// Summary metrics over a set of call records.
///
/// All averages and percentages are rounded to the nearest integer, half away
/// from zero. An empty input yields the all-zero default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_calls: i64,
    pub completed_calls: i64,
    /// Mean duration in seconds.
    pub avg_duration: i64,
    pub success_rate: i64,
    pub avg_call_score: i64,
    pub compliance_rate: i64,
    pub sentiment_breakdown: SentimentBreakdown,
    pub quality_score: i64,
    pub compliance_score: i64,
    pub top_performing_agents: Vec<AgentPerformance>,
}

/// Response for the agent performance listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    pub agents: Vec<AgentPerformance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_default_is_zero() {
        let snapshot = AnalyticsSnapshot::default();
        assert_eq!(snapshot.total_calls, 0);
        assert_eq!(snapshot.avg_duration, 0);
        assert_eq!(snapshot.sentiment_breakdown.total(), 0);
        assert!(snapshot.top_performing_agents.is_empty());
    }

    #[test]
    fn test_snapshot_serialization_field_names() {
        let json = serde_json::to_string(&AnalyticsSnapshot::default()).unwrap();
        for field in [
            "totalCalls",
            "completedCalls",
            "avgDuration",
            "successRate",
            "avgCallScore",
            "complianceRate",
            "sentimentBreakdown",
            "qualityScore",
            "complianceScore",
            "topPerformingAgents",
        ] {
            assert!(json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_analytics_query_deserialize() {
        let query: AnalyticsQuery =
            serde_json::from_str(r#"{"campaignId":"spring-outreach"}"#).unwrap();
        assert_eq!(query.campaign_id.as_deref(), Some("spring-outreach"));

        let query: AnalyticsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.campaign_id.is_none());
    }
}
