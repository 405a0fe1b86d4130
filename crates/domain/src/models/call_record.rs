//! Call record domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

/// Metric key whose score drives compliance rate and compliance score.
pub const COMPLIANCE_METRIC: &str = "compliance";

/// Outcome of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Completed,
    Failed,
    InProgress,
}

impl std::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallStatus::Completed => write!(f, "completed"),
            CallStatus::Failed => write!(f, "failed"),
            CallStatus::InProgress => write!(f, "in-progress"),
        }
    }
}

/// Caller sentiment detected for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// A single scored quality dimension of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricScore {
    pub score: f64,
    #[serde(default)]
    pub explanation: String,
}

impl MetricScore {
    pub fn new(score: f64, explanation: impl Into<String>) -> Self {
        Self {
            score,
            explanation: explanation.into(),
        }
    }
}

/// One observed phone interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: String,
    pub status: CallStatus,
    /// Call length in seconds.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    /// Scored dimensions keyed by metric name. Absent and empty are equivalent.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, MetricScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl CallRecord {
    /// Create a record with only the mandatory fields set.
    pub fn new(id: impl Into<String>, status: CallStatus, duration: u32) -> Self {
        Self {
            id: id.into(),
            status,
            duration,
            agent: None,
            sentiment: None,
            overall_score: None,
            metrics: BTreeMap::new(),
            started_at: None,
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn with_overall_score(mut self, score: f64) -> Self {
        self.overall_score = Some(score);
        self
    }

    pub fn with_metric(
        mut self,
        name: impl Into<String>,
        score: f64,
        explanation: impl Into<String>,
    ) -> Self {
        self.metrics
            .insert(name.into(), MetricScore::new(score, explanation));
        self
    }

    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Whether the call finished successfully.
    pub fn is_completed(&self) -> bool {
        self.status == CallStatus::Completed
    }

    /// Agent name, treating an empty string the same as no agent.
    pub fn agent_name(&self) -> Option<&str> {
        self.agent.as_deref().filter(|name| !name.is_empty())
    }

    /// Score of the `compliance` metric, if scored.
    pub fn compliance_score(&self) -> Option<f64> {
        self.metrics.get(COMPLIANCE_METRIC).map(|m| m.score)
    }

    /// Mean of every metric score on this record, or `None` without metrics.
    pub fn mean_metric_score(&self) -> Option<f64> {
        if self.metrics.is_empty() {
            return None;
        }
        let sum: f64 = self.metrics.values().map(|m| m.score).sum();
        Some(sum / self.metrics.len() as f64)
    }
}

/// Request payload for ingesting a call record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IngestCallRecordRequest {
    /// Campaign the call belongs to; omitted calls land in the unassigned bucket.
    #[validate(custom(function = "shared::validation::validate_identifier"))]
    pub campaign_id: Option<String>,

    /// Record identifier; generated when omitted.
    #[validate(custom(function = "shared::validation::validate_identifier"))]
    pub id: Option<String>,

    pub status: CallStatus,

    pub duration: u32,

    #[validate(length(max = 100, message = "Agent name must be at most 100 characters"))]
    pub agent: Option<String>,

    pub sentiment: Option<Sentiment>,

    #[validate(range(min = 0.0, max = 100.0, message = "Overall score must be between 0 and 100"))]
    pub overall_score: Option<f64>,

    #[serde(default)]
    #[validate(custom(function = "validate_metric_scores"))]
    pub metrics: BTreeMap<String, MetricScore>,

    pub started_at: Option<DateTime<Utc>>,
}

impl IngestCallRecordRequest {
    /// Split the request into its campaign id and the record to store.
    pub fn into_record(self) -> (Option<String>, CallRecord) {
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let record = CallRecord {
            id,
            status: self.status,
            duration: self.duration,
            agent: self.agent,
            sentiment: self.sentiment,
            overall_score: self.overall_score,
            metrics: self.metrics,
            started_at: self.started_at,
        };
        (self.campaign_id, record)
    }
}

/// Validates metric names and that every metric score lies within 0 to 100.
pub fn validate_metric_scores(
    metrics: &BTreeMap<String, MetricScore>,
) -> Result<(), validator::ValidationError> {
    for (name, metric) in metrics {
        shared::validation::validate_metric_name(name)?;
        shared::validation::validate_score(metric.score)?;
    }
    Ok(())
}
