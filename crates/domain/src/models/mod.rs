//! Domain models for call analytics.

pub mod analytics;
pub mod call_record;
pub mod campaign;

pub use analytics::{
    AgentPerformance, AgentPerformanceResponse, AnalyticsQuery, AnalyticsSnapshot,
    SentimentBreakdown,
};
pub use call_record::{
    CallRecord, CallStatus, IngestCallRecordRequest, MetricScore, Sentiment, COMPLIANCE_METRIC,
};
pub use campaign::{Campaign, CampaignStatus, CreateCampaignRequest, ListCampaignsResponse};
