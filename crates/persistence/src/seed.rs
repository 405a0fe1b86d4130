//! Demo data for development and the dashboard preview.

use chrono::{Duration, Utc};
use domain::models::{CallRecord, CallStatus, Campaign, CampaignStatus, Sentiment};

use crate::error::StoreError;
use crate::repositories::{CallRecordSource, CampaignStore};

/// Counts of seeded entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub campaigns: usize,
    pub call_records: usize,
}

/// Demo campaigns.
pub fn demo_campaigns() -> Vec<Campaign> {
    let now = Utc::now();
    vec![
        Campaign {
            id: "spring-outreach".to_string(),
            name: "Spring Outreach".to_string(),
            status: CampaignStatus::Active,
            created_at: now - Duration::days(30),
        },
        Campaign {
            id: "renewals-q3".to_string(),
            name: "Q3 Renewals".to_string(),
            status: CampaignStatus::Paused,
            created_at: now - Duration::days(14),
        },
        Campaign {
            id: "winback".to_string(),
            name: "Customer Winback".to_string(),
            status: CampaignStatus::Completed,
            created_at: now - Duration::days(60),
        },
    ]
}

/// Demo call records paired with their campaign id.
pub fn demo_call_records() -> Vec<(Option<&'static str>, CallRecord)> {
    let now = Utc::now();
    let at = |minutes: i64| now - Duration::minutes(minutes);

    vec![
        (
            Some("spring-outreach"),
            CallRecord::new("call-1001", CallStatus::Completed, 245)
                .with_agent("Sarah Johnson")
                .with_sentiment(Sentiment::Positive)
                .with_overall_score(92.0)
                .with_metric("compliance", 98.0, "All required disclosures were read")
                .with_metric("proper_greeting", 95.0, "Greeted by name and introduced company")
                .with_metric("objection_handling", 84.0, "Addressed pricing concern")
                .with_started_at(at(35)),
        ),
        (
            Some("spring-outreach"),
            CallRecord::new("call-1002", CallStatus::Completed, 312)
                .with_agent("Mike Chen")
                .with_sentiment(Sentiment::Neutral)
                .with_overall_score(78.0)
                .with_metric("compliance", 88.0, "Recording notice given late")
                .with_metric("proper_greeting", 80.0, "Greeting was rushed")
                .with_started_at(at(80)),
        ),
        (
            Some("spring-outreach"),
            CallRecord::new("call-1003", CallStatus::Failed, 18)
                .with_agent("Mike Chen")
                .with_sentiment(Sentiment::Negative)
                .with_started_at(at(120)),
        ),
        (
            Some("spring-outreach"),
            CallRecord::new("call-1004", CallStatus::InProgress, 64)
                .with_agent("Emily Davis")
                .with_started_at(at(2)),
        ),
        (
            Some("spring-outreach"),
            CallRecord::new("call-1005", CallStatus::Completed, 198)
                .with_agent("Emily Davis")
                .with_sentiment(Sentiment::Positive)
                .with_overall_score(88.0)
                .with_metric("compliance", 93.0, "Disclosures complete")
                .with_metric("empathy", 90.0, "Acknowledged customer frustration")
                .with_started_at(at(160)),
        ),
        (
            Some("renewals-q3"),
            CallRecord::new("call-2001", CallStatus::Completed, 421)
                .with_agent("Sarah Johnson")
                .with_sentiment(Sentiment::Positive)
                .with_overall_score(95.0)
                .with_metric("compliance", 100.0, "Script followed verbatim")
                .with_metric("closing", 94.0, "Confirmed renewal terms")
                .with_started_at(at(300)),
        ),
        (
            Some("renewals-q3"),
            CallRecord::new("call-2002", CallStatus::Completed, 276)
                .with_agent("David Wilson")
                .with_sentiment(Sentiment::Neutral)
                .with_overall_score(71.0)
                .with_metric("compliance", 90.0, "Minimum disclosures given")
                .with_metric("closing", 62.0, "No clear next step agreed")
                .with_started_at(at(420)),
        ),
        (
            Some("renewals-q3"),
            CallRecord::new("call-2003", CallStatus::Failed, 0)
                .with_agent("David Wilson")
                .with_started_at(at(500)),
        ),
        (
            Some("winback"),
            CallRecord::new("call-3001", CallStatus::Completed, 530)
                .with_agent("Lisa Anderson")
                .with_sentiment(Sentiment::Negative)
                .with_overall_score(64.0)
                .with_metric("compliance", 75.0, "Skipped recording notice")
                .with_metric("objection_handling", 58.0, "Did not address cancellation reason")
                .with_started_at(at(2_000)),
        ),
        (
            Some("winback"),
            CallRecord::new("call-3002", CallStatus::Completed, 389)
                .with_agent("Lisa Anderson")
                .with_sentiment(Sentiment::Positive)
                .with_overall_score(86.0)
                .with_metric("compliance", 96.0, "Disclosures complete")
                .with_started_at(at(2_400)),
        ),
        (
            None,
            CallRecord::new("call-9001", CallStatus::Completed, 142)
                .with_sentiment(Sentiment::Neutral)
                .with_overall_score(70.0)
                .with_started_at(at(45)),
        ),
    ]
}

/// Load the demo campaigns and call records into the given stores.
pub async fn seed_demo_data(
    campaigns: &dyn CampaignStore,
    call_records: &dyn CallRecordSource,
) -> Result<SeedSummary, StoreError> {
    let mut summary = SeedSummary {
        campaigns: 0,
        call_records: 0,
    };

    for campaign in demo_campaigns() {
        campaigns.create_campaign(campaign).await?;
        summary.campaigns += 1;
    }

    for (campaign_id, record) in demo_call_records() {
        call_records.add_record(campaign_id, record).await?;
        summary.call_records += 1;
    }

    tracing::info!(
        campaigns = summary.campaigns,
        call_records = summary.call_records,
        "Seeded demo data"
    );

    Ok(summary)
}
