//! Call record storage.

use async_trait::async_trait;
use domain::models::CallRecord;
use domain::services::{bucket_for, select_campaign_records, CampaignRecords, CampaignSelection};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::metrics::{record_call_record_count, StoreTimer};

/// Source of call records, grouped by campaign.
#[async_trait]
pub trait CallRecordSource: Send + Sync {
    /// Records for a campaign, or for every campaign when `campaign_id` is `None`.
    ///
    /// An unknown campaign yields an empty list.
    async fn get_records(&self, campaign_id: Option<&str>) -> Vec<CallRecord>;

    /// Store a record under a campaign, or the unassigned bucket when `campaign_id` is `None`.
    async fn add_record(
        &self,
        campaign_id: Option<&str>,
        record: CallRecord,
    ) -> Result<(), StoreError>;

    /// Total number of stored records.
    async fn count(&self) -> usize;
}

/// In-memory call record store.
///
/// Reads clone the selected records out from under a shared lock so callers
/// aggregate over a stable snapshot.
#[derive(Debug, Default)]
pub struct InMemoryCallRecordStore {
    records: RwLock<CampaignRecords>,
    latency: Duration,
}

impl InMemoryCallRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that delays every operation by `latency`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            records: RwLock::new(CampaignRecords::new()),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CallRecordSource for InMemoryCallRecordStore {
    async fn get_records(&self, campaign_id: Option<&str>) -> Vec<CallRecord> {
        self.simulate_latency().await;

        let timer = StoreTimer::new("get_records");
        let selection = CampaignSelection::from(campaign_id.map(str::to_string));
        let guard = self.records.read().await;
        let records: Vec<CallRecord> = select_campaign_records(&guard, &selection)
            .into_iter()
            .cloned()
            .collect();
        timer.record();

        records
    }

    async fn add_record(
        &self,
        campaign_id: Option<&str>,
        record: CallRecord,
    ) -> Result<(), StoreError> {
        self.simulate_latency().await;

        let timer = StoreTimer::new("add_record");
        let mut guard = self.records.write().await;

        if guard.values().flatten().any(|r| r.id == record.id) {
            timer.record();
            return Err(StoreError::RecordExists(record.id));
        }

        let bucket = bucket_for(campaign_id);
        tracing::debug!(record_id = %record.id, bucket = %bucket, "Storing call record");
        guard.entry(bucket.to_string()).or_default().push(record);

        record_call_record_count(guard.values().map(Vec::len).sum());
        timer.record();
        Ok(())
    }

    async fn count(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }
}
