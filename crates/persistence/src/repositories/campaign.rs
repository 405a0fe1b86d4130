//! Campaign storage.

use async_trait::async_trait;
use domain::models::Campaign;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::metrics::{record_campaign_count, StoreTimer};

/// Store of campaign definitions.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// All campaigns, sorted by id.
    async fn list_campaigns(&self) -> Vec<Campaign>;

    async fn find_campaign(&self, id: &str) -> Option<Campaign>;

    /// Insert a new campaign. Fails if the id is taken.
    async fn create_campaign(&self, campaign: Campaign) -> Result<Campaign, StoreError>;
}

/// In-memory campaign store.
#[derive(Debug, Default)]
pub struct InMemoryCampaignStore {
    campaigns: RwLock<BTreeMap<String, Campaign>>,
    latency: Duration,
}

impl InMemoryCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that delays every operation by `latency`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            campaigns: RwLock::new(BTreeMap::new()),
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
impl CampaignStore for InMemoryCampaignStore {
    async fn list_campaigns(&self) -> Vec<Campaign> {
        self.simulate_latency().await;

        let timer = StoreTimer::new("list_campaigns");
        let campaigns = self.campaigns.read().await.values().cloned().collect();
        timer.record();
        campaigns
    }

    async fn find_campaign(&self, id: &str) -> Option<Campaign> {
        self.simulate_latency().await;

        let timer = StoreTimer::new("find_campaign");
        let campaign = self.campaigns.read().await.get(id).cloned();
        timer.record();
        campaign
    }

    async fn create_campaign(&self, campaign: Campaign) -> Result<Campaign, StoreError> {
        self.simulate_latency().await;

        let timer = StoreTimer::new("create_campaign");
        let mut guard = self.campaigns.write().await;
        if guard.contains_key(&campaign.id) {
            timer.record();
            return Err(StoreError::CampaignExists(campaign.id));
        }

        tracing::debug!(campaign_id = %campaign.id, status = %campaign.status, "Storing campaign");
        guard.insert(campaign.id.clone(), campaign.clone());
        record_campaign_count(guard.len());
        timer.record();
        Ok(campaign)
    }
}
