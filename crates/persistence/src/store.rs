//! Store construction.

use std::sync::Arc;
use std::time::Duration;

use crate::error::StoreError;
use crate::repositories::{
    CallRecordSource, CampaignStore, InMemoryCallRecordStore, InMemoryCampaignStore,
};
use crate::seed::seed_demo_data;

/// Store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Load demo campaigns and call records on startup.
    pub seed_demo_data: bool,
    /// Artificial delay applied to every store operation.
    pub simulated_latency_ms: u64,
}

/// Handles to every store, shared by request handlers.
#[derive(Clone)]
pub struct Stores {
    pub call_records: Arc<dyn CallRecordSource>,
    pub campaigns: Arc<dyn CampaignStore>,
}

impl Stores {
    /// Wrap existing store implementations.
    pub fn new(
        call_records: Arc<dyn CallRecordSource>,
        campaigns: Arc<dyn CampaignStore>,
    ) -> Self {
        Self {
            call_records,
            campaigns,
        }
    }
}

/// Creates the in-memory stores, seeding demo data when configured.
pub async fn create_stores(config: &StoreConfig) -> Result<Stores, StoreError> {
    let latency = Duration::from_millis(config.simulated_latency_ms);
    let call_records = Arc::new(InMemoryCallRecordStore::with_latency(latency));
    let campaigns = Arc::new(InMemoryCampaignStore::with_latency(latency));

    if config.seed_demo_data {
        seed_demo_data(campaigns.as_ref(), call_records.as_ref()).await?;
    }

    Ok(Stores::new(call_records, campaigns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_empty_stores() {
        let stores = create_stores(&StoreConfig::default()).await.unwrap();
        assert_eq!(stores.call_records.count().await, 0);
        assert!(stores.campaigns.list_campaigns().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_seeded_stores() {
        let config = StoreConfig {
            seed_demo_data: true,
            simulated_latency_ms: 0,
        };
        let stores = create_stores(&config).await.unwrap();
        assert!(stores.call_records.count().await > 0);
        assert_eq!(stores.campaigns.list_campaigns().await.len(), 3);
    }
}
