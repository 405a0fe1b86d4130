//! Campaign selection and record filtering.
//!
//! The selected campaign is plain state owned by the caller and changed only
//! through explicit actions. It decides which records feed the analytics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::CallRecord;

/// Bucket holding records that belong to no campaign.
pub const UNASSIGNED_CAMPAIGN: &str = "all";

/// Call records grouped by campaign id.
pub type CampaignRecords = BTreeMap<String, Vec<CallRecord>>;

/// Currently selected campaign, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSelection {
    campaign_id: Option<String>,
}

impl CampaignSelection {
    /// Selection covering every campaign.
    pub fn none() -> Self {
        Self::default()
    }

    /// Selection of a single campaign.
    pub fn for_campaign(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: Some(campaign_id.into()),
        }
    }

    pub fn select(&mut self, campaign_id: impl Into<String>) {
        self.campaign_id = Some(campaign_id.into());
    }

    pub fn clear(&mut self) {
        self.campaign_id = None;
    }

    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.campaign_id.is_some()
    }
}

impl From<Option<String>> for CampaignSelection {
    fn from(campaign_id: Option<String>) -> Self {
        Self { campaign_id }
    }
}

/// Bucket key for a record's campaign association.
pub fn bucket_for(campaign_id: Option<&str>) -> &str {
    campaign_id.unwrap_or(UNASSIGNED_CAMPAIGN)
}

/// Records that feed the analytics for `selection`.
///
/// - selected and known: that campaign's records
/// - selected but unknown: empty
/// - nothing selected: every bucket in ascending campaign id order, each in
///   insertion order
pub fn select_campaign_records<'a>(
    store: &'a CampaignRecords,
    selection: &CampaignSelection,
) -> Vec<&'a CallRecord> {
    match selection.campaign_id() {
        Some(campaign_id) => store
            .get(campaign_id)
            .map(|records| records.iter().collect())
            .unwrap_or_default(),
        None => store.values().flatten().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CallStatus;

    fn store() -> CampaignRecords {
        let mut store = CampaignRecords::new();
        store.insert(
            "spring".to_string(),
            vec![
                CallRecord::new("s1", CallStatus::Completed, 10),
                CallRecord::new("s2", CallStatus::Failed, 20),
            ],
        );
        store.insert(
            "autumn".to_string(),
            vec![CallRecord::new("a1", CallStatus::Completed, 30)],
        );
        store.insert(
            UNASSIGNED_CAMPAIGN.to_string(),
            vec![CallRecord::new("u1", CallStatus::InProgress, 40)],
        );
        store
    }

    fn ids(records: &[&CallRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_select_known_campaign() {
        let store = store();
        let records = select_campaign_records(&store, &CampaignSelection::for_campaign("spring"));
        assert_eq!(ids(&records), vec!["s1", "s2"]);
    }

    #[test]
    fn test_select_unknown_campaign_is_empty() {
        let store = store();
        let records = select_campaign_records(&store, &CampaignSelection::for_campaign("winter"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_no_selection_concatenates_in_key_order() {
        let store = store();
        let records = select_campaign_records(&store, &CampaignSelection::none());
        assert_eq!(ids(&records), vec!["u1", "a1", "s1", "s2"]);
    }

    #[test]
    fn test_no_selection_on_empty_store() {
        let store = CampaignRecords::new();
        assert!(select_campaign_records(&store, &CampaignSelection::none()).is_empty());
    }

    #[test]
    fn test_selection_actions() {
        let mut selection = CampaignSelection::none();
        assert!(!selection.is_selected());

        selection.select("spring");
        assert_eq!(selection.campaign_id(), Some("spring"));

        selection.select("autumn");
        assert_eq!(selection.campaign_id(), Some("autumn"));

        selection.clear();
        assert_eq!(selection, CampaignSelection::none());
    }

    #[test]
    fn test_selection_from_option() {
        assert_eq!(
            CampaignSelection::from(Some("spring".to_string())),
            CampaignSelection::for_campaign("spring")
        );
        assert_eq!(CampaignSelection::from(None), CampaignSelection::none());
    }

    #[test]
    fn test_bucket_for() {
        assert_eq!(bucket_for(Some("spring")), "spring");
        assert_eq!(bucket_for(None), UNASSIGNED_CAMPAIGN);
    }
}
