//! Storage traits and their in-memory implementations.

pub mod call_record;
pub mod campaign;

pub use call_record::{CallRecordSource, InMemoryCallRecordStore};
pub use campaign::{CampaignStore, InMemoryCampaignStore};
