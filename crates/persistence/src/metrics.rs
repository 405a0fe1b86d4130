//! Store metrics collection.
//!
//! Provides functions for recording store-related metrics.

use metrics::{gauge, histogram};
use std::time::Instant;

/// Record the duration of a store operation.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record the current number of stored call records.
pub fn record_call_record_count(count: usize) {
    gauge!("store_call_records").set(count as f64);
}

/// Record the current number of stored campaigns.
pub fn record_campaign_count(count: usize) {
    gauge!("store_campaigns").set(count as f64);
}

/// Times a store operation. Call [`StoreTimer::record`] once it finishes.
///
/// Usage:
/// ```ignore
/// let timer = StoreTimer::new("get_records");
/// let records = guard.get(id).cloned();
/// timer.record();
/// ```
pub struct StoreTimer {
    operation: String,
    start: Instant,
}

impl StoreTimer {
    /// Create a new timer for the given operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(&self.operation, duration);
    }
}
