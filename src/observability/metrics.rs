//! Metrics registry
//!
//! - Counters only, monotonic except `records_loaded`
//! - Reset only on process start
//! - Relaxed atomics; exactness across threads is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by the serving layer
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    queries_executed: AtomicU64,
    queries_rejected: AtomicU64,
    facet_requests: AtomicU64,
    records_loaded: AtomicU64,
    rows_skipped: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_facet_requests(&self) {
        self.facet_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the outcome of the one-shot ingestion
    pub fn set_ingestion(&self, loaded: u64, skipped: u64) {
        self.records_loaded.store(loaded, Ordering::Relaxed);
        self.rows_skipped.store(skipped, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            facet_requests: self.facet_requests.load(Ordering::Relaxed),
            records_loaded: self.records_loaded.load(Ordering::Relaxed),
            rows_skipped: self.rows_skipped.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub facet_requests: u64,
    pub records_loaded: u64,
    pub rows_skipped: u64,
}
