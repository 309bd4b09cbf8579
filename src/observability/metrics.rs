//! Query counters
//!
//! - Counters only, monotonic
//! - Thread-safe, lock-free
//! - Observational: never consulted by the executor

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::QueryErrorCode;

/// Counters shared by any number of executors
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    queries_executed: AtomicU64,
    queries_failed: AtomicU64,
    rows_scanned: AtomicU64,
    rows_matched: AtomicU64,
    rows_returned: AtomicU64,
    panics_contained: AtomicU64,
}

impl QueryMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful query
    pub fn record_success(&self, scanned: usize, matched: usize, returned: usize) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.rows_scanned.fetch_add(scanned as u64, Ordering::Relaxed);
        self.rows_matched.fetch_add(matched as u64, Ordering::Relaxed);
        self.rows_returned.fetch_add(returned as u64, Ordering::Relaxed);
    }

    /// Record a failed query
    pub fn record_failure(&self, code: QueryErrorCode) {
        self.queries_failed.fetch_add(1, Ordering::Relaxed);
        if code == QueryErrorCode::EvaluationPanic {
            self.panics_contained.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn queries_executed(&self) -> u64 {
        self.queries_executed.load(Ordering::Relaxed)
    }

    pub fn queries_failed(&self) -> u64 {
        self.queries_failed.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> QueryMetricsSnapshot {
        QueryMetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_failed: self.queries_failed.load(Ordering::Relaxed),
            rows_scanned: self.rows_scanned.load(Ordering::Relaxed),
            rows_matched: self.rows_matched.load(Ordering::Relaxed),
            rows_returned: self.rows_returned.load(Ordering::Relaxed),
            panics_contained: self.panics_contained.load(Ordering::Relaxed),
        }
    }

    /// Snapshot as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryMetricsSnapshot {
    pub queries_executed: u64,
    pub queries_failed: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub rows_returned: u64,
    pub panics_contained: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        let snapshot = QueryMetrics::new().snapshot();
        assert_eq!(snapshot.queries_executed, 0);
        assert_eq!(snapshot.rows_scanned, 0);
        assert_eq!(snapshot.panics_contained, 0);
    }

    #[test]
    fn test_record_success_and_failure() {
        let metrics = QueryMetrics::new();
        metrics.record_success(10, 5, 2);
        metrics.record_success(3, 3, 3);
        metrics.record_failure(QueryErrorCode::UnknownTable);
        metrics.record_failure(QueryErrorCode::EvaluationPanic);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.queries_executed, 2);
        assert_eq!(snapshot.queries_failed, 2);
        assert_eq!(snapshot.rows_scanned, 13);
        assert_eq!(snapshot.rows_matched, 8);
        assert_eq!(snapshot.rows_returned, 5);
        assert_eq!(snapshot.panics_contained, 1);
    }

    #[test]
    fn test_to_json() {
        let metrics = QueryMetrics::new();
        metrics.record_success(1, 1, 1);
        let parsed: serde_json::Value = serde_json::from_str(&metrics.to_json().unwrap()).unwrap();
        assert_eq!(parsed["queries_executed"], 1);
        assert_eq!(parsed["queries_failed"], 0);
    }

    #[test]
    fn test_concurrent_increments() {
        let metrics = Arc::new(QueryMetrics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.record_success(1, 0, 0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(metrics.queries_executed(), 400);
    }
}
