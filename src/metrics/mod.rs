//! Basic metrics instrumentation for the lead pipeline.
//!
//! Provides counters for intake outcomes and notification results.

use crate::notification::NotificationStatus;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for lead intake.
#[derive(Debug, Clone)]
pub struct LeadMetrics {
    /// Submissions that reached the handler
    received_total: Arc<AtomicU64>,

    /// Leads that passed validation
    accepted_total: Arc<AtomicU64>,

    /// Submissions rejected with a validation error
    rejected_total: Arc<AtomicU64>,

    /// Submissions that failed with an internal error
    internal_errors_total: Arc<AtomicU64>,

    /// Notification emails accepted by the relay
    emails_sent_total: Arc<AtomicU64>,

    /// Notification emails the relay failed to deliver
    emails_failed_total: Arc<AtomicU64>,

    /// Accepted leads with no relay configured
    emails_skipped_total: Arc<AtomicU64>,
}

impl Default for LeadMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            received_total: Arc::new(AtomicU64::new(0)),
            accepted_total: Arc::new(AtomicU64::new(0)),
            rejected_total: Arc::new(AtomicU64::new(0)),
            internal_errors_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            emails_failed_total: Arc::new(AtomicU64::new(0)),
            emails_skipped_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_received(&self) {
        self.received_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_internal_error(&self) {
        self.internal_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an accepted lead along with its notification outcome.
    pub fn record_accepted(&self, notification: &NotificationStatus) {
        self.accepted_total.fetch_add(1, Ordering::Relaxed);

        let counter = match notification {
            NotificationStatus::Sent => &self.emails_sent_total,
            NotificationStatus::Failed(_) => &self.emails_failed_total,
            NotificationStatus::Skipped => &self.emails_skipped_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn received_total(&self) -> u64 {
        self.received_total.load(Ordering::Relaxed)
    }

    pub fn accepted_total(&self) -> u64 {
        self.accepted_total.load(Ordering::Relaxed)
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    pub fn internal_errors_total(&self) -> u64 {
        self.internal_errors_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn emails_failed_total(&self) -> u64 {
        self.emails_failed_total.load(Ordering::Relaxed)
    }

    pub fn emails_skipped_total(&self) -> u64 {
        self.emails_skipped_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        for counter in [
            &self.received_total,
            &self.accepted_total,
            &self.rejected_total,
            &self.internal_errors_total,
            &self.emails_sent_total,
            &self.emails_failed_total,
            &self.emails_skipped_total,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            received_total: self.received_total(),
            accepted_total: self.accepted_total(),
            rejected_total: self.rejected_total(),
            internal_errors_total: self.internal_errors_total(),
            emails_sent_total: self.emails_sent_total(),
            emails_failed_total: self.emails_failed_total(),
            emails_skipped_total: self.emails_skipped_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub received_total: u64,
    pub accepted_total: u64,
    pub rejected_total: u64,
    pub internal_errors_total: u64,
    pub emails_sent_total: u64,
    pub emails_failed_total: u64,
    pub emails_skipped_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = LeadMetrics::new();
        assert_eq!(metrics.received_total(), 0);
        assert_eq!(metrics.accepted_total(), 0);
        assert_eq!(metrics.rejected_total(), 0);
    }

    #[test]
    fn test_record_accepted_by_notification() {
        let metrics = LeadMetrics::new();
        metrics.record_accepted(&NotificationStatus::Sent);
        metrics.record_accepted(&NotificationStatus::Skipped);
        metrics.record_accepted(&NotificationStatus::Failed("timeout".to_string()));
        metrics.record_accepted(&NotificationStatus::Sent);

        let summary = metrics.summary();
        assert_eq!(summary.accepted_total, 4);
        assert_eq!(summary.emails_sent_total, 2);
        assert_eq!(summary.emails_failed_total, 1);
        assert_eq!(summary.emails_skipped_total, 1);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LeadMetrics::new();
        metrics.record_received();
        metrics.record_rejected();
        metrics.record_internal_error();

        metrics.reset();

        assert_eq!(metrics.summary(), LeadMetrics::new().summary());
    }

    #[test]
    fn test_metrics_clone_shares_counters() {
        let metrics = LeadMetrics::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        m.record_received();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.received_total(), 100);
    }
}
