//! Lead intake service.
//!
//! Validation, sanitization and the best-effort notification of a single
//! lead submission.

use crate::domain::{Lead, LeadSubmission};
use crate::error::LeadResult;
use crate::notification::{LeadNotifier, NotificationStatus};
use async_trait::async_trait;
use chrono::Utc;

/// A lead that passed validation, with the outcome of its notification.
///
/// Acceptance never depends on the notification: a relay failure still
/// yields a `LeadAcceptance`, with [`NotificationStatus::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadAcceptance {
    pub lead: Lead,
    pub notification: NotificationStatus,
}

impl LeadAcceptance {
    pub fn email_sent(&self) -> bool {
        self.notification.email_sent()
    }

    pub fn email_error(&self) -> Option<&str> {
        self.notification.email_error()
    }
}

/// Lead service trait for intake operations.
#[async_trait]
pub trait LeadService: Send + Sync {
    /// Validate a submission and notify about it.
    ///
    /// Only validation and malformed input produce an error.
    async fn submit(&self, submission: LeadSubmission) -> LeadResult<LeadAcceptance>;
}

/// Default implementation of LeadService.
#[derive(Clone)]
pub struct LeadServiceImpl {
    notifier: LeadNotifier,
}

impl LeadServiceImpl {
    /// Create a new lead service.
    pub fn new(notifier: LeadNotifier) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl LeadService for LeadServiceImpl {
    async fn submit(&self, submission: LeadSubmission) -> LeadResult<LeadAcceptance> {
        let lead = Lead::try_from(submission).map_err(|e| {
            tracing::debug!(error = %e, "Lead submission rejected");
            e
        })?;

        let notification = self.notifier.notify(&lead, Utc::now()).await;

        Ok(LeadAcceptance { lead, notification })
    }
}
