//! Lead notification by email.
//!
//! Notifying an operator is best effort: a relay failure is logged and
//! reported as [`NotificationStatus::Failed`], never as an error, because
//! capturing the lead must not depend on the mail relay.

pub mod message;
pub mod smtp;

pub use message::{CaptureTime, LeadEmail};
pub use smtp::SmtpRelay;

use crate::config::Config;
use crate::domain::Lead;
use crate::error::RelayResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Outbound mail channel for lead notifications.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver one notification email.
    async fn send(&self, email: &LeadEmail) -> RelayResult<()>;
}

/// What happened to the notification side effect of an accepted lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    /// No relay is configured; the lead was only logged.
    Skipped,

    /// The relay accepted the email.
    Sent,

    /// The relay failed with the given message.
    Failed(String),
}

impl NotificationStatus {
    pub fn email_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    pub fn email_error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct Channel {
    relay: Arc<dyn MailRelay>,
    from: String,
    to: String,
}

/// Sends lead notifications when a relay is configured.
#[derive(Clone)]
pub struct LeadNotifier {
    channel: Option<Channel>,
}

impl LeadNotifier {
    /// A notifier that only logs leads.
    pub fn disabled() -> Self {
        Self { channel: None }
    }

    /// A notifier that sends from `from` to `to` through `relay`.
    pub fn new(relay: Arc<dyn MailRelay>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            channel: Some(Channel {
                relay,
                from: from.into(),
                to: to.into(),
            }),
        }
    }

    /// Build the notifier described by the configuration.
    ///
    /// Without SMTP credentials the notifier is disabled. The recipient is
    /// `LEAD_EMAIL`, falling back to the relay account.
    pub fn from_config(config: &Config) -> RelayResult<Self> {
        let Some(smtp) = config.smtp.as_ref() else {
            return Ok(Self::disabled());
        };

        let relay = Arc::new(SmtpRelay::new(smtp)?) as Arc<dyn MailRelay>;
        let to = config.lead_recipient().unwrap_or(smtp.user.as_str()).to_string();

        Ok(Self::new(relay, smtp.user.clone(), to))
    }

    pub fn is_enabled(&self) -> bool {
        self.channel.is_some()
    }

    /// Notify about `lead`, captured at `captured_at`.
    pub async fn notify(&self, lead: &Lead, captured_at: DateTime<Utc>) -> NotificationStatus {
        let Some(channel) = self.channel.as_ref() else {
            tracing::info!(
                name = %lead.name,
                email = %lead.email,
                phone = %lead.phone,
                "No SMTP configured, lead only logged"
            );
            return NotificationStatus::Skipped;
        };

        let email = LeadEmail::compose(lead, captured_at, &channel.from, &channel.to);

        match channel.relay.send(&email).await {
            Ok(()) => {
                tracing::info!(name = %lead.name, email = %lead.email, "Lead received and emailed");
                NotificationStatus::Sent
            }
            Err(e) => {
                tracing::error!(
                    name = %lead.name,
                    email = %lead.email,
                    phone = %lead.phone,
                    error = %e,
                    "Failed to email lead"
                );
                NotificationStatus::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpSettings;
    use crate::domain::LeadSubmission;
    use crate::error::RelayError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<LeadEmail>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn send(&self, email: &LeadEmail) -> RelayResult<()> {
            if let Some(message) = &self.fail_with {
                return Err(RelayError::Transport(message.clone()));
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn sample_lead() -> Lead {
        Lead::try_from(LeadSubmission::new("Maria Silva", "11987654321", "maria@example.com"))
            .unwrap()
    }

    #[tokio::test]
    async fn test_disabled_notifier_skips() {
        let notifier = LeadNotifier::disabled();
        assert!(!notifier.is_enabled());

        let status = notifier.notify(&sample_lead(), Utc::now()).await;
        assert_eq!(status, NotificationStatus::Skipped);
        assert!(!status.email_sent());
        assert_eq!(status.email_error(), None);
    }

    #[tokio::test]
    async fn test_notifier_sends_through_relay() {
        let relay = Arc::new(RecordingRelay::default());
        let notifier = LeadNotifier::new(relay.clone(), "relay@ordemo.com.br", "vendas@ordemo.com.br");

        let status = notifier.notify(&sample_lead(), Utc::now()).await;
        assert_eq!(status, NotificationStatus::Sent);
        assert!(status.email_sent());

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "relay@ordemo.com.br");
        assert_eq!(sent[0].to, "vendas@ordemo.com.br");
    }

    #[tokio::test]
    async fn test_notifier_downgrades_relay_failure() {
        let relay = Arc::new(RecordingRelay {
            fail_with: Some("535 authentication failed".to_string()),
            ..Default::default()
        });
        let notifier = LeadNotifier::new(relay, "relay@ordemo.com.br", "relay@ordemo.com.br");

        let status = notifier.notify(&sample_lead(), Utc::now()).await;
        assert!(!status.email_sent());
        assert_eq!(
            status.email_error(),
            Some("SMTP relay failed: 535 authentication failed")
        );
    }

    #[tokio::test]
    async fn test_from_config() {
        let disabled = LeadNotifier::from_config(&Config::default()).unwrap();
        assert!(!disabled.is_enabled());

        let config = Config {
            smtp: Some(SmtpSettings {
                user: "relay@ordemo.com.br".to_string(),
                pass: "secret".to_string(),
                host: "smtp.example.com".to_string(),
                port: 587,
            }),
            ..Default::default()
        };
        let enabled = LeadNotifier::from_config(&config).unwrap();
        assert!(enabled.is_enabled());
    }
}
