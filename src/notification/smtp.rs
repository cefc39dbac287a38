//! SMTP mail relay backed by `lettre`.

use super::message::LeadEmail;
use super::MailRelay;
use crate::config::SmtpSettings;
use crate::error::{RelayError, RelayResult};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Mail relay that authenticates against an SMTP server over STARTTLS.
///
/// Connection, TLS and timeout behavior are those of the `lettre`
/// transport; no retries are attempted.
#[derive(Clone)]
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpRelay {
    /// Create a relay from SMTP settings.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Transport` if the relay host cannot be used for
    /// a TLS connection.
    pub fn new(settings: &SmtpSettings) -> RelayResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.pass.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            host: settings.host.clone(),
            port: settings.port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, email: &LeadEmail) -> RelayResult<()> {
        let message = build_message(email)?;

        tracing::debug!(host = %self.host, port = self.port, to = %email.to, "Sending lead email via SMTP");

        self.transport
            .send(message)
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Turn a composed notification into a MIME message with plain-text and
/// HTML alternatives.
pub fn build_message(email: &LeadEmail) -> RelayResult<Message> {
    Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| RelayError::Message(e.to_string()))
}

fn parse_mailbox(address: &str) -> RelayResult<Mailbox> {
    address
        .parse::<Mailbox>()
        .map_err(|e| RelayError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
