use async_trait::async_trait;
use ordemo_leads::error::{RelayError, RelayResult};
use ordemo_leads::notification::{LeadEmail, MailRelay};
use std::sync::{Arc, Mutex};

/// Mock mail relay for testing.
///
/// Records every email it is asked to send and can be switched into a
/// failing mode to exercise the best-effort notification path.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailRelay {
    sent: Arc<Mutex<Vec<LeadEmail>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockMailRelay {
    /// Create a relay that accepts every email.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a relay that fails every send with `message`.
    pub fn failing(message: &str) -> Self {
        let relay = Self::new();
        relay.fail_with(message);
        relay
    }

    /// Make subsequent sends fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Emails accepted so far.
    pub fn sent(&self) -> Vec<LeadEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send attempts, failed ones included.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl MailRelay for MockMailRelay {
    async fn send(&self, email: &LeadEmail) -> RelayResult<()> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(RelayError::Transport(message));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
