use async_trait::async_trait;
use ordemo_leads::error::{SubmitError, SubmitResult};
use ordemo_leads::form::LeadSubmitter;
use ordemo_leads::models::{LeadAcceptedResponse, LeadRequest, ACCEPTED_MESSAGE};
use std::sync::{Arc, Mutex};

/// Mock lead submitter for testing.
///
/// Captures payloads and answers with either a canned acceptance or a
/// transport failure.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLeadSubmitter {
    requests: Arc<Mutex<Vec<LeadRequest>>>,
    offline: bool,
}

#[allow(dead_code)]
impl MockLeadSubmitter {
    /// Create a submitter whose requests always succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submitter whose requests always fail to connect.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Payloads received so far.
    pub fn requests(&self) -> Vec<LeadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadSubmitter for MockLeadSubmitter {
    async fn submit(&self, request: &LeadRequest) -> SubmitResult<LeadAcceptedResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if self.offline {
            return Err(SubmitError::Transport("Connection refused".to_string()));
        }

        Ok(LeadAcceptedResponse {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
            email_sent: false,
            email_error: None,
        })
    }
}
