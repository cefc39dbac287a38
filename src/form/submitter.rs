//! Delivery of lead form payloads to the intake endpoint.
//!
//! `HttpLeadSubmitter` uses a blocking `ureq` agent; its async
//! [`LeadSubmitter`] implementation runs each request through
//! `tokio::task::spawn_blocking` so the runtime is never blocked.

use crate::error::{SubmitError, SubmitResult};
use crate::models::{ErrorResponse, LeadAcceptedResponse, LeadRequest};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Path of the intake endpoint, relative to the site's base URL.
pub const LEADS_PATH: &str = "/api/leads";

/// Async seam between the lead form and the backend.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Send one payload and return the server's acknowledgement.
    async fn submit(&self, request: &LeadRequest) -> SubmitResult<LeadAcceptedResponse>;
}

/// HTTP client for the lead intake endpoint.
#[derive(Clone)]
pub struct HttpLeadSubmitter {
    /// Base URL of the site serving `/api/leads`
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl HttpLeadSubmitter {
    /// Create a submitter for the site at `base_url` with a 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.into(),
            agent: Arc::new(agent),
        }
    }

    /// Full URL of the intake endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LEADS_PATH)
    }

    /// Post `request` and wait for the response on the current thread.
    pub fn submit_blocking(&self, request: &LeadRequest) -> SubmitResult<LeadAcceptedResponse> {
        let url = self.endpoint();

        match self.agent.post(&url).send_json(request) {
            Ok(response) => response
                .into_json::<LeadAcceptedResponse>()
                .map_err(|e| SubmitError::InvalidResponse(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_json::<ErrorResponse>()
                    .map(|body| body.error)
                    .unwrap_or_else(|_| format!("HTTP {}", status));
                Err(SubmitError::Rejected { status, message })
            }
            Err(e) => Err(SubmitError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl LeadSubmitter for HttpLeadSubmitter {
    async fn submit(&self, request: &LeadRequest) -> SubmitResult<LeadAcceptedResponse> {
        let client = self.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.submit_blocking(&request))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))?
    }
}
