//! Wire models for the `/api/leads` endpoint.
//!
//! Shared by the HTTP handlers and the lead form's HTTP submitter so both
//! sides agree on field names.

use crate::services::LeadAcceptance;
use serde::{Deserialize, Serialize};

/// Message returned for every accepted lead.
pub const ACCEPTED_MESSAGE: &str = "Lead recebido com sucesso!";

/// Generic message returned for internal failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno ao processar lead";

/// Message returned for unsupported HTTP methods.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Request body sent by the lead form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Body of a 200 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadAcceptedResponse {
    pub success: bool,

    pub message: String,

    /// Whether the notification email went out
    pub email_sent: bool,

    /// Relay failure message, only present when a send was attempted and failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

impl From<&LeadAcceptance> for LeadAcceptedResponse {
    fn from(accepted: &LeadAcceptance) -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
            email_sent: accepted.email_sent(),
            email_error: accepted.email_error().map(str::to_string),
        }
    }
}

/// Body of every non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,

    /// Underlying cause, only for internal errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
