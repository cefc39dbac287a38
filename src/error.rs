//! Error types for the Ordemo lead service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while taking in a lead.
#[derive(Error, Debug)]
pub enum LeadError {
    /// A field is missing or fails a validation rule
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The request body is not valid JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A field was provided with a non-string JSON value
    #[error("Field '{field}' must be a string, got {found}")]
    UnexpectedType {
        field: &'static str,
        found: &'static str,
    },
}

impl LeadError {
    /// Whether the caller can fix this error by resubmitting.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Errors that can occur when relaying a lead notification email.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Sender or recipient address could not be parsed
    #[error("Invalid mail address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled
    #[error("Failed to build email message: {0}")]
    Message(String),

    /// The SMTP exchange failed (connection, TLS, authentication, rejection)
    #[error("SMTP relay failed: {0}")]
    Transport(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when the lead form submits to the intake endpoint.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    #[error("Lead rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got a response
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Convenience type alias for Results with LeadError
pub type LeadResult<T> = Result<T, LeadError>;

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;
