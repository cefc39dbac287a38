//! Ordemo Leads - lead intake for the Ordemo pre-launch landing page.
//!
//! This library validates lead submissions posted by the landing page,
//! notifies the sales inbox by email, and carries the client-side form
//! logic (phone mask, validation, submission) plus the chat widget seam.
//!
//! # Architecture
//!
//! - **domain**: Validated lead types and field sanitization
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **models**: Request and response bodies of the intake endpoint
//! - **notification**: Lead email composition and SMTP delivery
//! - **services**: Lead intake business logic
//! - **server**: HTTP router, handlers and graceful shutdown
//! - **metrics**: Intake counters logged at shutdown
//! - **form**: Lead form state, phone mask and HTTP submitter
//! - **chat**: Live-chat widget abstraction

pub mod chat;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod notification;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use chat::{open_chat, ChatWidget, CrispChat};
pub use config::{Config, SmtpSettings};
pub use domain::{EmailAddress, Lead, LeadName, LeadSubmission, PhoneNumber, ValidationError};
pub use error::{ConfigError, LeadError, RelayError, SubmitError};
pub use form::{format_phone, HttpLeadSubmitter, LeadForm, LeadSubmitter, SubmitOutcome};
pub use metrics::{LeadMetrics, MetricsSummary};
pub use models::{ErrorResponse, LeadAcceptedResponse, LeadRequest};
pub use notification::{LeadEmail, LeadNotifier, MailRelay, NotificationStatus, SmtpRelay};
pub use server::{router, AppState};
pub use services::{LeadAcceptance, LeadService, LeadServiceImpl};
