//! Application service layer.
//!
//! Services contain business logic and orchestrate the domain and the
//! notification channel. They provide a clean boundary between the HTTP
//! handlers and everything behind them.

mod lead_service;

pub use lead_service::{LeadAcceptance, LeadService, LeadServiceImpl};
