//! Data models exchanged over HTTP.
//!
//! This module contains the request and response bodies of the lead
//! intake endpoint.

pub mod lead;

pub use lead::{
    ErrorResponse, LeadAcceptedResponse, LeadRequest, ACCEPTED_MESSAGE, INTERNAL_ERROR_MESSAGE,
    METHOD_NOT_ALLOWED_MESSAGE,
};
