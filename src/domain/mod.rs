//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a lead. These
//! value objects sanitize and validate at construction time, so a [`Lead`]
//! can only hold data that passed every intake rule.

pub mod email;
pub mod errors;
pub mod lead;
pub mod name;
pub mod phone;
pub mod sanitize;

pub use email::{matches_email_pattern, EmailAddress};
pub use errors::ValidationError;
pub use lead::{Lead, LeadSubmission};
pub use name::{LeadName, MIN_NAME_CHARS};
pub use phone::{PhoneNumber, PHONE_DIGITS};
pub use sanitize::{digits_only, sanitize, text_len, trim_text};
