//! Lead form logic behind the landing page's signup modal.
//!
//! [`LeadForm`] owns the field values, per-field errors and the
//! submitting/success flags. Validation reports every failing field at
//! once, and a submission that passes local validation always ends in the
//! success state, whether or not the backend could be reached.

pub mod phone_mask;
pub mod submitter;

pub use phone_mask::{format_phone, MAX_PHONE_DIGITS};
pub use submitter::{HttpLeadSubmitter, LeadSubmitter, LEADS_PATH};

use crate::domain::{
    digits_only, matches_email_pattern, text_len, trim_text, ValidationError, MIN_NAME_CHARS,
    PHONE_DIGITS,
};
use crate::error::SubmitResult;
use crate::models::{LeadAcceptedResponse, LeadRequest};

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

/// Pending validation errors, one slot per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub phone: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Email => self.email,
        }
    }

    /// Text shown under `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(form_message)
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Phone => self.phone = None,
            Field::Email => self.email = None,
        }
    }
}

/// Form wording for a validation error.
///
/// The form spells out the accepted phone lengths; everything else reads
/// the same as the server's messages.
pub fn form_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::InvalidPhone => "Telefone inválido (10 ou 11 dígitos)",
        other => other.message(),
    }
}

/// Validate raw field values as the form holds them.
pub fn validate_fields(name: &str, phone: &str, email: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = trim_text(name);
    if name.is_empty() {
        errors.name = Some(ValidationError::NameRequired);
    } else if text_len(name) < MIN_NAME_CHARS {
        errors.name = Some(ValidationError::NameTooShort);
    }

    let phone_digits = digits_only(phone);
    if phone_digits.is_empty() {
        errors.phone = Some(ValidationError::PhoneRequired);
    } else if !PHONE_DIGITS.contains(&phone_digits.len()) {
        errors.phone = Some(ValidationError::InvalidPhone);
    }

    if trim_text(email).is_empty() {
        errors.email = Some(ValidationError::EmailRequired);
    } else if !matches_email_pattern(email) {
        errors.email = Some(ValidationError::InvalidEmail);
    }

    errors
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,

    /// A previous submission is still in flight; nothing was sent.
    Busy,

    /// The server acknowledged the lead.
    Delivered(LeadAcceptedResponse),

    /// The request failed; the user still sees the success state.
    DeliveryFailed(String),
}

impl SubmitOutcome {
    /// Whether the form switched to its "thank you" state.
    pub fn shows_success(&self) -> bool {
        matches!(self, Self::Delivered(_) | Self::DeliveryFailed(_))
    }
}

/// Clears the submitting flag when dropped.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// State of the lead signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    name: String,
    phone: String,
    email: String,
    errors: FieldErrors,
    submitting: bool,
    success: bool,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone as displayed, already masked.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// While true the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.clear(Field::Name);
    }

    /// Store the phone input through the live mask.
    pub fn set_phone(&mut self, value: &str) {
        self.phone = format_phone(value);
        self.errors.clear(Field::Phone);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.clear(Field::Email);
    }

    /// Run local validation, replacing the pending errors.
    ///
    /// Returns true when every field is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_fields(&self.name, &self.phone, &self.email);
        self.errors.is_empty()
    }

    /// Request body for the current values.
    pub fn payload(&self) -> LeadRequest {
        LeadRequest {
            name: trim_text(&self.name).to_string(),
            phone: digits_only(&self.phone),
            email: trim_text(&self.email).to_lowercase(),
        }
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns the payload to send, or `Busy`/`Invalid` when nothing should
    /// be sent. Pair with [`finish_submit`](Self::finish_submit) when the
    /// request is driven outside [`submit`](Self::submit).
    pub fn begin_submit(&mut self) -> Result<LeadRequest, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }

        if !self.validate() {
            return Err(SubmitOutcome::Invalid);
        }

        self.submitting = true;
        Ok(self.payload())
    }

    /// Record the result of a request started with
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Both a delivered and a failed request leave the form in the success
    /// state; the outcome tells them apart.
    pub fn finish_submit(&mut self, result: SubmitResult<LeadAcceptedResponse>) -> SubmitOutcome {
        self.submitting = false;
        self.success = true;

        match result {
            Ok(receipt) => SubmitOutcome::Delivered(receipt),
            Err(e) => {
                tracing::warn!(error = %e, "Lead submission failed, showing success anyway");
                SubmitOutcome::DeliveryFailed(e.to_string())
            }
        }
    }

    /// Validate and, if valid, send the lead through `submitter`.
    ///
    /// Dropping the returned future mid-request clears the submitting flag,
    /// so a later submit sends again.
    pub async fn submit(&mut self, submitter: &dyn LeadSubmitter) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let result = {
            let _in_flight = InFlight(&mut self.submitting);
            submitter.submit(&payload).await
        };

        self.finish_submit(result)
    }

    /// Clear everything, as when the modal is closed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_all_errors() {
        let errors = validate_fields("", "", "");
        assert_eq!(errors.name, Some(ValidationError::NameRequired));
        assert_eq!(errors.phone, Some(ValidationError::PhoneRequired));
        assert_eq!(errors.email, Some(ValidationError::EmailRequired));

        let errors = validate_fields(" Jo ", "(11) 9876", "maria@");
        assert_eq!(errors.message(Field::Name), Some("Nome deve ter pelo menos 3 caracteres"));
        assert_eq!(errors.message(Field::Phone), Some("Telefone inválido (10 ou 11 dígitos)"));
        assert_eq!(errors.message(Field::Email), Some("E-mail inválido"));
    }

    #[test]
    fn test_validate_accepts_valid_fields() {
        assert!(validate_fields("Maria Silva", "(11) 98765-4321", "maria@example.com").is_empty());
        assert!(validate_fields("Ana", "(11) 3456-7890", "Ana@Example.com").is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let errors = validate_fields("   ", "()- ", "  ");
        assert_eq!(errors.name, Some(ValidationError::NameRequired));
        assert_eq!(errors.phone, Some(ValidationError::PhoneRequired));
        assert_eq!(errors.email, Some(ValidationError::EmailRequired));
    }

    #[test]
    fn test_email_checked_as_typed() {
        let errors = validate_fields("Maria", "11987654321", " maria@example.com");
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = LeadForm::new();
        assert!(!form.validate());
        assert!(form.errors().name.is_some());

        form.set_name("Maria");
        assert!(form.errors().name.is_none());
        assert!(form.errors().phone.is_some());
        assert!(form.errors().email.is_some());
    }

    #[test]
    fn test_set_phone_applies_mask() {
        let mut form = LeadForm::new();
        form.set_phone("11987654321");
        assert_eq!(form.phone(), "(11) 98765-4321");
    }

    #[test]
    fn test_payload_normalizes_fields() {
        let mut form = LeadForm::new();
        form.set_name("  Maria Silva ");
        form.set_phone("(11) 98765-4321");
        form.set_email(" Maria@Example.COM ");

        assert_eq!(
            form.payload(),
            LeadRequest {
                name: "Maria Silva".to_string(),
                phone: "11987654321".to_string(),
                email: "maria@example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_reset_clears_state() {
        let mut form = LeadForm::new();
        form.set_name("Jo");
        form.validate();

        form.reset();
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn test_name_length_matches_browser_rules() {
        assert!(validate_fields("😀😀", "11987654321", "maria@example.com").is_empty());

        let errors = validate_fields("\u{feff}Jo", "11987654321", "maria@example.com");
        assert_eq!(errors.name, Some(ValidationError::NameTooShort));

        let errors = validate_fields("\u{feff}", "11987654321", "\u{feff}");
        assert_eq!(errors.name, Some(ValidationError::NameRequired));
        assert_eq!(errors.email, Some(ValidationError::EmailRequired));
    }

    #[test]
    fn test_begin_submit_twice_is_busy() {
        let mut form = LeadForm::new();
        form.set_name("Maria Silva");
        form.set_phone("11987654321");
        form.set_email("maria@example.com");

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.phone, "11987654321");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Busy));

        let outcome = form.finish_submit(Err(crate::error::SubmitError::Transport("offline".to_string())));
        assert!(outcome.shows_success());
        assert!(!form.is_submitting());
        assert!(form.is_success());
    }

    #[test]
    fn test_begin_submit_rejects_invalid_form() {
        let mut form = LeadForm::new();
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Invalid));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_outcome_shows_success() {
        assert!(!SubmitOutcome::Invalid.shows_success());
        assert!(!SubmitOutcome::Busy.shows_success());
        assert!(SubmitOutcome::DeliveryFailed("offline".to_string()).shows_success());
    }
}
