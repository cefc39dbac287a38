//! Domain validation errors.
//!
//! Messages are user-facing and written in Brazilian Portuguese, the
//! language of the landing page.

use std::fmt;

/// Errors that can occur while validating a lead submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of name, phone or email was not provided.
    MissingFields,

    /// The name is empty after trimming.
    NameRequired,

    /// The name has fewer than three characters.
    NameTooShort,

    /// The phone contains no digits.
    PhoneRequired,

    /// The phone does not have 10 or 11 digits.
    InvalidPhone,

    /// The email is empty after trimming.
    EmailRequired,

    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
}

impl ValidationError {
    /// The user-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Todos os campos são obrigatórios",
            Self::NameRequired => "Nome é obrigatório",
            Self::NameTooShort => "Nome deve ter pelo menos 3 caracteres",
            Self::PhoneRequired => "Telefone é obrigatório",
            Self::InvalidPhone => "Telefone inválido",
            Self::EmailRequired => "E-mail é obrigatório",
            Self::InvalidEmail => "E-mail inválido",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
