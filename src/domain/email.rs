//! EmailAddress value object.

use super::errors::ValidationError;
use super::sanitize::sanitize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check `candidate` against the basic `local@domain.tld` shape.
///
/// No trimming or case folding is applied.
pub fn matches_email_pattern(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// A sanitized, lowercased email address.
///
/// Validation is deliberately shallow: one `@`, no whitespace, and a dot
/// somewhere after the `@`.
///
/// # Example
///
/// ```
/// use ordemo_leads::domain::EmailAddress;
///
/// let email = EmailAddress::parse(" Maria@Example.com ").unwrap();
/// assert_eq!(email.as_str(), "maria@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Sanitize, lowercase and validate a raw email address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the result does not match
    /// the basic pattern.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let email = sanitize(raw).to_lowercase();

        if !matches_email_pattern(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
