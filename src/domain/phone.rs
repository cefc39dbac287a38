//! PhoneNumber value object.

use super::errors::ValidationError;
use super::sanitize::{digits_only, sanitize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

/// Accepted digit counts: fixed-line (10) and mobile (11) numbers with
/// a two-digit area code.
pub const PHONE_DIGITS: RangeInclusive<usize> = 10..=11;

/// A type-safe wrapper for Brazilian phone numbers.
///
/// The sanitized input is kept as typed (it may still contain mask
/// characters such as `(11) 98765-4321`); only the digits are significant
/// for validation.
///
/// # Example
///
/// ```
/// use ordemo_leads::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("(11) 98765-4321").unwrap();
/// assert_eq!(phone.digits(), "11987654321");
/// assert!(PhoneNumber::parse("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Sanitize and validate a raw phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the number has 10 or
    /// 11 digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let phone = sanitize(raw);

        if !Self::has_valid_length(&phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(phone))
    }

    /// Check the digit count of `phone` without building a value.
    pub fn has_valid_length(phone: &str) -> bool {
        PHONE_DIGITS.contains(&digits_only(phone).len())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits(&self) -> String {
        digits_only(&self.0)
    }

    /// Click-to-message WhatsApp link with the Brazilian country code.
    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/55{}", self.digits())
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
