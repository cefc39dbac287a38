//! LeadName value object.

use super::errors::ValidationError;
use super::sanitize::{sanitize, text_len};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum length of a sanitized name, in UTF-16 code units.
pub const MIN_NAME_CHARS: usize = 3;

/// A sanitized lead name with at least [`MIN_NAME_CHARS`] characters.
///
/// # Example
///
/// ```
/// use ordemo_leads::domain::LeadName;
///
/// let name = LeadName::parse("  Maria Silva ").unwrap();
/// assert_eq!(name.as_str(), "Maria Silva");
/// assert!(LeadName::parse("<Jo>").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeadName(String);

impl LeadName {
    /// Sanitize and validate a raw name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameTooShort` if fewer than three
    /// characters remain after sanitizing.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = sanitize(raw);

        if text_len(&name) < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Serialize for LeadName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LeadName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LeadName::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LeadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_boundary() {
        assert_eq!(LeadName::parse("Jo"), Err(ValidationError::NameTooShort));
        assert_eq!(LeadName::parse("Ana").unwrap().as_str(), "Ana");
    }

    #[test]
    fn test_name_length_in_utf16_units() {
        // "Zé" is three bytes but two units
        assert!(LeadName::parse("Zé").is_err());
        assert!(LeadName::parse("Zéa").is_ok());
        // Two astral characters are four units
        assert_eq!(LeadName::parse("😀😀").unwrap().as_str(), "😀😀");
    }

    #[test]
    fn test_name_byte_order_mark_is_trimmed() {
        assert_eq!(LeadName::parse("\u{feff}Jo"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_name_measured_after_sanitizing() {
        assert!(LeadName::parse("  Jo  ").is_err());
        assert!(LeadName::parse("<<Jo>>").is_err());
        assert_eq!(LeadName::parse("<b>Bia</b>").unwrap().as_str(), "bBia/b");
    }

    #[test]
    fn test_name_deserialization_validates() {
        let name: LeadName = serde_json::from_str("\" Maria \"").unwrap();
        assert_eq!(name.as_str(), "Maria");

        let result: Result<LeadName, _> = serde_json::from_str("\"Jo\"");
        assert!(result.is_err());
    }
}
