//! Lead submission and validated lead.

use super::email::EmailAddress;
use super::errors::ValidationError;
use super::name::LeadName;
use super::phone::PhoneNumber;
use crate::error::{LeadError, LeadResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw lead fields as received at the HTTP boundary.
///
/// Any JSON type is accepted here; [`Lead::try_from`] decides what is
/// missing, what is malformed and what is invalid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub phone: Option<Value>,

    #[serde(default)]
    pub email: Option<Value>,
}

impl LeadSubmission {
    /// Build a submission from three text fields.
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            phone: Some(Value::String(phone.into())),
            email: Some(Value::String(email.into())),
        }
    }

    /// Parse a request body.
    ///
    /// An empty body, or JSON that is not an object, yields an empty
    /// submission (every field missing).
    ///
    /// # Errors
    ///
    /// Returns `LeadError::MalformedBody` if the body is not valid JSON.
    pub fn from_body(body: &[u8]) -> LeadResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)?;

        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }
}

/// A validated, sanitized lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: LeadName,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
}

impl TryFrom<LeadSubmission> for Lead {
    type Error = LeadError;

    /// Validate a submission.
    ///
    /// Checks run in a fixed order and the first failure wins: presence of
    /// all fields, then field types, then name, phone and email.
    fn try_from(submission: LeadSubmission) -> Result<Self, Self::Error> {
        let (Some(name), Some(phone), Some(email)) = (
            present(submission.name),
            present(submission.phone),
            present(submission.email),
        ) else {
            return Err(ValidationError::MissingFields.into());
        };

        let name = expect_text("name", name)?;
        let phone = expect_text("phone", phone)?;
        let email = expect_text("email", email)?;

        Ok(Lead {
            name: LeadName::parse(&name)?,
            phone: PhoneNumber::parse(&phone)?,
            email: EmailAddress::parse(&email)?,
        })
    }
}

/// Drop values that count as "not provided": null, false, zero and "".
fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn expect_text(field: &'static str, value: Value) -> LeadResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(LeadError::UnexpectedType {
            field,
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: Value) -> LeadSubmission {
        serde_json::from_value(value).unwrap()
    }

    fn validation_error(result: LeadResult<Lead>) -> ValidationError {
        match result {
            Err(LeadError::Invalid(e)) => e,
            other => panic!("Expected validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_valid_lead_is_sanitized() {
        let lead = Lead::try_from(LeadSubmission::new(
            " Maria Silva ",
            "(11) 98765-4321",
            " Maria@Example.com",
        ))
        .unwrap();

        assert_eq!(lead.name.as_str(), "Maria Silva");
        assert_eq!(lead.phone.digits(), "11987654321");
        assert_eq!(lead.email.as_str(), "maria@example.com");
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let err = validation_error(Lead::try_from(LeadSubmission::new("Jo", "123", "bad")));
        assert_eq!(err, ValidationError::NameTooShort);

        let err = validation_error(Lead::try_from(LeadSubmission::new("Joana", "123", "bad")));
        assert_eq!(err, ValidationError::InvalidPhone);

        let err = validation_error(Lead::try_from(LeadSubmission::new(
            "Joana",
            "1198765432",
            "bad",
        )));
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for value in [json!(null), json!(""), json!(0), json!(false)] {
            let sub = submission(json!({
                "name": "Maria",
                "phone": value,
                "email": "maria@example.com"
            }));
            let err = validation_error(Lead::try_from(sub));
            assert_eq!(err, ValidationError::MissingFields);
        }

        let err = validation_error(Lead::try_from(LeadSubmission::default()));
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn test_missing_check_precedes_type_check() {
        let sub = submission(json!({ "name": 42, "phone": "", "email": "a@b.c" }));
        let err = validation_error(Lead::try_from(sub));
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn test_non_text_value_is_unexpected_type() {
        let sub = submission(json!({
            "name": "Maria",
            "phone": 11987654321u64,
            "email": "maria@example.com"
        }));

        match Lead::try_from(sub) {
            Err(LeadError::UnexpectedType { field, found }) => {
                assert_eq!(field, "phone");
                assert_eq!(found, "number");
            }
            other => panic!("Expected UnexpectedType, got: {:?}", other),
        }
    }

    #[test]
    fn test_type_check_precedes_name_rule() {
        let sub = submission(json!({ "name": "Jo", "phone": ["1"], "email": "bad" }));
        assert!(matches!(
            Lead::try_from(sub),
            Err(LeadError::UnexpectedType { field: "phone", .. })
        ));
    }

    #[test]
    fn test_from_body_shapes() {
        assert_eq!(LeadSubmission::from_body(b"").unwrap(), LeadSubmission::default());
        assert_eq!(LeadSubmission::from_body(b"  \n").unwrap(), LeadSubmission::default());
        assert_eq!(LeadSubmission::from_body(b"[1,2]").unwrap(), LeadSubmission::default());
        assert_eq!(LeadSubmission::from_body(b"null").unwrap(), LeadSubmission::default());

        let sub = LeadSubmission::from_body(br#"{"name":"Ana","extra":true}"#).unwrap();
        assert_eq!(sub.name, Some(json!("Ana")));
        assert_eq!(sub.phone, None);
    }

    #[test]
    fn test_from_body_malformed_json() {
        let result = LeadSubmission::from_body(b"{not json");
        assert!(matches!(result, Err(LeadError::MalformedBody(_))));
    }
}
