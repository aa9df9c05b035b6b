//! Validator set - request shape checks that run before any controller
//!
//! Validators only look at the request itself (path parameters and body).
//! They never touch the database: existence and uniqueness are the
//! controllers' job. A validator either returns a fully typed request or a
//! `ValidationError`, which the router turns into a 400.

pub mod bots;
pub mod channels;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::ChannelType;

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("slug pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Parameter {0} is missing")]
    Missing(&'static str),
    #[error("Parameter {0} is invalid")]
    Invalid(&'static str),
    #[error("Parameter type is invalid. Valid options: {valid}")]
    InvalidType { valid: String },
    #[error("Parameter {field} is missing for {channel_type} channels")]
    MissingForType {
        field: &'static str,
        channel_type: ChannelType,
    },
}

pub(crate) fn body_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject)
}

/// String field that must be present and non-empty
pub(crate) fn required_str<'a>(
    body: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    optional_str(body, field)?.ok_or(ValidationError::Missing(field))
}

/// String field where absent, `null` and `""` all mean "not provided"
pub(crate) fn optional_str<'a>(
    body: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ValidationError::Invalid(field)),
    }
}

pub(crate) fn required_bool(body: &Map<String, Value>, field: &'static str) -> Result<bool, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing(field)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationError::Invalid(field)),
    }
}

/// Bot ids are UUIDs; returns the canonical lowercase hyphenated form
pub fn bot_id(raw: &str) -> Result<String, ValidationError> {
    Uuid::parse_str(raw)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| ValidationError::Invalid("bot_id"))
}

/// Slugs are compared exactly as given: no trimming, no case folding
pub fn slug(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    if SLUG_PATTERN.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::Invalid(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bot_id() {
        let id = "3F2504E0-4F89-41D3-9A0C-0305E82C3301";
        assert_eq!(bot_id(id).unwrap(), "3f2504e0-4f89-41d3-9a0c-0305e82c3301");
        assert_eq!(bot_id("not-an-id"), Err(ValidationError::Invalid("bot_id")));
        assert_eq!(bot_id(""), Err(ValidationError::Invalid("bot_id")));
    }

    #[test]
    fn test_slug() {
        assert!(slug("messenger-prod", "slug").is_ok());
        assert!(slug("Kik_2", "slug").is_ok());
        assert!(slug(&"a".repeat(64), "slug").is_ok());

        assert_eq!(slug("", "slug"), Err(ValidationError::Invalid("slug")));
        assert_eq!(slug(" padded", "slug"), Err(ValidationError::Invalid("slug")));
        assert_eq!(slug("with/slash", "channel_slug"), Err(ValidationError::Invalid("channel_slug")));
        assert!(slug(&"a".repeat(65), "slug").is_err());
    }

    #[test]
    fn test_field_helpers() {
        let body = json!({"name": "x", "empty": "", "nothing": null, "num": 3, "flag": false});
        let body = body_object(&body).unwrap();

        assert_eq!(required_str(body, "name"), Ok("x"));
        assert_eq!(required_str(body, "empty"), Err(ValidationError::Missing("empty")));
        assert_eq!(required_str(body, "absent"), Err(ValidationError::Missing("absent")));
        assert_eq!(optional_str(body, "nothing"), Ok(None));
        assert_eq!(optional_str(body, "num"), Err(ValidationError::Invalid("num")));

        assert_eq!(required_bool(body, "flag"), Ok(false));
        assert_eq!(required_bool(body, "name"), Err(ValidationError::Invalid("name")));
        assert_eq!(required_bool(body, "absent"), Err(ValidationError::Missing("absent")));
    }

    #[test]
    fn test_body_must_be_object() {
        assert_eq!(body_object(&json!([1, 2])), Err(ValidationError::NotAnObject));
        assert_eq!(body_object(&json!("slug")), Err(ValidationError::NotAnObject));
    }
}
