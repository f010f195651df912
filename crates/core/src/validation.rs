//! Input validation utilities
//!
//! Field-level checks for request parameters arriving as JSON. Lengths are
//! measured in characters so that non-ASCII descriptions get the same limits.

use std::fmt;
use thiserror::Error;

/// A validation error with field information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
  pub field: String,
  pub message: String,
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

impl ValidationError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }

  /// Create error for missing required field
  pub fn missing(field: impl Into<String>) -> Self {
    let field = field.into();
    Self {
      message: format!("{} is required", field),
      field,
    }
  }

  /// Create error for invalid type
  pub fn invalid_type(field: impl Into<String>, expected: &str) -> Self {
    Self {
      field: field.into(),
      message: format!("expected {}", expected),
    }
  }

  /// Create error for too short string
  pub fn too_short(field: impl Into<String>, min_len: usize) -> Self {
    Self {
      field: field.into(),
      message: format!("must be at least {} characters", min_len),
    }
  }

  /// Create error for too long string
  pub fn too_long(field: impl Into<String>, max_len: usize) -> Self {
    Self {
      field: field.into(),
      message: format!("must be at most {} characters", max_len),
    }
  }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check a string's character count against inclusive bounds
pub fn check_length(value: &str, field: &str, min_len: usize, max_len: usize) -> ValidationResult<()> {
  let len = value.chars().count();
  if len < min_len {
    return Err(ValidationError::too_short(field, min_len));
  }
  if len > max_len {
    return Err(ValidationError::too_long(field, max_len));
  }
  Ok(())
}

/// Validate a required string field
pub fn require_string(value: Option<&serde_json::Value>, field: &str) -> ValidationResult<String> {
  match value {
    Some(v) if v.is_null() => Err(ValidationError::missing(field)),
    Some(v) => v
      .as_str()
      .map(String::from)
      .ok_or_else(|| ValidationError::invalid_type(field, "string")),
    None => Err(ValidationError::missing(field)),
  }
}

/// Validate a required string field with length constraints
pub fn require_string_range(
  value: Option<&serde_json::Value>,
  field: &str,
  min_len: usize,
  max_len: usize,
) -> ValidationResult<String> {
  let s = require_string(value, field)?;
  check_length(&s, field, min_len, max_len)?;
  Ok(s)
}

/// Validate an optional string field. Blank strings count as absent.
pub fn optional_string(value: Option<&serde_json::Value>, field: &str) -> ValidationResult<Option<String>> {
  match value {
    Some(v) if v.is_null() => Ok(None),
    Some(v) => v
      .as_str()
      .map(|s| Some(s.trim().to_string()).filter(|s| !s.is_empty()))
      .ok_or_else(|| ValidationError::invalid_type(field, "string")),
    None => Ok(None),
  }
}

/// Validate a required array of strings
pub fn require_string_array(value: Option<&serde_json::Value>, field: &str) -> ValidationResult<Vec<String>> {
  let items = match value {
    Some(v) if v.is_null() => return Err(ValidationError::missing(field)),
    Some(v) => v
      .as_array()
      .ok_or_else(|| ValidationError::invalid_type(field, "array of strings"))?,
    None => return Err(ValidationError::missing(field)),
  };

  items
    .iter()
    .enumerate()
    .map(|(idx, item)| {
      item
        .as_str()
        .map(String::from)
        .ok_or_else(|| ValidationError::invalid_type(format!("{}[{}]", field, idx), "string"))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_require_string() {
    let params = json!({"text": "hello", "n": 3});
    assert_eq!(require_string(params.get("text"), "text").unwrap(), "hello");

    let err = require_string(params.get("missing"), "missing").unwrap_err();
    assert_eq!(err.message, "missing is required");

    let err = require_string(params.get("n"), "n").unwrap_err();
    assert_eq!(err.message, "expected string");
  }

  #[test]
  fn test_require_string_null_is_missing() {
    let params = json!({"text": null});
    let err = require_string(params.get("text"), "text").unwrap_err();
    assert_eq!(err, ValidationError::missing("text"));
  }

  #[test]
  fn test_require_string_range() {
    let params = json!({"d": "abcd"});
    assert!(require_string_range(params.get("d"), "d", 2, 10).is_ok());

    let err = require_string_range(params.get("d"), "d", 5, 10).unwrap_err();
    assert_eq!(err.to_string(), "d: must be at least 5 characters");

    let err = require_string_range(params.get("d"), "d", 1, 3).unwrap_err();
    assert_eq!(err.to_string(), "d: must be at most 3 characters");
  }

  #[test]
  fn test_check_length_counts_chars() {
    // 4 chars, 8 bytes
    assert!(check_length("éééé", "d", 4, 4).is_ok());
  }

  #[test]
  fn test_optional_string() {
    let params = json!({"a": "  x ", "b": "   ", "c": null, "d": 1});
    assert_eq!(optional_string(params.get("a"), "a").unwrap(), Some("x".to_string()));
    assert_eq!(optional_string(params.get("b"), "b").unwrap(), None);
    assert_eq!(optional_string(params.get("c"), "c").unwrap(), None);
    assert_eq!(optional_string(params.get("zz"), "zz").unwrap(), None);
    assert!(optional_string(params.get("d"), "d").is_err());
  }

  #[test]
  fn test_require_string_array() {
    let params = json!({"texts": ["a", "b"], "bad": ["a", 2], "scalar": "a"});
    assert_eq!(
      require_string_array(params.get("texts"), "texts").unwrap(),
      vec!["a".to_string(), "b".to_string()]
    );

    let err = require_string_array(params.get("bad"), "bad").unwrap_err();
    assert_eq!(err.field, "bad[1]");

    let err = require_string_array(params.get("scalar"), "scalar").unwrap_err();
    assert_eq!(err.message, "expected array of strings");

    assert!(require_string_array(params.get("nope"), "nope").is_err());
  }
}
