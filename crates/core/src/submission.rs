use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SubmissionConfig;
use crate::error::Error;
use crate::validation::{ValidationResult, check_length, optional_string, require_string};

const TICKET_PREFIX: &str = "VG-";

/// Tracking identifier handed back to a citizen after submission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId(String);

impl TicketId {
  /// Issue a ticket id for the current instant
  pub fn generate() -> Self {
    Self::from_timestamp(Utc::now())
  }

  /// `VG-` followed by the upper-case base-36 millisecond timestamp
  pub fn from_timestamp(at: DateTime<Utc>) -> Self {
    let millis = at.timestamp_millis().max(0) as u64;
    Self(format!("{}{}", TICKET_PREFIX, to_base36(millis)))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

fn to_base36(mut n: u64) -> String {
  const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
  if n == 0 {
    return "0".to_string();
  }
  let mut out = Vec::new();
  while n > 0 {
    out.push(DIGITS[(n % 36) as usize]);
    n /= 36;
  }
  out.reverse();
  String::from_utf8_lossy(&out).into_owned()
}

impl std::fmt::Display for TicketId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl std::str::FromStr for TicketId {
  type Err = Error;

  /// Accepts user-typed ids: surrounding whitespace and case are ignored
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_uppercase();
    match normalized.strip_prefix(TICKET_PREFIX) {
      Some(rest) if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()) => Ok(Self(normalized)),
      _ => Err(Error::InvalidTicket(s.to_string())),
    }
  }
}

impl TryFrom<String> for TicketId {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<TicketId> for String {
  fn from(id: TicketId) -> Self {
    id.0
  }
}

/// A citizen's grievance as entered on the submission form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrievanceSubmission {
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
}

impl GrievanceSubmission {
  pub fn new(description: impl Into<String>) -> Self {
    Self {
      description: description.into(),
      name: None,
      email: None,
      phone: None,
      location: None,
    }
  }

  /// Attach contact details; each is trimmed and blank values become `None`
  pub fn with_contact(
    mut self,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
  ) -> Self {
    self.name = clean_contact(name);
    self.email = clean_contact(email);
    self.phone = clean_contact(phone);
    self.location = clean_contact(location);
    self
  }

  /// Build from raw request parameters and validate against the limits
  pub fn from_params(params: &serde_json::Value, limits: &SubmissionConfig) -> ValidationResult<Self> {
    let submission = Self::new(require_string(params.get("description"), "description")?).with_contact(
      optional_string(params.get("name"), "name")?,
      optional_string(params.get("email"), "email")?,
      optional_string(params.get("phone"), "phone")?,
      optional_string(params.get("location"), "location")?,
    );
    submission.validate(limits)?;
    Ok(submission)
  }

  /// Check the description length against the configured limits
  pub fn validate(&self, limits: &SubmissionConfig) -> ValidationResult<()> {
    check_length(
      self.description.trim(),
      "description",
      limits.min_description_chars,
      limits.max_description_chars,
    )
  }
}

fn clean_contact(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use serde_json::json;

  #[test]
  fn test_ticket_from_timestamp() {
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let id = TicketId::from_timestamp(at);
    // 1_700_000_000_000 in base 36
    assert_eq!(id.as_str(), "VG-LOYW3V28");
  }

  #[test]
  fn test_base36() {
    assert_eq!(to_base36(0), "0");
    assert_eq!(to_base36(35), "Z");
    assert_eq!(to_base36(36), "10");
  }

  #[test]
  fn test_generated_ticket_parses() {
    let id = TicketId::generate();
    let parsed: TicketId = id.as_str().parse().unwrap();
    assert_eq!(parsed, id);
  }

  #[test]
  fn test_ticket_parse_normalizes() {
    let id: TicketId = "  vg-abc123 ".parse().unwrap();
    assert_eq!(id.as_str(), "VG-ABC123");
  }

  #[test]
  fn test_ticket_parse_rejects_garbage() {
    assert!("ABC123".parse::<TicketId>().is_err());
    assert!("VG-".parse::<TicketId>().is_err());
    assert!("VG-AB C".parse::<TicketId>().is_err());
    assert!("".parse::<TicketId>().is_err());
  }

  #[test]
  fn test_ticket_serde() {
    let id: TicketId = "VG-XYZ789".parse().unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"VG-XYZ789\"");
    assert!(serde_json::from_str::<TicketId>("\"nope\"").is_err());
  }

  #[test]
  fn test_submission_length_limits() {
    let limits = SubmissionConfig::default();
    assert!(GrievanceSubmission::new("too short").validate(&limits).is_err());
    assert!(GrievanceSubmission::new("a".repeat(501)).validate(&limits).is_err());
    assert!(
      GrievanceSubmission::new("The street light outside my house is broken")
        .validate(&limits)
        .is_ok()
    );
    // Padding does not count toward the minimum
    let padded = format!("{:^40}", "short");
    assert!(GrievanceSubmission::new(padded).validate(&limits).is_err());
  }

  #[test]
  fn test_submission_from_params() {
    let limits = SubmissionConfig::default();
    let params = json!({
      "description": "Garbage has not been collected on our street for two weeks",
      "name": "Asha",
      "email": "",
    });

    let submission = GrievanceSubmission::from_params(&params, &limits).unwrap();
    assert_eq!(submission.name.as_deref(), Some("Asha"));
    assert_eq!(submission.email, None);

    let err = GrievanceSubmission::from_params(&json!({"name": "x"}), &limits).unwrap_err();
    assert_eq!(err.field, "description");
  }

  #[test]
  fn test_with_contact_drops_blank_fields() {
    let submission = GrievanceSubmission::new("Garbage has not been collected on our street for two weeks")
      .with_contact(
        Some(String::new()),
        Some("   ".to_string()),
        Some(" 98765 43210 ".to_string()),
        None,
      );

    assert_eq!(submission.name, None);
    assert_eq!(submission.email, None);
    assert_eq!(submission.phone.as_deref(), Some("98765 43210"));
    assert_eq!(submission.location, None);
  }

  #[test]
  fn test_with_contact_matches_from_params() {
    let limits = SubmissionConfig::default();
    let description = "Garbage has not been collected on our street for two weeks";
    let params = json!({
      "description": description,
      "name": "",
      "email": " asha@example.com ",
      "location": "  ",
    });

    let from_params = GrievanceSubmission::from_params(&params, &limits).unwrap();
    let built = GrievanceSubmission::new(description).with_contact(
      Some(String::new()),
      Some(" asha@example.com ".to_string()),
      None,
      Some("  ".to_string()),
    );
    assert_eq!(built, from_params);
    assert_eq!(built.email.as_deref(), Some("asha@example.com"));
  }
}
