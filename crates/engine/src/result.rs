use serde::{Deserialize, Serialize};
use thiserror::Error;
use vibeguard_core::{Category, Sentiment, UrgencyLevel};

/// Lowest and highest urgency score a result can carry
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

/// Reasons a serialized result is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResultError {
  #[error("department {found:?} does not belong to category {category}")]
  Department { category: Category, found: String },

  #[error("urgency level {level} does not match score {score}")]
  Level { level: UrgencyLevel, score: f64 },

  #[error("urgency score {0} outside [1, 10]")]
  Score(f64),

  #[error("confidence {0} outside [0, 1]")]
  Confidence(f64),
}

/// Everything the categorizer decided about one grievance text.
///
/// Created only by the categorizer; deserialized copies are checked against
/// the same invariants (department lookup, level banding, value ranges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawResult")]
pub struct CategorizationResult {
  category: Category,
  department: String,
  urgency_score: f64,
  urgency_level: UrgencyLevel,
  confidence: f64,
  keywords: Vec<String>,
  sentiment: Sentiment,
  reasoning: String,
}

impl CategorizationResult {
  pub(crate) fn new(
    category: Category,
    keywords: Vec<String>,
    confidence: f64,
    urgency_score: f64,
    sentiment: Sentiment,
    reasoning: String,
  ) -> Self {
    Self {
      category,
      department: category.department().to_string(),
      urgency_score,
      urgency_level: UrgencyLevel::from_score(urgency_score),
      confidence,
      keywords,
      sentiment,
      reasoning,
    }
  }

  pub fn category(&self) -> Category {
    self.category
  }

  pub fn department(&self) -> &str {
    &self.department
  }

  /// Urgency on a 1 to 10 scale, one decimal place
  pub fn urgency_score(&self) -> f64 {
    self.urgency_score
  }

  pub fn urgency_level(&self) -> UrgencyLevel {
    self.urgency_level
  }

  pub fn confidence(&self) -> f64 {
    self.confidence
  }

  /// Category keywords that matched, in keyword-table order
  pub fn keywords(&self) -> &[String] {
    &self.keywords
  }

  pub fn sentiment(&self) -> Sentiment {
    self.sentiment
  }

  pub fn reasoning(&self) -> &str {
    &self.reasoning
  }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
  category: Category,
  department: String,
  urgency_score: f64,
  urgency_level: UrgencyLevel,
  confidence: f64,
  #[serde(default)]
  keywords: Vec<String>,
  sentiment: Sentiment,
  reasoning: String,
}

impl TryFrom<RawResult> for CategorizationResult {
  type Error = ResultError;

  fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
    if raw.department != raw.category.department() {
      return Err(ResultError::Department {
        category: raw.category,
        found: raw.department,
      });
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&raw.urgency_score) {
      return Err(ResultError::Score(raw.urgency_score));
    }
    if UrgencyLevel::from_score(raw.urgency_score) != raw.urgency_level {
      return Err(ResultError::Level {
        level: raw.urgency_level,
        score: raw.urgency_score,
      });
    }
    if !(0.0..=1.0).contains(&raw.confidence) {
      return Err(ResultError::Confidence(raw.confidence));
    }

    Ok(Self {
      category: raw.category,
      department: raw.department,
      urgency_score: raw.urgency_score,
      urgency_level: raw.urgency_level,
      confidence: raw.confidence,
      keywords: raw.keywords,
      sentiment: raw.sentiment,
      reasoning: raw.reasoning,
    })
  }
}
