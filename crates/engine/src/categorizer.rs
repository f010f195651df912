use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};
use vibeguard_core::{GrievanceSubmission, KeywordTables, TicketId, UrgencyLevel};

use crate::category::detect_normalized;
use crate::normalize::normalize;
use crate::reasoning::build_reasoning;
use crate::result::{CategorizationResult, MAX_SCORE};
use crate::sentiment::estimate_normalized;
use crate::urgency::score_normalized;

static DEFAULT_CATEGORIZER: LazyLock<Categorizer> = LazyLock::new(Categorizer::builtin);

/// Categorize text with the built-in keyword tables
pub fn categorize(text: &str) -> CategorizationResult {
  DEFAULT_CATEGORIZER.categorize(text)
}

/// Stateless grievance categorizer over a shared set of keyword tables.
///
/// Cloning is cheap and every clone reads the same tables, so one instance
/// can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Categorizer {
  tables: Arc<KeywordTables>,
}

impl Categorizer {
  pub fn new(tables: Arc<KeywordTables>) -> Self {
    Self { tables }
  }

  pub fn builtin() -> Self {
    Self::new(Arc::new(KeywordTables::builtin()))
  }

  pub fn tables(&self) -> &Arc<KeywordTables> {
    &self.tables
  }

  /// Run every stage on `text` and combine the outcome
  pub fn categorize(&self, text: &str) -> CategorizationResult {
    // The stages share one normalization; each reads it independently
    let normalized = normalize(text);
    let category = detect_normalized(&normalized, &self.tables);
    let urgency = score_normalized(&normalized, &self.tables);
    let sentiment = estimate_normalized(&normalized, &self.tables);

    trace!(
      category = %category.category,
      matches = category.keywords.len(),
      tier = %urgency.level,
      tier_score = urgency.score,
      sentiment = %sentiment,
      "Stage outputs"
    );

    let adjusted = (urgency.score + sentiment.urgency_boost()).min(MAX_SCORE);
    let score = round_one_decimal(adjusted);
    let level = UrgencyLevel::from_score(score);
    let reasoning = build_reasoning(category.category, &category.keywords, level, score, sentiment);

    let result = CategorizationResult::new(
      category.category,
      category.keywords,
      category.confidence,
      score,
      sentiment,
      reasoning,
    );

    debug!(
      category = %result.category(),
      urgency = %result.urgency_level(),
      score = result.urgency_score(),
      "Categorized grievance"
    );

    result
  }

  /// Categorize a submission that already passed validation and issue a ticket
  pub fn submit(&self, submission: &GrievanceSubmission) -> SubmissionReceipt {
    let submitted_at = Utc::now();
    let receipt = SubmissionReceipt {
      ticket_id: TicketId::from_timestamp(submitted_at),
      submitted_at,
      categorization: self.categorize(&submission.description),
    };
    debug!(ticket = %receipt.ticket_id, "Issued ticket");
    receipt
  }
}

impl Default for Categorizer {
  fn default() -> Self {
    Self::builtin()
  }
}

fn round_one_decimal(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// What a citizen gets back after submitting a grievance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
  pub ticket_id: TicketId,
  pub submitted_at: DateTime<Utc>,
  pub categorization: CategorizationResult,
}
