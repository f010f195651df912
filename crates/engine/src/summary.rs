//! Batch triage over categorization results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vibeguard_core::{Category, Sentiment, UrgencyLevel};

use crate::result::CategorizationResult;

/// Aggregate counts over a batch of categorized grievances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSummary {
  pub total: usize,
  pub critical: usize,
  pub negative_sentiment: usize,
  /// Mean urgency score, 0.0 for an empty batch
  pub average_score: f64,
  pub by_level: BTreeMap<UrgencyLevel, usize>,
  pub by_category: BTreeMap<Category, usize>,
}

impl TriageSummary {
  pub fn from_results(results: &[CategorizationResult]) -> Self {
    let mut summary = Self {
      total: results.len(),
      ..Default::default()
    };

    let mut score_sum = 0.0;
    for result in results {
      *summary.by_level.entry(result.urgency_level()).or_default() += 1;
      *summary.by_category.entry(result.category()).or_default() += 1;
      if result.sentiment() == Sentiment::Negative {
        summary.negative_sentiment += 1;
      }
      score_sum += result.urgency_score();
    }

    summary.critical = summary.level_count(UrgencyLevel::Critical);
    if !results.is_empty() {
      summary.average_score = score_sum / results.len() as f64;
    }
    summary
  }

  pub fn level_count(&self, level: UrgencyLevel) -> usize {
    self.by_level.get(&level).copied().unwrap_or(0)
  }

  pub fn category_count(&self, category: Category) -> usize {
    self.by_category.get(&category).copied().unwrap_or(0)
  }
}

/// Results ordered by descending urgency score; equal scores keep input order
pub fn rank_by_urgency(results: &[CategorizationResult]) -> Vec<&CategorizationResult> {
  urgency_order(results).into_iter().map(|idx| &results[idx]).collect()
}

/// Input positions in the order `rank_by_urgency` would return them
pub fn urgency_order(results: &[CategorizationResult]) -> Vec<usize> {
  let mut order: Vec<usize> = (0..results.len()).collect();
  order.sort_by(|&a, &b| results[b].urgency_score().total_cmp(&results[a].urgency_score()));
  order
}
