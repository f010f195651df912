use vibeguard_core::{Category, KeywordTables};

use crate::normalize::{matches_in_normalized, normalize};

/// Number of matched keywords at which confidence saturates
const FULL_CONFIDENCE_MATCHES: f64 = 3.0;

/// Best-matching category for a text
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
  pub category: Category,
  /// Matched keywords in keyword-table order
  pub keywords: Vec<String>,
  pub confidence: f64,
}

impl CategoryMatch {
  fn fallback() -> Self {
    Self {
      category: Category::Other,
      keywords: Vec::new(),
      confidence: 0.0,
    }
  }
}

/// Confidence for a number of matched keywords: linear, full at three
pub fn confidence_for(match_count: usize) -> f64 {
  (match_count as f64 / FULL_CONFIDENCE_MATCHES).min(1.0)
}

/// Pick the category whose keyword list matches the most keywords
pub fn detect_category(text: &str, tables: &KeywordTables) -> CategoryMatch {
  detect_normalized(&normalize(text), tables)
}

pub(crate) fn detect_normalized(normalized: &str, tables: &KeywordTables) -> CategoryMatch {
  let mut best: Option<(Category, Vec<&str>)> = None;

  for (category, keywords) in tables.categories() {
    let matches = matches_in_normalized(normalized, keywords);
    let best_count = best.as_ref().map_or(0, |(_, m)| m.len());
    // Strictly greater: on a tie the category seen first keeps the win
    if matches.len() > best_count {
      best = Some((category, matches));
    }
  }

  match best {
    Some((category, matches)) => CategoryMatch {
      category,
      confidence: confidence_for(matches.len()),
      keywords: matches.into_iter().map(String::from).collect(),
    },
    None => CategoryMatch::fallback(),
  }
}
