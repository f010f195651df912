use vibeguard_core::{KeywordTables, UrgencyLevel};

use crate::normalize::{matches_in_normalized, normalize};

/// Score used when no urgency keyword matches at all
pub const DEFAULT_SCORE: f64 = 5.0;

/// Bonus per matched keyword within a tier
const BONUS_PER_MATCH: f64 = 0.5;

/// Tier-local urgency score, before any sentiment adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UrgencyScore {
  pub score: f64,
  /// The tier that fired; not necessarily consistent with `score`
  pub level: UrgencyLevel,
}

/// Base score and the cap on the per-match bonus for a tier
fn tier_params(level: UrgencyLevel) -> (f64, f64) {
  match level {
    UrgencyLevel::Critical => (9.0, 1.0),
    UrgencyLevel::High => (7.0, 1.5),
    UrgencyLevel::Medium => (4.0, 2.0),
    UrgencyLevel::Low => (2.0, 1.0),
  }
}

/// Score a tier given how many of its keywords matched
pub fn tier_score(level: UrgencyLevel, match_count: usize) -> f64 {
  let (base, bonus_cap) = tier_params(level);
  base + (BONUS_PER_MATCH * match_count as f64).min(bonus_cap)
}

/// Score text against the urgency tiers, most severe first
pub fn score_urgency(text: &str, tables: &KeywordTables) -> UrgencyScore {
  score_normalized(&normalize(text), tables)
}

pub(crate) fn score_normalized(normalized: &str, tables: &KeywordTables) -> UrgencyScore {
  UrgencyLevel::BY_SEVERITY
    .into_iter()
    .find_map(|level| {
      let matches = matches_in_normalized(normalized, tables.urgency().tier(level)).len();
      (matches > 0).then(|| UrgencyScore {
        score: tier_score(level, matches),
        level,
      })
    })
    .unwrap_or(UrgencyScore {
      score: DEFAULT_SCORE,
      level: UrgencyLevel::Medium,
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn score(text: &str) -> UrgencyScore {
    score_urgency(text, &KeywordTables::builtin())
  }

  #[test]
  fn test_tier_score_caps() {
    assert_eq!(tier_score(UrgencyLevel::Critical, 1), 9.5);
    assert_eq!(tier_score(UrgencyLevel::Critical, 2), 10.0);
    assert_eq!(tier_score(UrgencyLevel::Critical, 5), 10.0);
    assert_eq!(tier_score(UrgencyLevel::High, 1), 7.5);
    assert_eq!(tier_score(UrgencyLevel::High, 3), 8.5);
    assert_eq!(tier_score(UrgencyLevel::High, 9), 8.5);
    assert_eq!(tier_score(UrgencyLevel::Medium, 1), 4.5);
    assert_eq!(tier_score(UrgencyLevel::Medium, 4), 6.0);
    assert_eq!(tier_score(UrgencyLevel::Medium, 6), 6.0);
    assert_eq!(tier_score(UrgencyLevel::Low, 1), 2.5);
    assert_eq!(tier_score(UrgencyLevel::Low, 2), 3.0);
    assert_eq!(tier_score(UrgencyLevel::Low, 4), 3.0);
  }

  #[test]
  fn test_critical_tier() {
    let result = score("Hospital is dying, this is a life threatening emergency");
    assert_eq!(result.level, UrgencyLevel::Critical);
    assert_eq!(result.score, 10.0);
  }

  #[test]
  fn test_accident_inside_accidents() {
    let result = score("There's a large pothole on Main Road causing accidents");
    assert_eq!(result.level, UrgencyLevel::Critical);
    assert_eq!(result.score, 9.5);
  }

  #[test]
  fn test_high_tier() {
    let result = score("The drain is blocked and it is serious");
    assert_eq!(result.level, UrgencyLevel::High);
    assert_eq!(result.score, 8.0);
  }

  #[test]
  fn test_medium_tier() {
    let result = score("There is a delay in my request");
    assert_eq!(result.level, UrgencyLevel::Medium);
    assert_eq!(result.score, 5.0);
  }

  #[test]
  fn test_low_tier() {
    let result = score("A small suggestion for the park");
    assert_eq!(result.level, UrgencyLevel::Low);
    assert_eq!(result.score, 3.0);
  }

  #[test]
  fn test_more_severe_tier_wins() {
    // "fire" is critical, "problem" is medium, "suggestion" is low
    let result = score("suggestion: the fire problem");
    assert_eq!(result.level, UrgencyLevel::Critical);
    assert_eq!(result.score, 9.5);
  }

  #[test]
  fn test_no_match_defaults_to_medium() {
    let result = score("");
    assert_eq!(result.level, UrgencyLevel::Medium);
    assert_eq!(result.score, DEFAULT_SCORE);

    let result = score("hello world");
    assert_eq!(result.level, UrgencyLevel::Medium);
    assert_eq!(result.score, DEFAULT_SCORE);
  }
}
