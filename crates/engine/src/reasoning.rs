use vibeguard_core::{Category, Sentiment, UrgencyLevel};

/// How many matched keywords the explanation lists
const MAX_LISTED_KEYWORDS: usize = 3;

const FRUSTRATION_NOTE: &str = "Citizen sentiment indicates frustration - prioritize response";

/// Explain a categorization in one line of period-separated clauses
pub fn build_reasoning(
  category: Category,
  keywords: &[String],
  level: UrgencyLevel,
  score: f64,
  sentiment: Sentiment,
) -> String {
  let mut parts = vec![format!("Detected category: {}", category.department())];

  if !keywords.is_empty() {
    let listed: Vec<&str> = keywords.iter().take(MAX_LISTED_KEYWORDS).map(String::as_str).collect();
    parts.push(format!("Key indicators: {}", listed.join(", ")));
  }

  parts.push(format!(
    "Urgency assessment: {} (score: {:.1}/10)",
    level.as_str().to_uppercase(),
    score
  ));

  if sentiment == Sentiment::Negative {
    parts.push(FRUSTRATION_NOTE.to_string());
  }

  format!("{}.", parts.join(". "))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
  }

  #[test]
  fn test_minimal_reasoning() {
    let text = build_reasoning(Category::Other, &[], UrgencyLevel::Medium, 5.0, Sentiment::Neutral);
    assert_eq!(
      text,
      "Detected category: General Administration. Urgency assessment: MEDIUM (score: 5.0/10)."
    );
  }

  #[test]
  fn test_lists_at_most_three_keywords() {
    let text = build_reasoning(
      Category::Health,
      &kw(&["doctor", "medicine", "ambulance", "clinic"]),
      UrgencyLevel::High,
      7.5,
      Sentiment::Positive,
    );
    assert_eq!(
      text,
      "Detected category: Health & Medical Services. Key indicators: doctor, medicine, ambulance. \
       Urgency assessment: HIGH (score: 7.5/10)."
    );
  }

  #[test]
  fn test_negative_sentiment_clause() {
    let text = build_reasoning(
      Category::Law,
      &kw(&["police"]),
      UrgencyLevel::Critical,
      10.0,
      Sentiment::Negative,
    );
    assert_eq!(
      text,
      "Detected category: Law & Order. Key indicators: police. Urgency assessment: CRITICAL (score: 10.0/10). \
       Citizen sentiment indicates frustration - prioritize response."
    );
  }
}
