use vibeguard_core::{KeywordTables, Sentiment};

use crate::normalize::{matches_in_normalized, normalize};

/// Estimate polarity from lexicon hit counts. Ties and zero evidence are neutral.
pub fn estimate_sentiment(text: &str, tables: &KeywordTables) -> Sentiment {
  estimate_normalized(&normalize(text), tables)
}

pub(crate) fn estimate_normalized(normalized: &str, tables: &KeywordTables) -> Sentiment {
  let lexicons = tables.sentiment();
  let negative = matches_in_normalized(normalized, &lexicons.negative).len();
  let positive = matches_in_normalized(normalized, &lexicons.positive).len();

  if negative > positive && negative > 0 {
    Sentiment::Negative
  } else if positive > negative && positive > 0 {
    Sentiment::Positive
  } else {
    Sentiment::Neutral
  }
}
