//! Keyword tables driving grievance classification.
//!
//! The tables are plain data: built once, wrapped in an `Arc`, and shared
//! read-only by every categorizer in the process.

use crate::grievance::{Category, UrgencyLevel};

const INFRASTRUCTURE: &[&str] = &[
  "road",
  "pothole",
  "bridge",
  "electricity",
  "power cut",
  "water supply",
  "drainage",
  "sewage",
  "construction",
  "building",
  "street light",
  "pavement",
  "traffic",
  "signal",
  "highway",
  "metro",
  "public transport",
  "bus stop",
  "footpath",
  "flyover",
  "repair",
  "maintenance",
  "broken",
  "damaged",
];

const HEALTH: &[&str] = &[
  "hospital",
  "doctor",
  "medicine",
  "ambulance",
  "emergency",
  "clinic",
  "disease",
  "epidemic",
  "vaccination",
  "health center",
  "medical",
  "patient",
  "treatment",
  "healthcare",
  "pharmacy",
  "sanitation",
  "hygiene",
  "illness",
  "injury",
  "sick",
  "covid",
  "fever",
  "infection",
];

const EDUCATION: &[&str] = &[
  "school",
  "college",
  "university",
  "teacher",
  "student",
  "education",
  "admission",
  "scholarship",
  "exam",
  "library",
  "tuition",
  "fees",
  "curriculum",
  "classroom",
  "hostel",
  "degree",
  "certificate",
  "training",
];

const FINANCE: &[&str] = &[
  "tax",
  "pension",
  "salary",
  "payment",
  "refund",
  "subsidy",
  "loan",
  "bank",
  "insurance",
  "compensation",
  "dues",
  "arrears",
  "bill",
  "revenue",
  "budget",
  "money",
  "fund",
  "grant",
  "financial",
];

const ENVIRONMENT: &[&str] = &[
  "pollution",
  "garbage",
  "waste",
  "tree",
  "park",
  "green",
  "noise",
  "air quality",
  "water pollution",
  "deforestation",
  "illegal dumping",
  "smoke",
  "factory",
  "chemical",
  "wildlife",
  "climate",
  "plastic",
];

const LAW: &[&str] = &[
  "crime",
  "theft",
  "police",
  "violence",
  "harassment",
  "fraud",
  "scam",
  "illegal",
  "corruption",
  "bribery",
  "safety",
  "security",
  "assault",
  "robbery",
  "threatening",
  "cybercrime",
  "murder",
  "kidnap",
  "extortion",
];

const SOCIAL: &[&str] = &[
  "ration",
  "housing",
  "shelter",
  "poverty",
  "employment",
  "welfare",
  "disability",
  "elderly",
  "child",
  "women",
  "discrimination",
  "rights",
  "community",
  "neighborhood",
  "homeless",
  "orphan",
  "widow",
  "minority",
];

const URGENCY_CRITICAL: &[&str] = &[
  "dying",
  "death",
  "life threatening",
  "emergency",
  "urgent",
  "immediately",
  "collapse",
  "fire",
  "accident",
  "critical",
  "danger",
  "hazard",
  "fatal",
];

const URGENCY_HIGH: &[&str] = &[
  "serious",
  "severe",
  "major",
  "important",
  "asap",
  "quickly",
  "soon",
  "broken",
  "blocked",
  "flooding",
  "outbreak",
  "attack",
  "crime",
];

const URGENCY_MEDIUM: &[&str] = &[
  "problem",
  "issue",
  "concern",
  "complaint",
  "delay",
  "pending",
  "waiting",
  "need",
  "require",
  "request",
];

const URGENCY_LOW: &[&str] = &[
  "suggestion",
  "feedback",
  "improve",
  "consider",
  "maybe",
  "would be nice",
  "minor",
  "small",
  "general",
  "inquiry",
];

const SENTIMENT_NEGATIVE: &[&str] = &[
  "worst",
  "terrible",
  "horrible",
  "awful",
  "disgusting",
  "pathetic",
  "useless",
  "incompetent",
  "failed",
  "never",
  "nothing",
  "frustrated",
  "angry",
  "disappointed",
  "suffering",
  "neglected",
  "ignored",
  "corrupt",
];

const SENTIMENT_POSITIVE: &[&str] = &[
  "good",
  "great",
  "excellent",
  "thank",
  "appreciate",
  "helpful",
  "satisfied",
  "resolved",
  "working",
  "improved",
  "better",
];

fn owned(words: &[&str]) -> Vec<String> {
  words.iter().map(|w| w.to_string()).collect()
}

/// Keywords per urgency tier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrgencyTiers {
  pub critical: Vec<String>,
  pub high: Vec<String>,
  pub medium: Vec<String>,
  pub low: Vec<String>,
}

impl UrgencyTiers {
  pub fn tier(&self, level: UrgencyLevel) -> &[String] {
    match level {
      UrgencyLevel::Critical => &self.critical,
      UrgencyLevel::High => &self.high,
      UrgencyLevel::Medium => &self.medium,
      UrgencyLevel::Low => &self.low,
    }
  }
}

/// Negative and positive sentiment word lists. Neutral has no lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentLexicons {
  pub negative: Vec<String>,
  pub positive: Vec<String>,
}

/// All keyword data the categorizer consults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTables {
  /// Indexed in `Category::DETECTION_ORDER`
  categories: Vec<Vec<String>>,
  urgency: UrgencyTiers,
  sentiment: SentimentLexicons,
}

impl KeywordTables {
  /// Build tables from explicit parts. `category_keywords` returns the
  /// keyword list for each detectable category; `other` is never asked for.
  pub fn new(
    mut category_keywords: impl FnMut(Category) -> Vec<String>,
    urgency: UrgencyTiers,
    sentiment: SentimentLexicons,
  ) -> Self {
    let categories = Category::DETECTION_ORDER
      .iter()
      .map(|c| category_keywords(*c).into_iter().map(|k| k.to_lowercase()).collect())
      .collect();

    Self {
      categories,
      urgency,
      sentiment,
    }
  }

  /// The built-in grievance vocabulary
  pub fn builtin() -> Self {
    let urgency = UrgencyTiers {
      critical: owned(URGENCY_CRITICAL),
      high: owned(URGENCY_HIGH),
      medium: owned(URGENCY_MEDIUM),
      low: owned(URGENCY_LOW),
    };
    let sentiment = SentimentLexicons {
      negative: owned(SENTIMENT_NEGATIVE),
      positive: owned(SENTIMENT_POSITIVE),
    };

    Self::new(
      |category| match category {
        Category::Infrastructure => owned(INFRASTRUCTURE),
        Category::Health => owned(HEALTH),
        Category::Education => owned(EDUCATION),
        Category::Finance => owned(FINANCE),
        Category::Environment => owned(ENVIRONMENT),
        Category::Law => owned(LAW),
        Category::Social => owned(SOCIAL),
        Category::Other => Vec::new(),
      },
      urgency,
      sentiment,
    )
  }

  /// Keywords for a category, in table order. Empty for `other`.
  pub fn category_keywords(&self, category: Category) -> &[String] {
    Category::DETECTION_ORDER
      .iter()
      .position(|c| *c == category)
      .and_then(|idx| self.categories.get(idx))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// Detectable categories with their keywords, in detection order
  pub fn categories(&self) -> impl Iterator<Item = (Category, &[String])> {
    Category::DETECTION_ORDER
      .iter()
      .copied()
      .zip(self.categories.iter().map(Vec::as_slice))
  }

  pub fn urgency(&self) -> &UrgencyTiers {
    &self.urgency
  }

  pub fn sentiment(&self) -> &SentimentLexicons {
    &self.sentiment
  }

  /// Total number of keywords across all tables
  pub fn keyword_count(&self) -> usize {
    let categories: usize = self.categories.iter().map(Vec::len).sum();
    let urgency: usize = UrgencyLevel::ALL.iter().map(|l| self.urgency.tier(*l).len()).sum();
    categories + urgency + self.sentiment.negative.len() + self.sentiment.positive.len()
  }
}

impl Default for KeywordTables {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_other_has_no_keywords() {
    let tables = KeywordTables::builtin();
    assert!(tables.category_keywords(Category::Other).is_empty());
  }

  #[test]
  fn test_categories_follow_detection_order() {
    let tables = KeywordTables::builtin();
    let order: Vec<Category> = tables.categories().map(|(c, _)| c).collect();
    assert_eq!(order, Category::DETECTION_ORDER.to_vec());
  }

  #[test]
  fn test_keyword_order_is_preserved() {
    let tables = KeywordTables::builtin();
    let infra = tables.category_keywords(Category::Infrastructure);
    assert_eq!(infra[0], "road");
    assert_eq!(infra[1], "pothole");
    assert_eq!(infra.len(), 24);
  }

  #[test]
  fn test_builtin_sizes() {
    let tables = KeywordTables::builtin();
    assert_eq!(tables.category_keywords(Category::Health).len(), 23);
    assert_eq!(tables.category_keywords(Category::Education).len(), 18);
    assert_eq!(tables.category_keywords(Category::Finance).len(), 19);
    assert_eq!(tables.category_keywords(Category::Environment).len(), 17);
    assert_eq!(tables.category_keywords(Category::Law).len(), 19);
    assert_eq!(tables.category_keywords(Category::Social).len(), 18);
    assert_eq!(tables.urgency().tier(UrgencyLevel::Critical).len(), 13);
    assert_eq!(tables.urgency().tier(UrgencyLevel::High).len(), 13);
    assert_eq!(tables.urgency().tier(UrgencyLevel::Medium).len(), 10);
    assert_eq!(tables.urgency().tier(UrgencyLevel::Low).len(), 10);
    assert_eq!(tables.sentiment().negative.len(), 18);
    assert_eq!(tables.sentiment().positive.len(), 11);
  }

  #[test]
  fn test_custom_tables_lowercase_category_keywords() {
    let tables = KeywordTables::new(
      |c| match c {
        Category::Health => vec!["Hospital".to_string()],
        _ => Vec::new(),
      },
      UrgencyTiers::default(),
      SentimentLexicons::default(),
    );
    assert_eq!(tables.category_keywords(Category::Health), ["hospital".to_string()]);
    assert_eq!(tables.keyword_count(), 1);
  }
}
