use serde::{Deserialize, Serialize};

/// Subject domain of a grievance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Infrastructure,
  Health,
  Education,
  Finance,
  Environment,
  Law,
  Social,
  /// Fallback when no keyword matches; never detected directly
  Other,
}

impl Category {
  /// Every category, in declaration order
  pub const ALL: [Category; 8] = [
    Category::Infrastructure,
    Category::Health,
    Category::Education,
    Category::Finance,
    Category::Environment,
    Category::Law,
    Category::Social,
    Category::Other,
  ];

  /// Order in which categories are scored. On equal match counts the
  /// earlier entry wins, so this order is part of the classification contract.
  pub const DETECTION_ORDER: [Category; 7] = [
    Category::Infrastructure,
    Category::Health,
    Category::Education,
    Category::Finance,
    Category::Environment,
    Category::Law,
    Category::Social,
  ];

  /// Department responsible for grievances in this category
  pub fn department(&self) -> &'static str {
    match self {
      Category::Infrastructure => "Public Works & Infrastructure",
      Category::Health => "Health & Medical Services",
      Category::Education => "Education & Youth Affairs",
      Category::Finance => "Finance & Revenue",
      Category::Environment => "Environment & Sustainability",
      Category::Law => "Law & Order",
      Category::Social => "Social Welfare",
      Category::Other => "General Administration",
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Infrastructure => "infrastructure",
      Category::Health => "health",
      Category::Education => "education",
      Category::Finance => "finance",
      Category::Environment => "environment",
      Category::Law => "law",
      Category::Social => "social",
      Category::Other => "other",
    }
  }
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for Category {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    Category::ALL
      .into_iter()
      .find(|c| c.as_str() == wanted)
      .ok_or_else(|| format!("Unknown category: {}", s))
  }
}

/// Discrete urgency band, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
  Low,
  Medium,
  High,
  Critical,
}

impl UrgencyLevel {
  /// Every level, least severe first
  pub const ALL: [UrgencyLevel; 4] = [
    UrgencyLevel::Low,
    UrgencyLevel::Medium,
    UrgencyLevel::High,
    UrgencyLevel::Critical,
  ];

  /// Tiers in the order the urgency scorer consults them
  pub const BY_SEVERITY: [UrgencyLevel; 4] = [
    UrgencyLevel::Critical,
    UrgencyLevel::High,
    UrgencyLevel::Medium,
    UrgencyLevel::Low,
  ];

  /// Band a numeric urgency score: >= 9 critical, >= 7 high, >= 4 medium, else low
  pub fn from_score(score: f64) -> Self {
    if score >= 9.0 {
      UrgencyLevel::Critical
    } else if score >= 7.0 {
      UrgencyLevel::High
    } else if score >= 4.0 {
      UrgencyLevel::Medium
    } else {
      UrgencyLevel::Low
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      UrgencyLevel::Low => "low",
      UrgencyLevel::Medium => "medium",
      UrgencyLevel::High => "high",
      UrgencyLevel::Critical => "critical",
    }
  }
}

impl std::fmt::Display for UrgencyLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for UrgencyLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "low" => Ok(UrgencyLevel::Low),
      "medium" => Ok(UrgencyLevel::Medium),
      "high" => Ok(UrgencyLevel::High),
      "critical" => Ok(UrgencyLevel::Critical),
      _ => Err(format!("Unknown urgency level: {}", s)),
    }
  }
}

/// Coarse emotional polarity of a grievance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
  Negative,
  Neutral,
  Positive,
}

impl Sentiment {
  /// Amount added to the urgency score before re-banding
  pub fn urgency_boost(&self) -> f64 {
    match self {
      Sentiment::Negative => 1.0,
      Sentiment::Neutral | Sentiment::Positive => 0.0,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Sentiment::Negative => "negative",
      Sentiment::Neutral => "neutral",
      Sentiment::Positive => "positive",
    }
  }
}

impl std::fmt::Display for Sentiment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
