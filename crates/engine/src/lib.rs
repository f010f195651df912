//! Deterministic, rule-based categorization of citizen grievances.
//!
//! One pass over the normalized text feeds three independent stages
//! (category, urgency, sentiment); the categorizer combines them into a
//! [`CategorizationResult`] with an explanation.

pub mod categorizer;
pub mod category;
pub mod normalize;
pub mod reasoning;
pub mod result;
pub mod sentiment;
pub mod summary;
pub mod urgency;

pub use categorizer::{Categorizer, SubmissionReceipt, categorize};
pub use category::{CategoryMatch, confidence_for, detect_category};
pub use normalize::{find_matches, normalize};
pub use reasoning::build_reasoning;
pub use result::{CategorizationResult, MAX_SCORE, MIN_SCORE, ResultError};
pub use sentiment::estimate_sentiment;
pub use summary::{TriageSummary, rank_by_urgency, urgency_order};
pub use urgency::{DEFAULT_SCORE, UrgencyScore, score_urgency, tier_score};
