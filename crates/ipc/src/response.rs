use serde::{Deserialize, Serialize};

pub use engine::{CategorizationResult, SubmissionReceipt, TriageSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResult(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub total_requests: u64,
    pub keyword_count: usize,
}

/// `categorize` returns the categorization itself
pub type CategorizeResult = CategorizationResult;

/// `submit` returns the ticket receipt
pub type SubmitResult = SubmissionReceipt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResult {
    pub summary: TriageSummary,
    /// Inputs ordered by descending urgency score
    pub ranked: Vec<CategorizationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownResult(pub String);
