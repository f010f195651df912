//! Human-readable output for categorization results, receipts and summaries.

use chrono::Local;
use engine::{CategorizationResult, SubmissionReceipt, TriageSummary};
use ipc::StatusResult;
use std::fmt::Write;
use vibeguard_core::{Category, UrgencyLevel};

/// Longest grievance excerpt shown in ranked listings
const EXCERPT_CHARS: usize = 60;

pub fn format_result(result: &CategorizationResult) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Category:    {} ({})", result.department(), result.category());
  let _ = writeln!(out, "Confidence:  {:.0}%", result.confidence() * 100.0);
  let _ = writeln!(
    out,
    "Urgency:     {} ({:.1}/10)",
    result.urgency_level().as_str().to_uppercase(),
    result.urgency_score()
  );
  let _ = writeln!(out, "Sentiment:   {}", result.sentiment());
  if result.keywords().is_empty() {
    let _ = writeln!(out, "Keywords:    (none)");
  } else {
    let _ = writeln!(out, "Keywords:    {}", result.keywords().join(", "));
  }
  let _ = write!(out, "Reasoning:   {}", result.reasoning());
  out
}

pub fn format_receipt(receipt: &SubmissionReceipt) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Grievance submitted");
  let _ = writeln!(out, "Ticket:      {}", receipt.ticket_id);
  let _ = writeln!(
    out,
    "Submitted:   {}",
    receipt.submitted_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
  );
  let _ = writeln!(out);
  out.push_str(&format_result(&receipt.categorization));
  out
}

/// Summary counts followed by the ranked batch, most urgent first
pub fn format_summary(summary: &TriageSummary, ranked: &[(usize, &str, &CategorizationResult)]) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Triage Summary");
  let _ = writeln!(out, "==============\n");
  let _ = writeln!(out, "Grievances:  {}", summary.total);
  let _ = writeln!(out, "Critical:    {}", summary.critical);
  let _ = writeln!(out, "Frustrated:  {}", summary.negative_sentiment);
  let _ = writeln!(out, "Mean score:  {:.1}/10", summary.average_score);

  let _ = writeln!(out, "\n--- By urgency ---");
  for level in UrgencyLevel::BY_SEVERITY {
    let count = summary.level_count(level);
    if count > 0 {
      let _ = writeln!(out, "{:<14}{}", level.as_str().to_uppercase(), count);
    }
  }

  let _ = writeln!(out, "\n--- By category ---");
  for category in Category::ALL {
    let count = summary.category_count(category);
    if count > 0 {
      let _ = writeln!(out, "{:<14}{}", category.as_str(), count);
    }
  }

  if !ranked.is_empty() {
    let _ = writeln!(out, "\n--- Ranked ---");
    for (line, text, result) in ranked {
      let _ = writeln!(
        out,
        "{:>4.1}  {:<8}  {:<14}  #{}  {}",
        result.urgency_score(),
        result.urgency_level().as_str().to_uppercase(),
        result.category().as_str(),
        line,
        excerpt(text)
      );
    }
  }

  out.trim_end().to_string()
}

pub fn format_status(status: &StatusResult) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Status:      {}", status.status);
  let _ = writeln!(out, "Version:     {}", status.version);
  let _ = writeln!(out, "Uptime:      {}", format_duration(status.uptime_seconds));
  let _ = writeln!(out, "Requests:    {}", status.total_requests);
  let _ = write!(out, "Keywords:    {}", status.keyword_count);
  out
}

fn excerpt(text: &str) -> String {
  let text = text.trim();
  if text.chars().count() <= EXCERPT_CHARS {
    return text.to_string();
  }
  let cut: String = text.chars().take(EXCERPT_CHARS - 3).collect();
  format!("{}...", cut.trim_end())
}

/// Format duration in human-readable form
pub fn format_duration(seconds: u64) -> String {
  if seconds < 60 {
    format!("{} seconds", seconds)
  } else if seconds < 3600 {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if secs > 0 {
      format!("{} min {} sec", mins, secs)
    } else {
      format!("{} minutes", mins)
    }
  } else {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    if mins > 0 {
      format!("{} hr {} min", hours, mins)
    } else {
      format!("{} hours", hours)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use engine::categorize;

  #[test]
  fn test_format_result() {
    let result = categorize("There's a large pothole on Main Road causing accidents");
    let text = format_result(&result);

    assert!(text.contains("Category:    Public Works & Infrastructure (infrastructure)"));
    assert!(text.contains("Confidence:  67%"));
    assert!(text.contains("Urgency:     CRITICAL (9.5/10)"));
    assert!(text.contains("Keywords:    road, pothole"));
  }

  #[test]
  fn test_format_result_without_keywords() {
    let text = format_result(&categorize(""));
    assert!(text.contains("Keywords:    (none)"));
    assert!(text.contains("Urgency:     MEDIUM (5.0/10)"));
  }

  #[test]
  fn test_format_summary() {
    let texts = ["Fire in the factory, people are dying", "Need ration card for my elderly mother"];
    let results: Vec<_> = texts.iter().map(|t| categorize(t)).collect();
    let summary = TriageSummary::from_results(&results);
    let ranked: Vec<_> = vec![(1, texts[0], &results[0]), (2, texts[1], &results[1])];

    let text = format_summary(&summary, &ranked);
    assert!(text.contains("Grievances:  2"));
    assert!(text.contains("Critical:    1"));
    assert!(text.contains("#1  Fire in the factory"));
  }

  #[test]
  fn test_excerpt() {
    assert_eq!(excerpt("  short  "), "short");
    let long = "word ".repeat(40);
    let cut = excerpt(&long);
    assert!(cut.ends_with("..."));
    assert!(cut.chars().count() <= EXCERPT_CHARS);
  }

  #[test]
  fn test_format_duration() {
    assert_eq!(format_duration(45), "45 seconds");
    assert_eq!(format_duration(120), "2 minutes");
    assert_eq!(format_duration(3725), "1 hr 2 min");
  }
}
