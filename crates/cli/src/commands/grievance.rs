//! Grievance commands (categorize, submit, summarize)

use crate::format::{format_receipt, format_result, format_summary};
use anyhow::{Context, Result, bail};
use daemon::Client;
use engine::{CategorizationResult, Categorizer, TriageSummary, urgency_order};
use ipc::{CategorizeParams, Method};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vibeguard_core::{Config, GrievanceSubmission};

/// Categorize one grievance, locally or through a running daemon
pub async fn cmd_categorize(
  config: &Config,
  text: Option<String>,
  json: bool,
  remote: bool,
  socket: Option<PathBuf>,
) -> Result<()> {
  let text = match text {
    Some(text) if text != "-" => text,
    _ => read_stdin().context("Failed to read grievance text from stdin")?,
  };

  if !config.submission.should_preview(&text) {
    eprintln!(
      "Note: text is {} characters or shorter; the result may be unreliable",
      config.submission.preview_threshold_chars
    );
  }

  let result: CategorizationResult = if remote {
    let socket_path = super::daemon::resolve_socket(config, socket);
    debug!("Categorizing via daemon at {:?}", socket_path);
    let mut client = Client::connect_to(&socket_path)
      .await
      .with_context(|| format!("Failed to connect to daemon at {:?}", socket_path))?;
    client
      .call(Method::Categorize, CategorizeParams { text })
      .await
      .context("Daemon failed to categorize")?
  } else {
    Categorizer::builtin().categorize(&text)
  };

  if json {
    print_json(&result)?;
  } else {
    println!("{}", format_result(&result));
  }
  Ok(())
}

/// Validate a submission, categorize it and issue a ticket
pub async fn cmd_submit(config: &Config, submission: GrievanceSubmission, json: bool) -> Result<()> {
  submission
    .validate(&config.submission)
    .context("Submission rejected")?;

  let receipt = Categorizer::builtin().submit(&submission);
  info!(ticket = %receipt.ticket_id, "Submitted grievance");

  if json {
    print_json(&receipt)?;
  } else {
    println!("{}", format_receipt(&receipt));
  }
  Ok(())
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
  summary: TriageSummary,
  ranked: Vec<RankedEntry<'a>>,
}

#[derive(Serialize)]
struct RankedEntry<'a> {
  line: usize,
  text: &'a str,
  result: &'a CategorizationResult,
}

/// Triage a file with one grievance per line (`-` reads stdin)
pub async fn cmd_summarize(file: &Path, json: bool) -> Result<()> {
  let content = if file == Path::new("-") {
    read_stdin().context("Failed to read grievances from stdin")?
  } else {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?
  };

  let entries = grievance_lines(&content);
  if entries.is_empty() {
    bail!("No grievances found in {:?}", file);
  }

  let categorizer = Categorizer::builtin();
  let results: Vec<_> = entries.iter().map(|(_, text)| categorizer.categorize(text)).collect();
  let summary = TriageSummary::from_results(&results);
  let ranked: Vec<_> = urgency_order(&results)
    .into_iter()
    .map(|idx| (entries[idx].0, entries[idx].1, &results[idx]))
    .collect();

  if json {
    let output = SummaryOutput {
      summary,
      ranked: ranked
        .iter()
        .map(|&(line, text, result)| RankedEntry { line, text, result })
        .collect(),
    };
    print_json(&output)?;
  } else {
    println!("{}", format_summary(&summary, &ranked));
  }
  Ok(())
}

/// Non-blank lines with their 1-based line numbers
fn grievance_lines(content: &str) -> Vec<(usize, &str)> {
  content
    .lines()
    .enumerate()
    .map(|(idx, line)| (idx + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty())
    .collect()
}

fn read_stdin() -> Result<String> {
  let mut input = String::new();
  std::io::stdin().read_to_string(&mut input)?;
  Ok(input)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
