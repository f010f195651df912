use crate::server::ShutdownHandle;
use engine::{Categorizer, TriageSummary, rank_by_urgency};
use ipc::{Method, PingResult, Request, Response, ShutdownResult, StatusResult, SummarizeResult, error_codes};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use vibeguard_core::{GrievanceSubmission, SubmissionConfig, ValidationError, require_string, require_string_array};

/// Request router for the daemon
pub struct Router {
  categorizer: Arc<Categorizer>,
  limits: SubmissionConfig,
  shutdown_handle: Arc<Mutex<Option<ShutdownHandle>>>,
  started_at: Instant,
  /// Total requests handled, including failed ones
  request_count: AtomicU64,
}

impl Router {
  pub fn new() -> Self {
    Self::with_categorizer(Arc::new(Categorizer::builtin()), SubmissionConfig::default())
  }

  pub fn with_categorizer(categorizer: Arc<Categorizer>, limits: SubmissionConfig) -> Self {
    Self {
      categorizer,
      limits,
      shutdown_handle: Arc::new(Mutex::new(None)),
      started_at: Instant::now(),
      request_count: AtomicU64::new(0),
    }
  }

  /// Set the shutdown handle (called after server is created)
  pub async fn set_shutdown_handle(&self, handle: ShutdownHandle) {
    let mut guard = self.shutdown_handle.lock().await;
    *guard = Some(handle);
  }

  pub fn categorizer(&self) -> &Arc<Categorizer> {
    &self.categorizer
  }

  pub fn request_count(&self) -> u64 {
    self.request_count.load(Ordering::Relaxed)
  }

  /// Handle an incoming request
  pub async fn handle(&self, request: Request) -> Response {
    debug!("Handling request: {}", request.method);
    self.request_count.fetch_add(1, Ordering::Relaxed);

    match request.method {
      Method::Ping => respond(request.id, PingResult("pong".to_string())),
      Method::Status => self.handle_status(request),
      Method::Shutdown => self.handle_shutdown(request).await,
      Method::Categorize => self.handle_categorize(request),
      Method::Submit => self.handle_submit(request),
      Method::Summarize => self.handle_summarize(request),
    }
  }

  fn handle_status(&self, request: Request) -> Response {
    respond(
      request.id,
      StatusResult {
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: self.started_at.elapsed().as_secs(),
        total_requests: self.request_count(),
        keyword_count: self.categorizer.tables().keyword_count(),
      },
    )
  }

  async fn handle_shutdown(&self, request: Request) -> Response {
    info!("Shutdown requested via RPC");
    let guard = self.shutdown_handle.lock().await;
    if let Some(ref handle) = *guard {
      handle.shutdown();
      respond(request.id, ShutdownResult("shutting down".to_string()))
    } else {
      Response::error(request.id, error_codes::INTERNAL_ERROR, "Shutdown handle not available")
    }
  }

  fn handle_categorize(&self, request: Request) -> Response {
    let text = match require_string(request.params.get("text"), "text") {
      Ok(text) => text,
      Err(e) => return invalid_params(request.id, e),
    };
    respond(request.id, self.categorizer.categorize(&text))
  }

  fn handle_submit(&self, request: Request) -> Response {
    let submission = match GrievanceSubmission::from_params(&request.params, &self.limits) {
      Ok(submission) => submission,
      Err(e) => return invalid_params(request.id, e),
    };
    let receipt = self.categorizer.submit(&submission);
    info!(
      ticket = %receipt.ticket_id,
      category = %receipt.categorization.category(),
      urgency = %receipt.categorization.urgency_level(),
      "Accepted grievance"
    );
    respond(request.id, receipt)
  }

  fn handle_summarize(&self, request: Request) -> Response {
    let texts = match require_string_array(request.params.get("texts"), "texts") {
      Ok(texts) => texts,
      Err(e) => return invalid_params(request.id, e),
    };

    let results: Vec<_> = texts.iter().map(|t| self.categorizer.categorize(t)).collect();
    let summary = TriageSummary::from_results(&results);
    let ranked = rank_by_urgency(&results).into_iter().cloned().collect();
    debug!(total = summary.total, critical = summary.critical, "Summarized batch");

    respond(request.id, SummarizeResult { summary, ranked })
  }
}

impl Default for Router {
  fn default() -> Self {
    Self::new()
  }
}

/// Serialize a typed result into a success response
fn respond<T: Serialize>(id: Option<u64>, result: T) -> Response {
  match serde_json::to_value(result) {
    Ok(value) => Response::success(id, value),
    Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, &format!("Serialization error: {}", e)),
  }
}

fn invalid_params(id: Option<u64>, error: ValidationError) -> Response {
  warn!("Invalid params: {}", error);
  Response::error(id, error_codes::INVALID_PARAMS, &error.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use ipc::{CategorizeParams, PingParams, ShutdownParams, StatusParams};

  fn make_request<P: Serialize>(id: u64, method: Method, params: P) -> Request {
    Request::new(Some(id), method, params).into_untyped().unwrap()
  }

  #[tokio::test]
  async fn test_ping() {
    let router = Router::new();
    let response = router.handle(make_request(1, Method::Ping, PingParams)).await;

    assert_eq!(response.id, Some(1));
    let result: PingResult = response.decode().unwrap();
    assert_eq!(result.0, "pong");
  }

  #[tokio::test]
  async fn test_status_counts_requests() {
    let router = Router::new();
    for _ in 0..3 {
      router.handle(make_request(1, Method::Ping, PingParams)).await;
    }

    let response = router.handle(make_request(2, Method::Status, StatusParams)).await;
    let status: StatusResult = response.decode().unwrap();

    // 3 pings + the status request itself
    assert_eq!(status.total_requests, 4);
    assert_eq!(status.status, "running");
    assert!(!status.version.is_empty());
    assert!(status.keyword_count > 0);
  }

  #[tokio::test]
  async fn test_categorize() {
    let router = Router::new();
    let params = CategorizeParams {
      text: "There's a large pothole on Main Road causing accidents".to_string(),
    };
    let response = router.handle(make_request(3, Method::Categorize, params)).await;

    let json = response.result.unwrap();
    assert_eq!(json["category"], "infrastructure");
    assert_eq!(json["urgencyLevel"], "critical");
    assert_eq!(json["urgencyScore"], 9.5);
  }

  #[tokio::test]
  async fn test_categorize_missing_text() {
    let router = Router::new();
    let request = Request {
      id: Some(4),
      method: Method::Categorize,
      params: serde_json::json!({}),
    };

    let response = router.handle(request).await;
    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("text"));
  }

  #[tokio::test]
  async fn test_shutdown_without_handle() {
    let router = Router::new();
    let response = router.handle(make_request(5, Method::Shutdown, ShutdownParams)).await;
    assert_eq!(response.error.unwrap().code, error_codes::INTERNAL_ERROR);
  }
}
