//! Common test utilities for daemon integration tests

use daemon::{Router, Server, ShutdownHandle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use vibeguard_core::SubmissionConfig;

/// A server bound to a socket in its own temp directory
#[allow(dead_code)]
pub struct TestServer {
  pub dir: TempDir,
  pub socket_path: PathBuf,
  pub shutdown: ShutdownHandle,
  pub handle: JoinHandle<Result<(), daemon::ServerError>>,
}

/// Start a server with default limits and wait until its socket is bound
#[allow(dead_code)]
pub async fn spawn_server() -> TestServer {
  spawn_server_with(SubmissionConfig::default()).await
}

#[allow(dead_code)]
pub async fn spawn_server_with(limits: SubmissionConfig) -> TestServer {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let socket_path = dir.path().join("daemon.sock");

  let router = Arc::new(Router::with_categorizer(Arc::new(engine::Categorizer::builtin()), limits));
  let server = Server::with_socket_path(Arc::clone(&router), socket_path.clone());
  let shutdown = server.shutdown_handle();
  router.set_shutdown_handle(shutdown.clone()).await;

  let handle = tokio::spawn(async move { server.run().await });

  for _ in 0..100 {
    if socket_path.exists() {
      break;
    }
    tokio::time::sleep(Duration::from_millis(10)).await;
  }
  assert!(socket_path.exists(), "server did not bind {:?}", socket_path);

  TestServer {
    dir,
    socket_path,
    shutdown,
    handle,
  }
}
