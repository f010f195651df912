use crate::router::Router;
use crate::server::{Server, ServerError, default_socket_path};
use engine::Categorizer;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use vibeguard_core::Config;

/// Daemon runtime settings
#[derive(Debug, Clone)]
pub struct DaemonSettings {
  /// Socket path for IPC
  pub socket_path: PathBuf,
  pub config: Config,
}

impl DaemonSettings {
  /// Resolve the socket path: explicit override, then config, then the default
  pub fn from_config(config: Config, socket_override: Option<PathBuf>) -> Self {
    let socket_path = socket_override
      .or_else(|| config.daemon.socket_path.clone())
      .unwrap_or_else(default_socket_path);
    Self { socket_path, config }
  }
}

/// Hosts the categorizer behind the Unix socket server
pub struct Daemon {
  settings: DaemonSettings,
  categorizer: Arc<Categorizer>,
}

impl Daemon {
  pub fn new(settings: DaemonSettings) -> Self {
    Self {
      settings,
      categorizer: Arc::new(Categorizer::builtin()),
    }
  }

  pub fn socket_path(&self) -> &PathBuf {
    &self.settings.socket_path
  }

  /// Serve until a `shutdown` request or Ctrl-C
  pub async fn run(self) -> Result<(), ServerError> {
    let router = Arc::new(Router::with_categorizer(
      Arc::clone(&self.categorizer),
      self.settings.config.submission.clone(),
    ));
    let server = Server::with_socket_path(Arc::clone(&router), self.settings.socket_path.clone());
    let shutdown = server.shutdown_handle();
    router.set_shutdown_handle(shutdown.clone()).await;

    info!(
      "Loaded {} keywords, submission limits {}..={} chars",
      self.categorizer.tables().keyword_count(),
      self.settings.config.submission.min_description_chars,
      self.settings.config.submission.max_description_chars
    );

    // Handle ctrl-c gracefully
    tokio::spawn(async move {
      if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
        return;
      }
      info!("Received ctrl-c, shutting down...");
      shutdown.shutdown();
    });

    server.run().await?;
    info!("Daemon stopped after {} requests", router.request_count());
    Ok(())
  }
}
