//! Daemon commands (run, status)

use crate::format::format_status;
use anyhow::{Context, Result};
use daemon::{Client, Daemon, DaemonSettings};
use ipc::{Method, StatusParams, StatusResult};
use std::path::PathBuf;
use tracing::info;
use vibeguard_core::Config;

/// Socket path from the command line, then config, then the default
pub(crate) fn resolve_socket(config: &Config, socket: Option<PathBuf>) -> PathBuf {
  DaemonSettings::from_config(config.clone(), socket).socket_path
}

/// Run the daemon in the foreground until shutdown or Ctrl-C
pub async fn cmd_daemon(config: Config, socket: Option<PathBuf>) -> Result<()> {
  let settings = DaemonSettings::from_config(config, socket);
  let daemon = Daemon::new(settings);

  info!("Starting VibeGuard daemon on {:?}", daemon.socket_path());
  daemon.run().await.context("Failed to run daemon")?;

  Ok(())
}

/// Query a running daemon
pub async fn cmd_status(config: &Config, socket: Option<PathBuf>, json: bool) -> Result<()> {
  let socket_path = resolve_socket(config, socket);
  let mut client = Client::connect_to(&socket_path)
    .await
    .with_context(|| format!("Daemon is not running at {:?}", socket_path))?;

  let status: StatusResult = client
    .call(Method::Status, StatusParams)
    .await
    .context("Failed to get daemon status")?;

  if json {
    println!("{}", serde_json::to_string_pretty(&status)?);
  } else {
    println!("Socket:      {:?}", socket_path);
    println!("{}", format_status(&status));
  }
  Ok(())
}
