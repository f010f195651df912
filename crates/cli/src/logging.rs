//! Logging setup for CLI commands and the daemon

use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use vibeguard_core::{DaemonConfig, default_data_dir};

const LOG_FILE: &str = "vibeguard.log";

/// Get the log file path
pub fn log_file_path() -> PathBuf {
  default_data_dir().join(LOG_FILE)
}

/// Initialize logging for CLI commands: warnings and up on stderr, so stdout stays parseable
pub fn init_cli_logging() {
  let env_filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::WARN.into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .init();
}

/// Parse log level from config string
fn parse_log_level(level: &str) -> LevelFilter {
  match level.to_lowercase().as_str() {
    "off" => LevelFilter::OFF,
    "error" => LevelFilter::ERROR,
    "warn" => LevelFilter::WARN,
    "info" => LevelFilter::INFO,
    "debug" => LevelFilter::DEBUG,
    "trace" => LevelFilter::TRACE,
    _ => LevelFilter::INFO,
  }
}

/// Initialize logging for the daemon with config-driven settings.
///
/// Logs to the console unless `log_to_file` is set, in which case a rolling
/// file in the data directory is used instead (no ANSI).
///
/// Returns the guard that must be kept alive for the duration of the program
pub fn init_daemon_logging(config: &DaemonConfig) -> Option<WorkerGuard> {
  // RUST_LOG overrides the configured level
  let env_filter = EnvFilter::builder()
    .with_default_directive(parse_log_level(&config.log_level).into())
    .from_env_lossy();

  if !config.log_to_file {
    tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_target(true)
      .with_ansi(true)
      .init();
    return None;
  }

  let log_dir = default_data_dir();
  if std::fs::create_dir_all(&log_dir).is_err() {
    // Fall back to console-only logging
    init_cli_logging();
    return None;
  }

  let file_appender = match config.log_rotation.as_str() {
    "hourly" => tracing_appender::rolling::hourly(&log_dir, LOG_FILE),
    "never" => tracing_appender::rolling::never(&log_dir, LOG_FILE),
    _ => tracing_appender::rolling::daily(&log_dir, LOG_FILE),
  };

  let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(true)
    .with_ansi(false)
    .with_writer(file_writer)
    .init();

  Some(guard)
}
