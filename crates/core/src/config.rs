//! Configuration for VibeGuard with per-project overrides.
//!
//! Config priority: project-relative (.vibeguard/config.toml) > user (~/.config/vibeguard/config.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// ============================================================================
// Submission Configuration
// ============================================================================

/// Limits applied to citizen submissions before they reach the categorizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
  /// Shortest accepted description in characters (default: 30)
  pub min_description_chars: usize,

  /// Longest accepted description in characters (default: 500)
  pub max_description_chars: usize,

  /// Live analysis only runs once the text is longer than this (default: 30)
  pub preview_threshold_chars: usize,
}

impl Default for SubmissionConfig {
  fn default() -> Self {
    Self {
      min_description_chars: 30,
      max_description_chars: 500,
      preview_threshold_chars: 30,
    }
  }
}

impl SubmissionConfig {
  /// Reject limits that no description could satisfy
  pub fn validate(&self) -> Result<()> {
    if self.min_description_chars > self.max_description_chars {
      return Err(Error::Config(format!(
        "submission.min_description_chars ({}) exceeds submission.max_description_chars ({})",
        self.min_description_chars, self.max_description_chars
      )));
    }
    Ok(())
  }

  /// Whether a draft is long enough to show a live categorization preview
  pub fn should_preview(&self, text: &str) -> bool {
    text.chars().count() > self.preview_threshold_chars
  }
}

// ============================================================================
// Daemon Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
  /// Log level: off, error, warn, info, debug, trace (default: info)
  pub log_level: String,

  /// Log file rotation: daily, hourly, never (default: daily)
  pub log_rotation: String,

  /// Write logs to the data directory instead of the console (default: false)
  pub log_to_file: bool,

  /// Socket path override
  #[serde(skip_serializing_if = "Option::is_none")]
  pub socket_path: Option<PathBuf>,
}

impl Default for DaemonConfig {
  fn default() -> Self {
    Self {
      log_level: "info".to_string(),
      log_rotation: "daily".to_string(),
      log_to_file: false,
      socket_path: None,
    }
  }
}

// ============================================================================
// Main Configuration
// ============================================================================

/// VibeGuard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Submission limits
  #[serde(default)]
  pub submission: SubmissionConfig,

  /// Daemon and logging settings
  #[serde(default)]
  pub daemon: DaemonConfig,
}

impl Config {
  /// Load config for a project, with fallback to user config
  pub fn load_for_project(project_path: &Path) -> Self {
    // Try project-relative first
    let project_config = Self::project_config_path(project_path);
    if project_config.exists()
      && let Ok(config) = Self::load_file(&project_config)
    {
      return config;
    }

    // Fall back to user config
    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(config) = Self::load_file(&user_config_path)
    {
      return config;
    }

    Self::default()
  }

  /// Load and parse a single config file
  pub fn load_file(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    config.submission.validate().map_err(|e| match e {
      Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
      other => other,
    })?;
    Ok(config)
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("VIBEGUARD_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("vibeguard").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("vibeguard").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(".vibeguard").join("config.toml")
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    let defaults = Self::default();
    format!(
      r#"# VibeGuard Configuration
# Place in .vibeguard/config.toml (project) or ~/.config/vibeguard/config.toml (user)

# ============================================================================
# Submissions
# ============================================================================

[submission]
# Descriptions shorter than this are rejected
min_description_chars = {min}

# Descriptions longer than this are rejected
max_description_chars = {max}

# Live categorization preview starts once a draft is longer than this
preview_threshold_chars = {preview}

# ============================================================================
# Daemon
# ============================================================================

[daemon]
# Log level: off, error, warn, info, debug, trace
log_level = "{level}"

# Log rotation when logging to file: daily, hourly, never
log_rotation = "{rotation}"

# Log to the data directory instead of the console
log_to_file = {to_file}

# Socket path (defaults to $XDG_RUNTIME_DIR/vibeguard.sock)
# socket_path = "/run/user/1000/vibeguard.sock"
"#,
      min = defaults.submission.min_description_chars,
      max = defaults.submission.max_description_chars,
      preview = defaults.submission.preview_threshold_chars,
      level = defaults.daemon.log_level,
      rotation = defaults.daemon.log_rotation,
      to_file = defaults.daemon.log_to_file,
    )
  }
}

/// Directory for daemon logs (respects VIBEGUARD_DATA_DIR and XDG_DATA_HOME)
pub fn default_data_dir() -> PathBuf {
  if let Ok(path) = std::env::var("VIBEGUARD_DATA_DIR") {
    return PathBuf::from(path);
  }

  if let Ok(path) = std::env::var("XDG_DATA_HOME") {
    return PathBuf::from(path).join("vibeguard");
  }

  dirs::data_dir()
    .map(|p| p.join("vibeguard"))
    .unwrap_or_else(|| PathBuf::from(".vibeguard"))
}
