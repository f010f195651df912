//! Configuration commands

use anyhow::{Context, Result, bail};
use std::path::Path;
use vibeguard_core::Config;

/// Show the effective configuration and where it came from
pub async fn cmd_config_show(cwd: &Path) -> Result<()> {
  let config = Config::load_for_project(cwd);

  let project_config = Config::project_config_path(cwd);
  let user_config = Config::user_config_path();

  println!("Effective configuration for: {:?}", cwd);
  println!();

  if project_config.exists() {
    println!("Using project config: {:?}", project_config);
  } else if let Some(ref user_path) = user_config
    && user_path.exists()
  {
    println!("Using user config: {:?}", user_path);
  } else {
    println!("Using default configuration (no config file found)");
  }
  println!();

  let toml_str = toml::to_string_pretty(&config).context("Failed to render config")?;
  println!("{}", toml_str);

  Ok(())
}

/// Write a commented project config template
pub async fn cmd_config_init(cwd: &Path, force: bool) -> Result<()> {
  let config_path = Config::project_config_path(cwd);

  if config_path.exists() && !force {
    bail!(
      "Config file already exists: {:?} (use --force to overwrite)",
      config_path
    );
  }

  if let Some(parent) = config_path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
  }

  std::fs::write(&config_path, Config::generate_template())
    .with_context(|| format!("Failed to write {:?}", config_path))?;

  println!("Created project config: {:?}", config_path);
  println!("Edit the file to customize settings.");

  Ok(())
}
