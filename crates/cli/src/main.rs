//! VibeGuard CLI - civic grievance categorization and triage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vibeguard_core::{Config, GrievanceSubmission};

mod commands;
mod format;
mod logging;

use commands::{cmd_categorize, cmd_config_init, cmd_config_show, cmd_daemon, cmd_status, cmd_submit, cmd_summarize};
use logging::{init_cli_logging, init_daemon_logging, log_file_path};

#[derive(Parser)]
#[command(name = "vibeguard")]
#[command(about = "Categorize and triage civic grievances")]
#[command(after_help = "\
QUICK START:
  vibeguard categorize \"Pothole on Main Road\"   # Categorize locally
  vibeguard summarize complaints.txt           # Triage a batch, one per line
  vibeguard daemon                             # Serve categorization over a socket
  vibeguard config init                        # Write a project config")]
struct Cli {
  /// Daemon socket path (default: $XDG_RUNTIME_DIR/vibeguard.sock)
  #[arg(long, global = true, value_name = "PATH")]
  socket: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Categorize a single grievance
  Categorize {
    /// Grievance text (reads stdin when omitted or `-`)
    text: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    /// Ask a running daemon instead of categorizing in-process
    #[arg(long)]
    remote: bool,
  },
  /// Validate and submit a grievance, issuing a ticket id
  Submit {
    /// What happened
    #[arg(short, long)]
    description: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    location: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Triage a file with one grievance per line (`-` for stdin)
  Summarize {
    file: PathBuf,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Run the daemon until a shutdown request or Ctrl-C
  Daemon,
  /// Show the status of a running daemon
  Status {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Configuration management
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
}

/// Subcommands for `vibeguard config`
#[derive(Subcommand)]
enum ConfigCommand {
  /// Show effective configuration
  Show,
  /// Create .vibeguard/config.toml in the current directory
  Init {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
  let config = Config::load_for_project(&cwd);

  // Config-driven logging for the daemon, warnings on stderr for everything else
  let _guard = match &cli.command {
    Commands::Daemon => {
      if config.daemon.log_to_file {
        println!("Logging to {:?}", log_file_path());
      }
      init_daemon_logging(&config.daemon)
    }
    _ => {
      init_cli_logging();
      None
    }
  };

  match cli.command {
    Commands::Categorize { text, json, remote } => cmd_categorize(&config, text, json, remote, cli.socket).await,
    Commands::Submit {
      description,
      name,
      email,
      phone,
      location,
      json,
    } => {
      let submission = GrievanceSubmission::new(description).with_contact(name, email, phone, location);
      cmd_submit(&config, submission, json).await
    }
    Commands::Summarize { file, json } => cmd_summarize(&file, json).await,
    Commands::Daemon => cmd_daemon(config, cli.socket).await,
    Commands::Status { json } => cmd_status(&config, cli.socket, json).await,
    Commands::Config { command } => match command {
      ConfigCommand::Show => cmd_config_show(&cwd).await,
      ConfigCommand::Init { force } => cmd_config_init(&cwd, force).await,
    },
  }
}
