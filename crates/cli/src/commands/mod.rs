//! CLI command implementations

mod config;
mod daemon;
mod grievance;

pub use config::{cmd_config_init, cmd_config_show};
pub use daemon::{cmd_daemon, cmd_status};
pub use grievance::{cmd_categorize, cmd_submit, cmd_summarize};
