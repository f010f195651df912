//! Unix socket host for the grievance categorizer.

mod lifecycle;
mod router;
mod server;

pub use lifecycle::{Daemon, DaemonSettings};
pub use router::Router;
pub use server::{Client, MAX_REQUEST_BYTES, Server, ServerError, ShutdownHandle, default_socket_path, is_running};
