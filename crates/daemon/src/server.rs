use crate::router::Router;
use ipc::{IpcError, Method, Request, Response, error_codes};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum ServerError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("IPC error: {0}")]
  Ipc(#[from] IpcError),
  #[error("Daemon closed the connection")]
  Closed,
  #[error("Daemon already running on {0:?}")]
  AlreadyRunning(PathBuf),
}

/// Longest request line the server accepts, newline included
pub const MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Check if a daemon is already listening on the socket
pub fn is_running(socket_path: &Path) -> bool {
  std::os::unix::net::UnixStream::connect(socket_path).is_ok()
}

/// Get the default socket path
pub fn default_socket_path() -> PathBuf {
  if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR")
    && !runtime_dir.is_empty()
  {
    PathBuf::from(runtime_dir).join("vibeguard.sock")
  } else {
    let uid = unsafe { libc::getuid() };
    PathBuf::from(format!("/tmp/vibeguard-{}.sock", uid))
  }
}

/// Unix socket server for the daemon
pub struct Server {
  socket_path: PathBuf,
  router: Arc<Router>,
  shutdown_tx: broadcast::Sender<()>,
}

impl Server {
  pub fn new(router: Router) -> Self {
    Self::with_socket_path(Arc::new(router), default_socket_path())
  }

  pub fn with_socket_path(router: Arc<Router>, socket_path: PathBuf) -> Self {
    let (shutdown_tx, _) = broadcast::channel(1);
    Self {
      socket_path,
      router,
      shutdown_tx,
    }
  }

  /// Get a shutdown handle to signal server shutdown
  pub fn shutdown_handle(&self) -> ShutdownHandle {
    ShutdownHandle {
      tx: self.shutdown_tx.clone(),
    }
  }

  pub fn socket_path(&self) -> &Path {
    &self.socket_path
  }

  /// Accept connections until a shutdown is signalled
  pub async fn run(&self) -> Result<(), ServerError> {
    if self.socket_path.exists() {
      if is_running(&self.socket_path) {
        return Err(ServerError::AlreadyRunning(self.socket_path.clone()));
      }
      // Nobody is listening: stale socket file
      std::fs::remove_file(&self.socket_path)?;
    }

    if let Some(parent) = self.socket_path.parent() {
      std::fs::create_dir_all(parent)?;
    }

    let listener = UnixListener::bind(&self.socket_path)?;
    info!("Daemon listening on {:?}", self.socket_path);

    let mut shutdown_rx = self.shutdown_tx.subscribe();

    loop {
      tokio::select! {
        result = listener.accept() => {
          match result {
            Ok((stream, _)) => {
              let router = Arc::clone(&self.router);
              tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, router).await {
                  error!("Connection error: {}", e);
                }
              });
            }
            Err(e) => {
              error!("Accept error: {}", e);
            }
          }
        }
        _ = shutdown_rx.recv() => {
          info!("Shutdown signal received");
          break;
        }
      }
    }

    if self.socket_path.exists() {
      std::fs::remove_file(&self.socket_path)?;
    }

    Ok(())
  }
}

/// Handle to signal server shutdown
#[derive(Clone)]
pub struct ShutdownHandle {
  tx: broadcast::Sender<()>,
}

impl ShutdownHandle {
  pub fn shutdown(&self) {
    let _ = self.tx.send(());
  }
}

/// Serve one client: one request per line, one response per line
async fn handle_connection(stream: UnixStream, router: Arc<Router>) -> Result<(), ServerError> {
  let (reader, mut writer) = stream.into_split();
  let mut reader = BufReader::new(reader);
  let mut line = Vec::new();

  loop {
    line.clear();
    let n = (&mut reader)
      .take(MAX_REQUEST_BYTES as u64)
      .read_until(b'\n', &mut line)
      .await?;

    if n == 0 {
      debug!("Client disconnected");
      break;
    }

    // The rest of an over-long line cannot be resynchronized, so the connection ends here
    let oversized = n == MAX_REQUEST_BYTES && line.last() != Some(&b'\n');
    let response = if oversized {
      warn!("Request line exceeds {} bytes, closing connection", MAX_REQUEST_BYTES);
      Response::error(
        None,
        error_codes::INVALID_REQUEST,
        &format!("Request exceeds {} bytes", MAX_REQUEST_BYTES),
      )
    } else {
      let text = String::from_utf8_lossy(&line);
      let trimmed = text.trim();
      if trimmed.is_empty() {
        continue;
      }

      match parse_request(trimmed) {
        Ok(request) => {
          debug!("Request: {} (id={:?})", request.method, request.id);
          router.handle(request).await
        }
        Err(response) => response,
      }
    };

    let json = serde_json::to_string(&response)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    if oversized {
      break;
    }
  }

  Ok(())
}

/// Decode one line, or build the error response the client gets instead
fn parse_request(line: &str) -> Result<Request, Response> {
  let value: serde_json::Value = serde_json::from_str(line).map_err(|e| {
    warn!("Invalid request JSON: {}", e);
    Response::error(None, error_codes::PARSE_ERROR, &format!("Parse error: {}", e))
  })?;

  let id = value.get("id").and_then(serde_json::Value::as_u64);
  let method = value.get("method").cloned();

  serde_json::from_value::<Request>(value).map_err(|e| match method {
    Some(serde_json::Value::String(name)) if serde_json::from_value::<Method>(name.clone().into()).is_err() => {
      warn!("Unknown method: {}", name);
      Response::error(id, error_codes::METHOD_NOT_FOUND, &format!("Method not found: {}", name))
    }
    _ => {
      warn!("Invalid request: {}", e);
      Response::error(id, error_codes::INVALID_REQUEST, &format!("Invalid request: {}", e))
    }
  })
}

/// Client for connecting to the daemon
pub struct Client {
  stream: UnixStream,
}

impl Client {
  /// Connect to daemon at the default socket path
  pub async fn connect() -> Result<Self, ServerError> {
    Self::connect_to(&default_socket_path()).await
  }

  /// Connect to daemon at a specific socket path
  pub async fn connect_to(socket_path: &Path) -> Result<Self, ServerError> {
    let stream = UnixStream::connect(socket_path).await?;
    Ok(Self { stream })
  }

  /// Send a request and receive response
  pub async fn request(&mut self, request: Request) -> Result<Response, ServerError> {
    let (reader, mut writer) = self.stream.split();

    let json = serde_json::to_string(&request)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
      return Err(ServerError::Closed);
    }

    let response: Response = serde_json::from_str(&line)?;
    Ok(response)
  }

  /// Send typed params and decode the typed result
  pub async fn call<P: Serialize, R: DeserializeOwned>(&mut self, method: Method, params: P) -> Result<R, ServerError> {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);

    let request = Request::new(Some(id), method, params).into_untyped()?;
    let response = self.request(request).await?;
    Ok(response.decode()?)
  }
}
