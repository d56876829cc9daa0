//! Infrastructure implementation of the `DesktopSettingsClient` port.
//!
//! `DesktopHttpClient` speaks HTTP/1.1 to the Docker Desktop backend API over
//! its local socket (a unix socket on macOS/Linux, a named pipe on Windows).
//! One connection per request; the daemon closes idle connections anyway.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use tracing::debug;

use crate::application::context::CallContext;
use crate::application::ports::DesktopSettingsClient;
use crate::domain::config::DockerDesktopConfig;
use crate::domain::locality::{OS_DARWIN, OS_LINUX, OS_WINDOWS};
use crate::domain::{ClusterError, SettingsSnapshot};

const RESET_PATH: &str = "/kubernetes/reset";
const SETTINGS_PATH: &str = "/app/settings";

/// Longest response body excerpt quoted in an error message.
const ERROR_BODY_EXCERPT: usize = 200;

const WINDOWS_BACKEND_PIPE: &str = r"\\.\pipe\dockerBackendNativeApi";

const NO_SOCKET: &str =
    "no backend socket is known for this platform; set docker_desktop.backend_socket";

/// Default backend API socket for `os`, relative to `home` where applicable.
#[must_use]
pub fn default_backend_socket(os: &str, home: &Path) -> Option<PathBuf> {
    match os {
        OS_DARWIN | "darwin" => {
            let data = home.join("Library/Containers/com.docker.docker/Data");
            Some(data.join("backend.native.sock"))
        }
        OS_LINUX => Some(home.join(".docker/desktop/backend.native.sock")),
        OS_WINDOWS => Some(PathBuf::from(WINDOWS_BACKEND_PIPE)),
        _ => None,
    }
}

/// Production Docker Desktop backend client.
///
/// The socket is resolved when the client is built but only required when a
/// request is made, so callers can reject unsupported work before touching
/// the daemon.
#[derive(Debug, Clone)]
pub struct DesktopHttpClient {
    socket: Option<PathBuf>,
}

impl DesktopHttpClient {
    #[must_use]
    pub fn new(socket: PathBuf) -> Self {
        Self {
            socket: Some(socket),
        }
    }

    /// Build a client from config, falling back to the per-OS default socket.
    ///
    /// Leaves the socket unset when none is configured and none is known for
    /// `os`; every request then fails with a transport error.
    #[must_use]
    pub fn from_config(config: &DockerDesktopConfig, os: &str) -> Self {
        if let Some(socket) = &config.backend_socket {
            return Self::new(socket.clone());
        }
        let home = dirs::home_dir();
        Self {
            socket: home.and_then(|home| default_backend_socket(os, &home)),
        }
    }

    #[must_use]
    pub fn socket(&self) -> Option<&Path> {
        self.socket.as_deref()
    }

    async fn request(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Bytes, ClusterError> {
        let Some(socket) = self.socket() else {
            return Err(ClusterError::transport(operation, NO_SOCKET));
        };
        let stream = connect(socket).await.map_err(|e| {
            let reason = format!("cannot connect to {}: {e}", socket.display());
            ClusterError::transport(operation, reason)
        })?;

        let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| ClusterError::transport(operation, e))?;
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                debug!(error = %e, "docker desktop connection closed with error");
            }
        });

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(path)
            .header(HOST, "localhost");
        if body.is_some() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(Full::new(Bytes::from(body.unwrap_or_default())))
            .map_err(|e| ClusterError::transport(operation, e))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| ClusterError::transport(operation, e))?;
        let status = response.status();
        let payload = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ClusterError::transport(operation, e))?
            .to_bytes();

        debug!(%method, path, %status, bytes = payload.len(), "docker desktop api call");

        if !status.is_success() {
            return Err(ClusterError::transport(
                operation,
                format!("{method} {path} returned {status}: {}", excerpt(&payload)),
            ));
        }
        Ok(payload)
    }
}

impl DesktopSettingsClient for DesktopHttpClient {
    async fn reset_cluster(&self, ctx: &CallContext) -> Result<(), ClusterError> {
        ensure_live(ctx, "reset")?;
        self.request("reset", Method::POST, RESET_PATH, None)
            .await
            .map(|_| ())
    }

    async fn read_settings(&self, ctx: &CallContext) -> Result<SettingsSnapshot, ClusterError> {
        ensure_live(ctx, "read settings")?;
        let body = self
            .request("read settings", Method::GET, SETTINGS_PATH, None)
            .await?;
        SettingsSnapshot::from_slice(&body)
    }

    async fn write_settings(
        &self,
        ctx: &CallContext,
        settings: &SettingsSnapshot,
    ) -> Result<(), ClusterError> {
        ensure_live(ctx, "write settings")?;
        let body = settings.to_vec()?;
        self.request("write settings", Method::POST, SETTINGS_PATH, Some(body))
            .await
            .map(|_| ())
    }
}

fn ensure_live(ctx: &CallContext, operation: &'static str) -> Result<(), ClusterError> {
    if ctx.is_cancelled() {
        return Err(ClusterError::Cancelled { operation });
    }
    Ok(())
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.chars().count() <= ERROR_BODY_EXCERPT {
        return text.to_string();
    }
    let cut: String = text.chars().take(ERROR_BODY_EXCERPT).collect();
    format!("{cut}…")
}

#[cfg(unix)]
async fn connect(socket: &Path) -> std::io::Result<tokio::net::UnixStream> {
    tokio::net::UnixStream::connect(socket).await
}

#[cfg(windows)]
use tokio::net::windows::named_pipe::{ClientOptions, NamedPipeClient};

#[cfg(windows)]
async fn connect(socket: &Path) -> std::io::Result<NamedPipeClient> {
    ClientOptions::new().open(socket)
}
