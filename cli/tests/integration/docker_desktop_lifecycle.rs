//! End-to-end tests for `clutch delete|get cluster docker-desktop` against a
//! fake Docker Desktop backend listening on a unix socket.
//!
//! The fake runs on a plain thread, answers one canned response per
//! connection, and returns the request lines it saw.

#![cfg(unix)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct FakeBackend {
    socket: PathBuf,
    handle: JoinHandle<Vec<(String, String)>>,
}

impl FakeBackend {
    /// Serve `responses` in order; each request's (request line, body) is recorded.
    fn serve(dir: &Path, responses: Vec<(u16, &'static str)>) -> Self {
        let socket = dir.join("backend.native.sock");
        let listener = UnixListener::bind(&socket).expect("bind");
        let handle = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("accept");
                seen.push(read_request(&mut stream));
                write!(
                    stream,
                    "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                )
                .expect("reply");
            }
            seen
        });
        Self { socket, handle }
    }

    fn requests(self) -> Vec<(String, String)> {
        self.handle.join().expect("backend thread")
    }
}

fn read_request(stream: &mut UnixStream) -> (String, String) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read");
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let lower = head.to_lowercase();
    let content_length = lower
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .map_or(0, |v| v.trim().parse::<usize>().unwrap());
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        assert!(n > 0, "client closed mid-body");
        buf.extend_from_slice(&chunk[..n]);
    }
    let request_line = head.lines().next().unwrap_or_default().to_string();
    let body = String::from_utf8_lossy(&buf[header_end..]).into_owned();
    (request_line, body)
}

/// `clutch` pointed at `socket` through a temp config, with a local endpoint.
fn clutch(dir: &TempDir, socket: &Path) -> Command {
    let config = dir.path().join("config.yaml");
    std::fs::write(
        &config,
        format!(
            "docker_desktop:\n  backend_socket: {}\n  timeout_secs: 10\n",
            socket.display()
        ),
    )
    .expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clutch"));
    cmd.env("NO_COLOR", "1")
        .env("CLUTCH_CONFIG", &config)
        .env_remove("CLUTCH_LOG")
        .env("DOCKER_HOST", "");
    cmd
}

/// Locality only accepts an unset endpoint on supported desktop platforms.
fn desktop_platform() -> bool {
    matches!(std::env::consts::OS, "macos" | "linux")
}

#[test]
fn test_delete_resets_then_disables_kubernetes() {
    if !desktop_platform() {
        return;
    }
    let dir = TempDir::new().expect("temp dir");
    let backend = FakeBackend::serve(
        dir.path(),
        vec![
            (200, "{}"),
            (200, r#"{"kubernetesEnabled":true,"memoryMiB":4096}"#),
            (200, ""),
        ],
    );

    clutch(&dir, &backend.socket)
        .args(["delete", "cluster", "docker-desktop"])
        .assert()
        .success()
        .stdout("cluster.ctlptl.dev/docker-desktop deleted\n");

    let requests = backend.requests();
    let lines: Vec<&str> = requests.iter().map(|(line, _)| line.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "POST /kubernetes/reset HTTP/1.1",
            "GET /app/settings HTTP/1.1",
            "POST /app/settings HTTP/1.1",
        ]
    );
    let written: serde_json::Value = serde_json::from_str(&requests[2].1).expect("json body");
    assert_eq!(
        written,
        serde_json::json!({"kubernetesEnabled": false, "memoryMiB": 4096})
    );
}

#[test]
fn test_delete_when_disabled_skips_settings_write() {
    if !desktop_platform() {
        return;
    }
    let dir = TempDir::new().expect("temp dir");
    let backend = FakeBackend::serve(
        dir.path(),
        vec![(200, "{}"), (200, r#"{"kubernetesEnabled":false}"#)],
    );

    clutch(&dir, &backend.socket)
        .args(["delete", "cluster", "docker-desktop", "-o", "name"])
        .assert()
        .success()
        .stdout("cluster.ctlptl.dev/docker-desktop\n");

    assert_eq!(backend.requests().len(), 2, "reset and read only");
}

#[test]
fn test_delete_reset_failure_stops_before_settings() {
    if !desktop_platform() {
        return;
    }
    let dir = TempDir::new().expect("temp dir");
    let backend = FakeBackend::serve(dir.path(), vec![(503, "engine restarting")]);

    clutch(&dir, &backend.socket)
        .args(["delete", "cluster", "docker-desktop"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Docker Desktop reset failed"))
        .stderr(predicate::str::contains("503"));

    assert_eq!(backend.requests().len(), 1);
}

#[test]
fn test_delete_without_backend_reports_connection_error() {
    if !desktop_platform() {
        return;
    }
    let dir = TempDir::new().expect("temp dir");
    let socket = dir.path().join("missing.sock");

    clutch(&dir, &socket)
        .args(["delete", "cluster", "docker-desktop"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot connect to"))
        .stderr(predicate::str::contains("missing.sock"));
}

#[test]
fn test_get_cluster_reports_kubernetes_state() {
    if !desktop_platform() {
        return;
    }
    let dir = TempDir::new().expect("temp dir");
    let backend = FakeBackend::serve(
        dir.path(),
        vec![(200, r#"{"kubernetesEnabled":{"value":true,"locked":false}}"#)],
    );

    clutch(&dir, &backend.socket)
        .args(["get", "cluster", "docker-desktop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cluster.ctlptl.dev/docker-desktop\n"))
        .stdout(predicate::str::contains("kubernetes  enabled"));

    let requests = backend.requests();
    assert_eq!(requests[0].0, "GET /app/settings HTTP/1.1");
}
