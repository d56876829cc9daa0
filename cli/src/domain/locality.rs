//! Docker endpoint locality rules.
//!
//! Decides whether a `DOCKER_HOST` value addresses the Docker Desktop
//! instance running on this machine. Pure functions only; every branch that
//! cannot positively identify a local endpoint answers `false`.

/// Operating-system identifiers as reported by `std::env::consts::OS`.
pub const OS_DARWIN: &str = "macos";
pub const OS_LINUX: &str = "linux";
pub const OS_WINDOWS: &str = "windows";

/// Socket path suffix of the Docker Desktop for Linux engine.
const LINUX_DESKTOP_SOCKET_SUFFIX: &str = ".docker/desktop/docker.sock";

const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

/// Normalised operating system, accepting both Rust and Go spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostOs {
    Darwin,
    Linux,
    Windows,
}

impl HostOs {
    fn parse(os: &str) -> Option<Self> {
        match os {
            "macos" | "darwin" => Some(Self::Darwin),
            "linux" => Some(Self::Linux),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }
}

/// Returns `true` when `docker_host` refers to the local Docker Desktop on `os`.
///
/// - unset (empty) endpoint: local on every supported OS
/// - `unix://` socket: local on macOS; on Linux only the Docker Desktop socket
/// - `npipe://` pipe: local on Windows only
/// - `tcp://` loopback with an explicit port: local on macOS and Windows
#[must_use]
pub fn is_local_docker_desktop(docker_host: &str, os: &str) -> bool {
    let Some(os) = HostOs::parse(os) else {
        return false;
    };

    let host = docker_host.trim();
    if host.is_empty() {
        return true;
    }

    if let Some(path) = host.strip_prefix("unix://") {
        return match os {
            HostOs::Darwin => path.starts_with('/'),
            HostOs::Linux => path.starts_with('/') && path.ends_with(LINUX_DESKTOP_SOCKET_SUFFIX),
            HostOs::Windows => false,
        };
    }

    if let Some(pipe) = host.strip_prefix("npipe://") {
        return os == HostOs::Windows && !pipe.is_empty();
    }

    if let Some(addr) = host.strip_prefix("tcp://") {
        return matches!(os, HostOs::Darwin | HostOs::Windows) && is_loopback_addr(addr);
    }

    false
}

/// `host:port` where host is a loopback name and port a valid, non-zero u16.
fn is_loopback_addr(addr: &str) -> bool {
    let addr = addr.strip_suffix('/').unwrap_or(addr);
    let Some((host, port)) = addr.rsplit_once(':') else {
        return false;
    };
    LOOPBACK_HOSTS.contains(&host) && port.parse::<u16>().is_ok_and(|p| p != 0)
}

// ── Unit tests ────────────────────────────────────────────────────────────────
