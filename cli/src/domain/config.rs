//! Domain types and validators for clutch configuration.
//!
//! Pure functions only: no I/O or async.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "docker_desktop.backend_socket",
    "docker_desktop.timeout_secs",
];

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 3600;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.clutch/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClutchConfig {
    /// Docker Desktop backend settings.
    #[serde(default)]
    pub docker_desktop: DockerDesktopConfig,
}

/// Docker Desktop backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DockerDesktopConfig {
    /// Override for the backend API socket (or named pipe on Windows).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_socket: Option<PathBuf>,
    /// Timeout applied to each call made to the Docker Desktop daemon.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DockerDesktopConfig {
    fn default() -> Self {
        Self {
            backend_socket: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClutchConfig {
    /// Apply an already-validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "docker_desktop.backend_socket" => {
                self.docker_desktop.backend_socket = Some(PathBuf::from(value));
            }
            "docker_desktop.timeout_secs" => {
                self.docker_desktop.timeout_secs = value.parse()?;
            }
            other => {
                return Err(ConfigError::UnknownKey {
                    key: other.to_string(),
                    valid: VALID_CONFIG_KEYS.join(", "),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Check every loaded value against the same rules `set` applies.
    ///
    /// # Errors
    ///
    /// Returns the first value that fails validation, naming its key.
    pub fn validate(&self) -> Result<()> {
        let timeout = self.docker_desktop.timeout_secs.to_string();
        validate_config_value("docker_desktop.timeout_secs", &timeout)?;
        if let Some(socket) = &self.docker_desktop.backend_socket {
            let socket = socket.to_string_lossy();
            validate_config_value("docker_desktop.backend_socket", &socket)?;
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };
    match key {
        "docker_desktop.timeout_secs" => match value.parse::<u64>() {
            Ok(secs) if (1..=MAX_TIMEOUT_SECS).contains(&secs) => Ok(()),
            _ => {
                let reason = format!("Expected whole seconds between 1 and {MAX_TIMEOUT_SECS}");
                Err(invalid(reason).into())
            }
        },
        "docker_desktop.backend_socket" if value.trim().is_empty() => {
            Err(invalid("Path must not be empty".to_string()).into())
        }
        _ => Ok(()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
