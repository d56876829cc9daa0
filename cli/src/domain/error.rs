//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Boxed transport failure carried inside [`ClusterError::Transport`].
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

// ── Cluster lifecycle errors ──────────────────────────────────────────────────

/// Errors surfaced by cluster admins and the daemon settings client.
///
/// None of these are retried internally. Each variant carries enough context
/// (operation, endpoint) to render a CLI error on its own.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("clutch currently does not support {feature} for {product}")]
    UnsupportedFeature {
        feature: &'static str,
        product: &'static str,
    },

    #[error(
        "{product} clusters can only be {operation} on a local Docker Desktop. Current DOCKER_HOST: {}",
        display_host(.host)
    )]
    WrongEnvironment {
        product: &'static str,
        operation: &'static str,
        host: String,
    },

    #[error("Docker Desktop {operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportSource,
    },

    #[error("Docker Desktop {operation} was cancelled")]
    Cancelled { operation: &'static str },

    #[error("Docker Desktop {operation} timed out after {secs}s")]
    DeadlineExceeded { operation: &'static str, secs: u64 },

    #[error("Docker Desktop settings: {0}")]
    InvalidSettings(String),

    #[error("Cluster product '{0}' is not available in this build")]
    UnsupportedProduct(String),
}

impl ClusterError {
    /// Wrap any transport-level failure for the given daemon operation.
    pub fn transport(operation: &'static str, source: impl Into<TransportSource>) -> Self {
        Self::Transport {
            operation,
            source: source.into(),
        }
    }
}

fn display_host(host: &str) -> &str {
    if host.trim().is_empty() {
        "<unset>"
    } else {
        host
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
