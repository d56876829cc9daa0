//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`; never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::context::CallContext;
use crate::domain::{
    Cluster, ClusterError, ClutchConfig, LocalRegistryHosting, Registry, SettingsSnapshot,
};

// ── Locality Port ─────────────────────────────────────────────────────────────

/// Decides whether a Docker endpoint addresses the Docker Desktop on this host.
///
/// Implementations must be pure: no I/O, no caching between calls.
pub trait LocalityGuard {
    fn is_local(&self, docker_host: &str, os: &str) -> bool;
}

// ── Docker Desktop Settings Port ──────────────────────────────────────────────

/// Client for the Docker Desktop backend API.
///
/// Transport failures are returned as-is; implementations never retry.
#[allow(async_fn_in_trait)]
pub trait DesktopSettingsClient {
    /// Ask the daemon to reset (tear down) its Kubernetes cluster.
    async fn reset_cluster(&self, ctx: &CallContext) -> Result<(), ClusterError>;

    /// Fetch the full settings document.
    async fn read_settings(&self, ctx: &CallContext) -> Result<SettingsSnapshot, ClusterError>;

    /// Set a boolean flag on an in-memory snapshot.
    ///
    /// Returns `false` when the flag already held `value`, in which case the
    /// caller must not write the snapshot back.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if the flag cannot be set.
    fn set_flag(
        &self,
        settings: &mut SettingsSnapshot,
        flag: &str,
        value: bool,
    ) -> Result<bool, ClusterError> {
        settings.set_flag(flag, value)
    }

    /// Persist the full snapshot back to the daemon.
    async fn write_settings(
        &self,
        ctx: &CallContext,
        settings: &SettingsSnapshot,
    ) -> Result<(), ClusterError>;
}

// ── Cluster Admin Port ────────────────────────────────────────────────────────

/// Lifecycle contract every cluster backend implements.
#[allow(async_fn_in_trait)]
pub trait ClusterAdmin {
    /// Make sure the backend tooling is installed.
    async fn ensure_installed(&self, ctx: &CallContext) -> Result<(), ClusterError>;

    /// Create the desired cluster, optionally wired to `registry`.
    async fn create(
        &self,
        ctx: &CallContext,
        desired: &Cluster,
        registry: Option<&Registry>,
    ) -> Result<(), ClusterError>;

    /// Registry hosting hints to publish into the cluster, if any.
    async fn local_registry_hosting(
        &self,
        ctx: &CallContext,
        desired: &Cluster,
        registry: Option<&Registry>,
    ) -> Result<Option<LocalRegistryHosting>, ClusterError>;

    /// Delete the cluster described by `config`.
    async fn delete(&self, ctx: &CallContext, config: &Cluster) -> Result<(), ClusterError>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading and saving the clutch config file.
pub trait ConfigStore {
    /// Load config, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, cannot be
    /// parsed, or holds a value that fails validation.
    fn load(&self) -> Result<ClutchConfig>;

    /// Persist config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &ClutchConfig) -> Result<()>;

    /// Location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
