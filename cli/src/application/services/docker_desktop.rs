//! Docker Desktop cluster admin.
//!
//! Docker Desktop owns its Kubernetes control plane; clutch can only check
//! that it is talking to the local instance and flip settings through the
//! desktop backend API. Imports only from `crate::domain` and
//! `crate::application`.

use tracing::{debug, info};

use crate::application::context::CallContext;
use crate::application::ports::{ClusterAdmin, DesktopSettingsClient, LocalityGuard};
use crate::domain::{Cluster, ClusterError, KUBERNETES_ENABLED, LocalRegistryHosting, Registry};

const PRODUCT: &str = "docker-desktop";

/// Lifecycle controller for the Docker Desktop Kubernetes cluster.
///
/// Holds the Docker endpoint and OS it was built with; locality is
/// recomputed from those on every mutating call.
pub struct DockerDesktopAdmin<L, S> {
    host: String,
    os: String,
    locality: L,
    client: S,
}

impl<L: LocalityGuard, S: DesktopSettingsClient> DockerDesktopAdmin<L, S> {
    #[must_use]
    pub fn new(host: impl Into<String>, os: impl Into<String>, locality: L, client: S) -> Self {
        Self {
            host: host.into(),
            os: os.into(),
            locality,
            client,
        }
    }

    /// The settings client this admin drives.
    pub fn client(&self) -> &S {
        &self.client
    }

    /// Whether Docker Desktop currently has Kubernetes enabled.
    ///
    /// Returns `None` when the settings document has no such flag.
    ///
    /// # Errors
    ///
    /// Returns `WrongEnvironment` for a non-local endpoint, or the settings
    /// read error.
    pub async fn kubernetes_enabled(
        &self,
        ctx: &CallContext,
    ) -> Result<Option<bool>, ClusterError> {
        self.ensure_local("inspected")?;
        let read = self.client.read_settings(ctx);
        let settings = ctx.run("read settings", read).await?;
        Ok(settings.flag(KUBERNETES_ENABLED))
    }

    fn ensure_local(&self, operation: &'static str) -> Result<(), ClusterError> {
        let local = self.locality.is_local(&self.host, &self.os);
        debug!(
            host = %self.host,
            os = %self.os,
            local,
            operation,
            "docker desktop locality check"
        );
        if local {
            Ok(())
        } else {
            Err(ClusterError::WrongEnvironment {
                product: PRODUCT,
                operation,
                host: self.host.clone(),
            })
        }
    }
}

impl<L: LocalityGuard, S: DesktopSettingsClient> ClusterAdmin for DockerDesktopAdmin<L, S> {
    async fn ensure_installed(&self, _ctx: &CallContext) -> Result<(), ClusterError> {
        Ok(())
    }

    async fn create(
        &self,
        _ctx: &CallContext,
        desired: &Cluster,
        registry: Option<&Registry>,
    ) -> Result<(), ClusterError> {
        if registry.is_some() {
            return Err(ClusterError::UnsupportedFeature {
                feature: "connecting a registry",
                product: PRODUCT,
            });
        }

        self.ensure_local("created")?;

        // Docker Desktop provisions the cluster itself once Kubernetes is
        // enabled in its UI.
        debug!(cluster = %desired.name, "docker desktop cluster is daemon-managed");
        Ok(())
    }

    async fn local_registry_hosting(
        &self,
        _ctx: &CallContext,
        _desired: &Cluster,
        _registry: Option<&Registry>,
    ) -> Result<Option<LocalRegistryHosting>, ClusterError> {
        Ok(None)
    }

    async fn delete(&self, ctx: &CallContext, config: &Cluster) -> Result<(), ClusterError> {
        self.ensure_local("deleted")?;
        let client = &self.client;

        // Reset first: the daemon rewrites its settings while restarting.
        info!(cluster = %config.name, "resetting docker desktop kubernetes cluster");
        ctx.run("reset", client.reset_cluster(ctx)).await?;

        let read = client.read_settings(ctx);
        let mut settings = ctx.run("read settings", read).await?;

        let changed = client.set_flag(&mut settings, KUBERNETES_ENABLED, false)?;
        if !changed {
            debug!(
                flag = KUBERNETES_ENABLED,
                "kubernetes already disabled, skipping settings write"
            );
            return Ok(());
        }

        info!(
            flag = KUBERNETES_ENABLED,
            "disabling docker desktop kubernetes"
        );
        let write = client.write_settings(ctx, &settings);
        ctx.run("write settings", write).await
    }
}
