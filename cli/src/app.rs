//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is the composition root: it loads config once, captures the
//! Docker endpoint and host OS, and builds the concrete cluster admins that
//! command handlers drive through the `ClusterAdmin` port.

use std::time::Duration;

use anyhow::Result;

use crate::application::context::CallContext;
use crate::application::ports::ConfigStore;
use crate::application::services::docker_desktop::DockerDesktopAdmin;
use crate::domain::config::ClutchConfig;
use crate::domain::{ClusterError, Product};
use crate::infra::{DesktopHttpClient, DesktopLocality, YamlConfigStore};
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Value of `--docker-host` / `DOCKER_HOST`; empty when unset.
    pub docker_host: String,
}

/// The Docker Desktop admin wired to production infrastructure.
pub type DesktopAdmin = DockerDesktopAdmin<DesktopLocality, DesktopHttpClient>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Config file store.
    pub config_store: YamlConfigStore,
    /// Effective configuration.
    pub config: ClutchConfig,
    /// Docker endpoint the admins check locality against.
    pub docker_host: String,
    /// Host operating system (`std::env::consts::OS`).
    pub os: String,
    /// Cancellation and timeout for daemon calls.
    pub call: CallContext,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be loaded.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let config_store = YamlConfigStore::new();
        let config = config_store.load()?;
        let call = CallContext::new()
            .with_timeout(Duration::from_secs(config.docker_desktop.timeout_secs));

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            config_store,
            config,
            docker_host: flags.docker_host.clone(),
            os: std::env::consts::OS.to_string(),
            call,
        })
    }

    /// Build the Docker Desktop admin for this invocation.
    ///
    /// Nothing is contacted here; a missing backend socket surfaces on the
    /// first daemon call.
    #[must_use]
    pub fn docker_desktop_admin(&self) -> DesktopAdmin {
        let client = DesktopHttpClient::from_config(&self.config.docker_desktop, &self.os);
        DockerDesktopAdmin::new(
            self.docker_host.clone(),
            self.os.clone(),
            DesktopLocality,
            client,
        )
    }

    /// Resolve the admin for `product`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedProduct` for products this build cannot manage.
    pub fn admin_for(&self, product: Product) -> Result<DesktopAdmin> {
        match product {
            Product::DockerDesktop => Ok(self.docker_desktop_admin()),
            other => Err(ClusterError::UnsupportedProduct(other.to_string()).into()),
        }
    }
}
