//! Unit tests for `create_cluster` lifecycle orchestration.

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Mutex;

use clutch_cli::app::AppContext;
use clutch_cli::application::context::CallContext;
use clutch_cli::application::ports::ClusterAdmin;
use clutch_cli::commands::create::create_cluster;
use clutch_cli::domain::{
    Cluster, ClusterError, ClutchConfig, LocalRegistryHosting, Product, Registry,
};
use clutch_cli::infra::YamlConfigStore;
use clutch_cli::output::OutputContext;

use crate::helpers::{FakeDesktop, local_admin, remote_admin};

/// Admin that records each lifecycle step and can fail one of them.
#[derive(Default)]
struct RecordingAdmin {
    steps: Mutex<Vec<&'static str>>,
    fail_create: bool,
    hosting: Option<LocalRegistryHosting>,
}

impl RecordingAdmin {
    fn steps(&self) -> Vec<&'static str> {
        self.steps.lock().expect("lock").clone()
    }

    fn record(&self, step: &'static str) {
        self.steps.lock().expect("lock").push(step);
    }
}

impl ClusterAdmin for RecordingAdmin {
    async fn ensure_installed(&self, _ctx: &CallContext) -> Result<(), ClusterError> {
        self.record("ensure_installed");
        Ok(())
    }

    async fn create(
        &self,
        _ctx: &CallContext,
        _desired: &Cluster,
        _registry: Option<&Registry>,
    ) -> Result<(), ClusterError> {
        self.record("create");
        if self.fail_create {
            return Err(ClusterError::InvalidSettings("boom".to_string()));
        }
        Ok(())
    }

    async fn local_registry_hosting(
        &self,
        _ctx: &CallContext,
        _desired: &Cluster,
        _registry: Option<&Registry>,
    ) -> Result<Option<LocalRegistryHosting>, ClusterError> {
        self.record("local_registry_hosting");
        Ok(self.hosting.clone())
    }

    async fn delete(&self, _ctx: &CallContext, _config: &Cluster) -> Result<(), ClusterError> {
        self.record("delete");
        Ok(())
    }
}

#[tokio::test]
async fn create_cluster_runs_steps_in_order() {
    let admin = RecordingAdmin {
        hosting: Some(LocalRegistryHosting {
            host: "localhost:5000".to_string(),
            host_from_cluster_network: None,
            help: None,
        }),
        ..RecordingAdmin::default()
    };
    let desired = Cluster::for_product(Product::DockerDesktop);

    let hosting = create_cluster(&admin, &CallContext::new(), &desired, None)
        .await
        .expect("create");

    assert_eq!(
        admin.steps(),
        vec!["ensure_installed", "create", "local_registry_hosting"]
    );
    assert_eq!(hosting.map(|h| h.host).as_deref(), Some("localhost:5000"));
}

#[tokio::test]
async fn create_cluster_stops_at_first_failure() {
    let admin = RecordingAdmin {
        fail_create: true,
        ..RecordingAdmin::default()
    };
    let desired = Cluster::for_product(Product::DockerDesktop);

    let err = create_cluster(&admin, &CallContext::new(), &desired, None)
        .await
        .expect_err("create fails");

    assert!(matches!(err, ClusterError::InvalidSettings(_)));
    assert_eq!(admin.steps(), vec!["ensure_installed", "create"]);
}

#[tokio::test]
async fn create_docker_desktop_cluster_has_no_registry_hosting() {
    let admin = local_admin(FakeDesktop::kubernetes_enabled());
    let desired = Cluster::for_product(Product::DockerDesktop);

    let hosting = create_cluster(&admin, &CallContext::new(), &desired, None)
        .await
        .expect("create");

    assert!(hosting.is_none());
    assert!(
        admin.client().calls().is_empty(),
        "create never touches the daemon"
    );
}

#[tokio::test]
async fn create_docker_desktop_cluster_with_registry_fails_even_when_remote() {
    let admin = remote_admin(FakeDesktop::kubernetes_enabled());
    let desired = Cluster::for_product(Product::DockerDesktop);
    let registry = Registry::named("ctlptl-registry");

    let err = create_cluster(&admin, &CallContext::new(), &desired, Some(&registry))
        .await
        .expect_err("registry rejected");

    assert_eq!(
        err.to_string(),
        "clutch currently does not support connecting a registry for docker-desktop"
    );
}

// ── Platform without Docker Desktop ───────────────────────────────────────────

/// Production wiring on `os`, with default config and an unset endpoint.
fn app_on(os: &str) -> AppContext {
    AppContext {
        output: OutputContext::new(true, true),
        config_store: YamlConfigStore::with_path(PathBuf::from("unused.yaml")),
        config: ClutchConfig::default(),
        docker_host: String::new(),
        os: os.to_string(),
        call: CallContext::new(),
    }
}

#[tokio::test]
async fn create_with_registry_on_platform_without_desktop_is_unsupported() {
    let app = app_on("freebsd");
    let admin = app.admin_for(Product::DockerDesktop).expect("lazy admin");
    let desired = Cluster::for_product(Product::DockerDesktop);
    let registry = Registry::named("ctlptl-registry");

    let err = create_cluster(&admin, &app.call, &desired, Some(&registry))
        .await
        .expect_err("registry rejected");

    assert!(
        matches!(err, ClusterError::UnsupportedFeature { .. }),
        "got: {err}"
    );
}

#[tokio::test]
async fn delete_on_platform_without_desktop_is_wrong_environment() {
    let app = app_on("freebsd");
    let admin = app.admin_for(Product::DockerDesktop).expect("lazy admin");
    let cluster = Cluster::for_product(Product::DockerDesktop);

    let err = admin
        .delete(&app.call, &cluster)
        .await
        .expect_err("not local");

    assert!(
        matches!(err, ClusterError::WrongEnvironment { .. }),
        "got: {err}"
    );
}
