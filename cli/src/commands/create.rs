//! `clutch create cluster <product>`: create a cluster.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::context::CallContext;
use crate::application::ports::ClusterAdmin;
use crate::commands::ClusterArgs;
use crate::domain::{Cluster, ClusterError, LocalRegistryHosting, Registry};

/// Create subcommands.
#[derive(Subcommand)]
pub enum CreateCommand {
    /// Create a cluster
    Cluster(CreateClusterArgs),
}

/// Arguments for `create cluster`.
#[derive(Args)]
pub struct CreateClusterArgs {
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Name of a registry to connect to the cluster
    #[arg(long)]
    pub registry: Option<String>,
}

/// Run `clutch create cluster`.
///
/// # Errors
///
/// Returns an error if the product is unsupported or the admin rejects the
/// request.
pub async fn run(app: &AppContext, cmd: CreateCommand) -> Result<ExitCode> {
    let CreateCommand::Cluster(args) = cmd;
    let product = args.cluster.product;

    let mut desired = Cluster::for_product(product);
    desired.registry.clone_from(&args.registry);
    let registry = args.registry.as_deref().map(Registry::named);

    let ctx = &app.call;
    let admin = app.admin_for(product)?;
    let registry = registry.as_ref();
    let hosting = create_cluster(&admin, ctx, &desired, registry).await?;

    app.output.resource(&args.cluster.printer("created"), &desired)?;
    if let Some(hosting) = hosting {
        app.output.kv("registry", &hosting.host);
    }
    Ok(ExitCode::SUCCESS)
}

/// Drive `admin` through install, create, and registry discovery.
///
/// # Errors
///
/// Returns the first error any lifecycle step reports.
pub async fn create_cluster(
    admin: &impl ClusterAdmin,
    ctx: &CallContext,
    desired: &Cluster,
    registry: Option<&Registry>,
) -> Result<Option<LocalRegistryHosting>, ClusterError> {
    admin.ensure_installed(ctx).await?;
    admin.create(ctx, desired, registry).await?;
    admin.local_registry_hosting(ctx, desired, registry).await
}
