//! `clutch delete cluster <product>`: delete a cluster.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ClusterAdmin;
use crate::commands::ClusterArgs;
use crate::domain::Cluster;

/// Delete subcommands.
#[derive(Subcommand)]
pub enum DeleteCommand {
    /// Delete a cluster
    Cluster(ClusterArgs),
}

/// Run `clutch delete cluster`.
///
/// # Errors
///
/// Returns an error if the product is unsupported, the endpoint is not
/// local, or the daemon rejects a call.
pub async fn run(app: &AppContext, cmd: DeleteCommand) -> Result<ExitCode> {
    let DeleteCommand::Cluster(args) = cmd;
    let config = Cluster::for_product(args.product);

    let admin = app.admin_for(args.product)?;
    admin.delete(&app.call, &config).await?;

    app.output.resource(&args.printer("deleted"), &config)?;
    Ok(ExitCode::SUCCESS)
}
