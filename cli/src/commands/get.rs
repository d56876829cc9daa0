//! `clutch get cluster <product>`: show a cluster without changing it.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::commands::{ClusterArgs, OutputFormat};
use crate::domain::Cluster;

/// Get subcommands.
#[derive(Subcommand)]
pub enum GetCommand {
    /// Show a cluster
    Cluster(ClusterArgs),
}

/// Run `clutch get cluster`.
///
/// # Errors
///
/// Returns an error if the product is unsupported, the endpoint is not
/// local, or the settings cannot be read.
pub async fn run(app: &AppContext, cmd: GetCommand) -> Result<ExitCode> {
    let GetCommand::Cluster(args) = cmd;
    let cluster = Cluster::for_product(args.product);
    let admin = app.admin_for(args.product)?;

    if args.output == Some(OutputFormat::Name) {
        app.output.resource(&args.printer(""), &cluster)?;
        return Ok(ExitCode::SUCCESS);
    }

    let enabled = admin.kubernetes_enabled(&app.call).await?;
    app.output.resource(&args.printer(""), &cluster)?;
    let status = match enabled {
        Some(true) => "enabled",
        Some(false) => "disabled",
        None => "unknown",
    };
    app.output.kv("kubernetes", status);
    Ok(ExitCode::SUCCESS)
}
