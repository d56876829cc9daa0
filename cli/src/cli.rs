//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Lifecycle management for local Kubernetes clusters
#[derive(Parser)]
#[command(
    name = "clutch",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Docker daemon endpoint
    #[arg(
        long,
        global = true,
        env = "DOCKER_HOST",
        default_value = "",
        hide_default_value = true
    )]
    pub docker_host: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a cluster
    #[command(subcommand)]
    Create(commands::create::CreateCommand),

    /// Delete a cluster
    #[command(subcommand)]
    Delete(commands::delete::DeleteCommand),

    /// Show a cluster
    #[command(subcommand)]
    Get(commands::get::GetCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Split into the command to run and the flags `AppContext` is built from.
    #[must_use]
    pub fn into_parts(self) -> (Command, AppFlags) {
        let Cli {
            quiet,
            no_color,
            docker_host,
            command,
        } = self;
        let flags = AppFlags {
            output: OutputFlags { no_color, quiet },
            docker_host,
        };
        (command, flags)
    }
}

impl Command {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self, app: &AppContext) -> Result<ExitCode> {
        match self {
            Command::Create(cmd) => commands::create::run(app, cmd).await,
            Command::Delete(cmd) => commands::delete::run(app, cmd).await,
            Command::Get(cmd) => commands::get::run(app, cmd).await,
            Command::Config(cmd) => commands::config::run(app, cmd),
            Command::Version => {
                commands::version::run();
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
