//! `clutch config`: show and set configuration values.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, validated, or saved.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app, &app.config_store),
        ConfigCommand::Set { key, value } => set_config(app, &app.config_store, &key, &value),
    }
}

fn show_config(app: &AppContext, store: &impl ConfigStore) -> Result<ExitCode> {
    let config = store.load()?;
    let path = store.path()?;
    let socket = config
        .docker_desktop
        .backend_socket
        .as_ref()
        .map_or_else(|| "(default)".to_string(), |p| p.display().to_string());

    app.output.kv("config", &path.display().to_string());
    app.output.kv("docker_desktop.backend_socket", &socket);
    app.output.kv(
        "docker_desktop.timeout_secs",
        &config.docker_desktop.timeout_secs.to_string(),
    );
    Ok(ExitCode::SUCCESS)
}

fn set_config(
    app: &AppContext,
    store: &impl ConfigStore,
    key: &str,
    value: &str,
) -> Result<ExitCode> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;

    app.output.success(&format!("Set {key} = {value}"));
    Ok(ExitCode::SUCCESS)
}
