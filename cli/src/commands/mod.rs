//! Command implementations

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod version;

use clap::{Args, ValueEnum};

use crate::domain::Product;
use crate::output::NamePrinter;

/// `-o` output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print only `kind.group/name`
    Name,
}

/// Arguments shared by every `<verb> cluster` command.
#[derive(Args)]
pub struct ClusterArgs {
    /// Cluster product: docker-desktop, kind, minikube, k3d
    pub product: Product,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ClusterArgs {
    /// Name printer for this invocation, reporting `operation`.
    #[must_use]
    pub fn printer(&self, operation: &str) -> NamePrinter {
        NamePrinter::new(operation, self.output == Some(OutputFormat::Name))
    }
}
