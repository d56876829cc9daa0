//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod cluster;
pub mod config;
pub mod error;
pub mod locality;
pub mod settings;

pub use cluster::{Cluster, LocalRegistryHosting, Product, Registry, TypeMeta};
pub use config::{ClutchConfig, DockerDesktopConfig, validate_config_key, validate_config_value};
pub use error::{ClusterError, ConfigError};
pub use locality::is_local_docker_desktop;
pub use settings::{KUBERNETES_ENABLED, SettingsSnapshot};
