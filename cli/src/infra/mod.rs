//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the Docker Desktop backend
//! client and config file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod desktop_client;
pub mod locality;

pub use config::YamlConfigStore;
pub use desktop_client::DesktopHttpClient;
pub use locality::DesktopLocality;
