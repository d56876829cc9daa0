//! Cluster and registry resource types.
//!
//! Pure data only: no I/O or async.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ClusterError;

/// API group/version every clutch resource is published under.
pub const API_VERSION: &str = "ctlptl.dev/v1alpha1";

pub const CLUSTER_KIND: &str = "Cluster";
pub const REGISTRY_KIND: &str = "Registry";

// ── Type metadata ─────────────────────────────────────────────────────────────

/// `apiVersion` + `kind` pair carried by every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
}

impl TypeMeta {
    #[must_use]
    pub fn new(api_version: &str, kind: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// API group portion of `apiVersion` (`""` for the core group).
    #[must_use]
    pub fn group(&self) -> &str {
        self.api_version
            .split_once('/')
            .map_or("", |(group, _version)| group)
    }
}

// ── Products ──────────────────────────────────────────────────────────────────

/// Cluster backends recognised on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Product {
    DockerDesktop,
    Kind,
    Minikube,
    K3d,
}

impl Product {
    pub const ALL: &[Product] = &[
        Product::DockerDesktop,
        Product::Kind,
        Product::Minikube,
        Product::K3d,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Product::DockerDesktop => "docker-desktop",
            Product::Kind => "kind",
            Product::Minikube => "minikube",
            Product::K3d => "k3d",
        }
    }

    /// The cluster name each product registers in kubeconfig.
    #[must_use]
    pub fn default_cluster_name(self) -> &'static str {
        match self {
            Product::DockerDesktop => "docker-desktop",
            Product::Kind => "kind-kind",
            Product::Minikube => "minikube",
            Product::K3d => "k3d-k3s-default",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ClusterError::UnsupportedProduct(s.to_string()))
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Desired cluster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub name: String,
    pub product: Product,
    /// Name of a registry to connect to the cluster, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
}

impl Cluster {
    /// A cluster of the given product with its default name filled in.
    #[must_use]
    pub fn for_product(product: Product) -> Self {
        Self {
            type_meta: TypeMeta::new(API_VERSION, CLUSTER_KIND),
            name: product.default_cluster_name().to_string(),
            product,
            registry: None,
            kubernetes_version: None,
        }
    }
}

/// Desired image registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Registry {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            type_meta: TypeMeta::new(API_VERSION, REGISTRY_KIND),
            name: name.to_string(),
            port: None,
        }
    }
}

/// Registry hosting hints a cluster publishes so tools can find its registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRegistryHosting {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_from_cluster_network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}
