use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::{Arc, LazyLock},
};

use tracing::debug;

use crate::{cluster::Cluster, enode::Enode, errors::DefinitionError, networks::Network};

static DEFAULT_REGISTRY: LazyLock<Arc<ClusterRegistry>> = LazyLock::new(|| {
    let clusters = Network::ALL
        .iter()
        .map(|network| network.cluster().as_ref().clone())
        .collect();
    ClusterRegistry::new(clusters)
        .expect("built-in cluster table should be valid")
        .into()
});

/// An immutable, validated set of clusters.
///
/// Lookups never fail: every defect in the table is reported once, when the
/// registry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRegistry {
    clusters: Vec<Cluster>,
}

impl ClusterRegistry {
    pub fn new(clusters: Vec<Cluster>) -> Result<Self, DefinitionError> {
        Self::validate(&clusters)?;
        debug!(
            "Built cluster registry with network ids {:?}",
            clusters.iter().map(Cluster::network_id).collect::<Vec<_>>()
        );
        Ok(Self { clusters })
    }

    /// Registry of the clusters compiled into this crate, shared for the
    /// lifetime of the process.
    pub fn default_clusters() -> Arc<ClusterRegistry> {
        DEFAULT_REGISTRY.clone()
    }

    pub fn validate(clusters: &[Cluster]) -> Result<(), DefinitionError> {
        let mut seen = HashSet::with_capacity(clusters.len());
        for cluster in clusters {
            if !seen.insert(cluster.network_id()) {
                return Err(DefinitionError::DuplicateNetworkId {
                    network_id: cluster.network_id(),
                });
            }

            for node in cluster.nodes() {
                node.parse::<Enode>()
                    .map_err(|source| DefinitionError::MalformedNode {
                        network_id: cluster.network_id(),
                        node: node.clone(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DefinitionError> {
        Self::new(serde_yaml::from_str(yaml)?)
    }

    /// Loads a table from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, DefinitionError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => return Err(DefinitionError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }

    pub fn get_by_network_id(&self, network_id: u64) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|cluster| cluster.network_id() == network_id)
    }

    /// All clusters, in the order they were defined.
    pub fn all_clusters(&self) -> &[Cluster] {
        &self.clusters
    }
}
