use serde::{Deserialize, Deserializer, Serialize};

use crate::{enode::Enode, errors::EnodeError};

/// Connection parameters of one peer-to-peer network.
///
/// Node addresses are kept as the exact strings they were defined with, so
/// they serialize back byte-for-byte. Use [`Cluster::static_enodes`] and
/// [`Cluster::boot_enodes`] for the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cluster {
    #[serde(rename = "networkID")]
    network_id: u64,
    #[serde(rename = "discovery", default)]
    discovery_enabled: bool,
    #[serde(rename = "staticnodes", default, deserialize_with = "null_as_empty")]
    static_nodes: Vec<String>,
    #[serde(rename = "bootnodes", default, deserialize_with = "null_as_empty")]
    boot_nodes: Vec<String>,
}

// Tables exported by Go write nil node lists as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes: Option<Vec<String>> = Deserialize::deserialize(deserializer)?;
    Ok(nodes.unwrap_or_default())
}

impl Cluster {
    pub fn new(
        network_id: u64,
        discovery_enabled: bool,
        static_nodes: Vec<String>,
        boot_nodes: Vec<String>,
    ) -> Self {
        Self {
            network_id,
            discovery_enabled,
            static_nodes,
            boot_nodes,
        }
    }

    pub fn network_id(&self) -> u64 {
        self.network_id
    }

    pub fn discovery_enabled(&self) -> bool {
        self.discovery_enabled
    }

    pub fn static_nodes(&self) -> &[String] {
        &self.static_nodes
    }

    pub fn boot_nodes(&self) -> &[String] {
        &self.boot_nodes
    }

    pub fn static_enodes(&self) -> Result<Vec<Enode>, EnodeError> {
        self.static_nodes.iter().map(|node| node.parse()).collect()
    }

    pub fn boot_enodes(&self) -> Result<Vec<Enode>, EnodeError> {
        self.boot_nodes.iter().map(|node| node.parse()).collect()
    }

    /// No known peers and no discovery. Legal, but the node will never find anyone.
    pub fn is_isolated(&self) -> bool {
        !self.discovery_enabled && self.static_nodes.is_empty() && self.boot_nodes.is_empty()
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &String> {
        self.static_nodes.iter().chain(self.boot_nodes.iter())
    }
}
