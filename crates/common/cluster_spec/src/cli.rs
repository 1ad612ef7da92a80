use std::fmt;

use crate::{cluster::Cluster, networks::Network, registry::ClusterRegistry};

/// A network picked on the command line, by name or by numeric id.
///
/// Names are aliases for the well-known network ids: against a custom table,
/// `mainnet` selects whichever cluster has network id 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkSelector {
    Named(Network),
    Id(u64),
}

impl NetworkSelector {
    pub fn network_id(&self) -> u64 {
        match self {
            NetworkSelector::Named(network) => network.network_id(),
            NetworkSelector::Id(network_id) => *network_id,
        }
    }

    pub fn resolve<'a>(&self, registry: &'a ClusterRegistry) -> Option<&'a Cluster> {
        registry.get_by_network_id(self.network_id())
    }
}

impl fmt::Display for NetworkSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkSelector::Named(network) => write!(f, "{network}"),
            NetworkSelector::Id(network_id) => write!(f, "{network_id}"),
        }
    }
}

pub fn network_parser(network_string: &str) -> Result<NetworkSelector, String> {
    if let Some(network) = Network::from_name(network_string) {
        return Ok(NetworkSelector::Named(network));
    }
    network_string
        .parse()
        .map(NetworkSelector::Id)
        .map_err(|_| {
            format!(
                "Not a valid network: {network_string}, try mainnet, ropsten, rinkeby, or a network id"
            )
        })
}
