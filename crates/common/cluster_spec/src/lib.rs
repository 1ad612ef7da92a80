//! Known peer-to-peer clusters: per network, the network id, whether discovery
//! runs, and the `enode://` addresses of its static and boot nodes.

pub mod cli;
pub mod cluster;
pub mod enode;
pub mod errors;
pub mod networks;
pub mod registry;

pub use cluster::Cluster;
pub use enode::{Enode, Host};
pub use networks::Network;
pub use registry::ClusterRegistry;
