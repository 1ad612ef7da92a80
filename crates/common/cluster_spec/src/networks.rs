use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use crate::cluster::Cluster;

pub const ROPSTEN_STATIC_NODES: &[&str] = &[
    "enode://dffef3874011709b12d1e540d83ddb19a9db8614ad9151d05bcf813585e45cbebba5aaea223fe315786c401d8cecb1ad2de9f179680c536ea30311fb21fa934b@188.166.100.178:30303",
    "enode://03f3661686d30509d621dbe5ee2e3082923f25e94fd41a2dd8dd34bb12a0c4e8fbde52247c6c55e86dc209a8e7c4a5ae56058c65f7b01734d3ab73818b44e2a3@188.166.33.47:30303",
];

pub const RINKEBY_BOOT_NODES: &[&str] = &[
    "enode://b29100c8468e3e6604817174a15e4d71627458b0dcdbeea169ab2eb4ab2bbc6f24adbb175826726cec69db8fdba6c0dd60b3da598e530ede562180d300728659@206.189.6.48:30404",
    "enode://1b843c7697f6fc42a1f606fb3cfaac54e025f06789dc20ad9278be3388967cf21e3a1b1e4be51faecd66c2c3adef12e942b4fcdeb8727657abe60636efb6224f@206.189.6.46:30404",
];

pub const MAINNET_STATIC_NODES: &[&str] = &[
    "enode://3aeaff0868b19e03fabe33e6e0fcc821094e1601be44edd6f45e3f0171ed964e13623e49987bddd6c517304d2a45dfe66da51e47b2e11d59c4b30cd6094db43d@163.172.176.22:30303",
    "enode://687343483ca41132a16c9ab67b49e9997a34ec38ddb6dd60bf45f9a0ea4c50362f902553d813af44ab1cdb246fc384d4c74b4437c15cefe3bb0e87b399dbb5bb@163.172.176.22:30403",
    "enode://2a3d6c1c86546831e5bb2684ff0ed6d931bdacf3c6cd344706452a1e78c41442d38c62317096175dcea6517959f40ac789f76356348e0a17ee53563cbdf2db48@163.172.176.22:30503",
    "enode://71bb01b58165e3262aea2d3b06dbf9abb8d5512d96e5000e7e41ab2138b47be685935d3eb119fc25e1413db00d8db231fd9d59555a1cd75229821559b6a4eb51@51.15.85.243:30303",
    "enode://7afd119c549a7ab02b3f7bd77ef3490b6d660d5c49d0734a0c8bb23195ced4ace0bf5cde673cd5cfd07dd8d759277f3d8408eb73dc3c217bbe00f0027d06eee9@51.15.85.243:30403",
    "enode://da8af0869e4e8047f21c1ac016b94a7b7d8e935dddd28d4272f88a1ceaee7c15e7deec9b6fd195ed3bc43748893111ebf2b2479ff44a8025ab8d598f3c97b589@51.15.85.243:30503",
    "enode://7ebaa6a8ce2547f10e34fab9cc5626b86d67934a86e1fb36145c0b89fcc7b9315dd6d0a8cc5808d11a55bdc14c78ff675ca956dfec53837b4f1a97392b15ec23@51.15.35.110:30303",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Ropsten,
    Rinkeby,
    Mainnet,
}

impl Network {
    /// Declaration order of the built-in cluster table.
    pub const ALL: [Network; 3] = [Network::Ropsten, Network::Rinkeby, Network::Mainnet];

    pub fn network_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Ropsten => 3,
            Network::Rinkeby => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Ropsten => "ropsten",
            Network::Rinkeby => "rinkeby",
        }
    }

    pub fn from_name(name: &str) -> Option<Network> {
        Network::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(name))
    }

    pub fn cluster(&self) -> Arc<Cluster> {
        match self {
            Network::Mainnet => MAINNET.clone(),
            Network::Ropsten => ROPSTEN.clone(),
            Network::Rinkeby => RINKEBY.clone(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn nodes(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|node| node.to_string()).collect()
}

pub static ROPSTEN: LazyLock<Arc<Cluster>> = LazyLock::new(|| {
    Cluster::new(
        Network::Ropsten.network_id(),
        false,
        nodes(ROPSTEN_STATIC_NODES),
        vec![],
    )
    .into()
});

pub static RINKEBY: LazyLock<Arc<Cluster>> = LazyLock::new(|| {
    Cluster::new(
        Network::Rinkeby.network_id(),
        true,
        vec![],
        nodes(RINKEBY_BOOT_NODES),
    )
    .into()
});

pub static MAINNET: LazyLock<Arc<Cluster>> = LazyLock::new(|| {
    Cluster::new(
        Network::Mainnet.network_id(),
        false,
        nodes(MAINNET_STATIC_NODES),
        vec![],
    )
    .into()
});

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Network::Ropsten, 3, false, 2, 0)]
    #[case(Network::Rinkeby, 4, true, 0, 2)]
    #[case(Network::Mainnet, 1, false, 7, 0)]
    fn test_builtin_cluster_shape(
        #[case] network: Network,
        #[case] network_id: u64,
        #[case] discovery_enabled: bool,
        #[case] static_nodes: usize,
        #[case] boot_nodes: usize,
    ) {
        let cluster = network.cluster();

        assert_eq!(cluster.network_id(), network_id);
        assert_eq!(cluster.discovery_enabled(), discovery_enabled);
        assert_eq!(cluster.static_nodes().len(), static_nodes);
        assert_eq!(cluster.boot_nodes().len(), boot_nodes);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Network::from_name("mainnet"), Some(Network::Mainnet));
        assert_eq!(Network::from_name("Rinkeby"), Some(Network::Rinkeby));
        assert_eq!(Network::from_name("goerli"), None);
    }

    #[test]
    fn test_builtin_nodes_reparse_byte_for_byte() {
        for network in Network::ALL {
            let cluster = network.cluster();
            for node in cluster.static_nodes().iter().chain(cluster.boot_nodes()) {
                let enode: crate::enode::Enode = node.parse().unwrap();
                assert_eq!(&enode.to_string(), node, "{network}");
            }
        }
    }
}
