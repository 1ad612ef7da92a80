use std::{
    fmt,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use alloy_primitives::B512;
use discv5::enr::k256::ecdsa::VerifyingKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::EnodeError;

const SCHEME: &str = "enode://";
const DISCPORT_PARAM: &str = "discport=";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    Ip(IpAddr),
    Dns(String),
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ip(IpAddr::V6(ip)) => write!(f, "[{ip}]"),
            Host::Ip(IpAddr::V4(ip)) => write!(f, "{ip}"),
            Host::Dns(name) => f.write_str(name),
        }
    }
}

impl FromStr for Host {
    type Err = EnodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EnodeError::MissingHost);
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return inner
                .parse()
                .map(|ip| Host::Ip(IpAddr::V6(ip)))
                .map_err(|_| EnodeError::InvalidHost(s.to_string()));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return match ip {
                // v6 addresses must be bracketed, otherwise the port is ambiguous
                IpAddr::V6(_) => Err(EnodeError::InvalidHost(s.to_string())),
                IpAddr::V4(_) => Ok(Host::Ip(ip)),
            };
        }
        if is_valid_hostname(s) {
            Ok(Host::Dns(s.to_string()))
        } else {
            Err(EnodeError::InvalidHost(s.to_string()))
        }
    }
}

fn is_valid_hostname(name: &str) -> bool {
    name.len() <= 253
        && name.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

/// A parsed `enode://<id>@<host>:<port>[?discport=<port>]` node address.
///
/// `id` is the uncompressed secp256k1 public key of the node without the
/// leading `0x04` tag. Parsing rejects ids that are not points on the curve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enode {
    pub id: B512,
    pub host: Host,
    pub tcp_port: u16,
    pub discovery_port: u16,
}

impl Enode {
    /// Returns `None` for DNS hosts, which the caller has to resolve.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self.host {
            Host::Ip(ip) => Some(SocketAddr::new(ip, self.tcp_port)),
            Host::Dns(_) => None,
        }
    }

    pub fn verifying_key(&self) -> Result<VerifyingKey, EnodeError> {
        let mut sec1 = [0u8; 65];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(self.id.as_slice());
        VerifyingKey::from_sec1_bytes(&sec1).map_err(|_| EnodeError::InvalidPublicKey)
    }
}

impl fmt::Display for Enode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SCHEME}{}@{}:{}",
            hex::encode(self.id),
            self.host,
            self.tcp_port
        )?;
        if self.discovery_port != self.tcp_port {
            write!(f, "?{DISCPORT_PARAM}{}", self.discovery_port)?;
        }
        Ok(())
    }
}

impl FromStr for Enode {
    type Err = EnodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(SCHEME).ok_or(EnodeError::MissingScheme)?;
        let (id_hex, rest) = rest.split_once('@').ok_or(EnodeError::MissingAt)?;

        if id_hex.len() != 128 {
            return Err(EnodeError::InvalidIdLength(id_hex.len()));
        }
        let mut id = [0u8; 64];
        hex::decode_to_slice(id_hex, &mut id)
            .map_err(|err| EnodeError::InvalidHex(err.to_string()))?;

        let (address, query) = match rest.split_once('?') {
            Some((address, query)) => (address, Some(query)),
            None => (rest, None),
        };

        let (host, port) = split_host_port(address)?;
        let host = host.parse()?;
        let tcp_port = parse_port(port)?;

        let discovery_port = match query {
            None => tcp_port,
            Some(query) => match query.strip_prefix(DISCPORT_PARAM) {
                Some(port) => parse_port(port)?,
                None => return Err(EnodeError::UnsupportedQuery(query.to_string())),
            },
        };

        let enode = Enode {
            id: B512::from(id),
            host,
            tcp_port,
            discovery_port,
        };
        enode.verifying_key()?;
        Ok(enode)
    }
}

fn split_host_port(address: &str) -> Result<(&str, &str), EnodeError> {
    // "[::1]:30303" keeps the colons of the v6 address inside the brackets
    let split_at = match address.rfind(']') {
        Some(close) => address[close..].find(':').map(|i| close + i),
        None => address.rfind(':'),
    };
    match split_at {
        Some(i) => Ok((&address[..i], &address[i + 1..])),
        None if address.is_empty() => Err(EnodeError::MissingHost),
        None => Err(EnodeError::MissingPort),
    }
}

fn parse_port(port: &str) -> Result<u16, EnodeError> {
    if port.is_empty() {
        return Err(EnodeError::MissingPort);
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EnodeError::InvalidPort(port.to_string()));
    }
    port.parse().map_err(|_| EnodeError::InvalidPort(port.to_string()))
}

impl Serialize for Enode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Enode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let result: String = Deserialize::deserialize(deserializer)?;
        result.parse().map_err(serde::de::Error::custom)
    }
}
