use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum EnodeError {
    #[error("missing enode:// scheme")]
    MissingScheme,
    #[error("missing '@' between node id and address")]
    MissingAt,
    #[error("node id must be 128 hex characters, got {0}")]
    InvalidIdLength(usize),
    #[error("node id is not valid hex: {0}")]
    InvalidHex(String),
    #[error("node id is not a secp256k1 public key")]
    InvalidPublicKey,
    #[error("missing host")]
    MissingHost,
    #[error("invalid host: {0}")]
    InvalidHost(String),
    #[error("missing port")]
    MissingPort,
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("unsupported query parameter: {0}")]
    UnsupportedQuery(String),
}

/// A cluster table that must not be handed out to consumers.
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("duplicate network id {network_id}")]
    DuplicateNetworkId { network_id: u64 },
    #[error("network {network_id}: malformed node {node:?}: {source}")]
    MalformedNode {
        network_id: u64,
        node: String,
        #[source]
        source: EnodeError,
    },
    #[error("invalid JSON cluster table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML cluster table: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported cluster file format: {0:?}")]
    UnsupportedFormat(PathBuf),
}
