use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted peer address was not registered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PeerAddrError {
    #[error("peer address is empty")]
    Empty,

    #[error("peer address {0:?} is not host:port")]
    Malformed(String),

    #[error("peer address {0:?} has an invalid port")]
    InvalidPort(String),

    #[error("peer registry is full ({capacity} peers), refusing {addr:?}")]
    RegistryFull { addr: String, capacity: usize },
}

/// Result of merging a peer list into the registry.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of addresses that were not known before.
    pub added: usize,
    /// Addresses that were refused, with the reason.
    pub rejected: Vec<RejectedPeer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectedPeer {
    pub addr: String,
    pub reason: String,
}
