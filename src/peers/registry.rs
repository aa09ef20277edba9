//! Peer Registry
//!
//! The set of `host:port` addresses this node gossips accepted links to.
//! Peers are only ever added: an unreachable peer is discovered at delivery
//! time and simply keeps failing.

use super::types::{MergeReport, PeerAddrError, RejectedPeer};

use std::collections::BTreeSet;
use tokio::sync::RwLock;

pub const DEFAULT_MAX_PEERS: usize = 1024;

pub struct PeerRegistry {
    peers: RwLock<BTreeSet<String>>,
    capacity: usize,
}

impl PeerRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            peers: RwLock::new(BTreeSet::new()),
            capacity,
        }
    }

    /// Adds every valid address that is not yet known.
    ///
    /// Merging is idempotent: known addresses are skipped silently and do not
    /// count towards `added`. Invalid addresses, and new ones arriving once the
    /// registry is at capacity, are reported in `rejected`.
    pub async fn merge<I, S>(&self, addrs: I) -> MergeReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = MergeReport::default();
        let mut peers = self.peers.write().await;

        for addr in addrs {
            let addr = addr.as_ref().trim();

            if let Err(e) = validate_peer_addr(addr) {
                tracing::warn!("Ignoring peer {:?}: {}", addr, e);
                report.rejected.push(RejectedPeer {
                    addr: addr.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }

            if peers.contains(addr) {
                continue;
            }

            if peers.len() >= self.capacity {
                let e = PeerAddrError::RegistryFull {
                    addr: addr.to_string(),
                    capacity: self.capacity,
                };
                tracing::warn!("{}", e);
                report.rejected.push(RejectedPeer {
                    addr: addr.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }

            peers.insert(addr.to_string());
            report.added += 1;
            tracing::info!("Registered peer {}", addr);
        }

        report
    }

    /// Sorted copy of the known peers, used for fan-out.
    pub async fn snapshot(&self) -> Vec<String> {
        self.peers.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.peers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.peers.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PEERS)
    }
}

/// Checks that `addr` looks like `host:port`.
///
/// Reachability is not checked. IPv6 hosts must be bracketed (`[::1]:7000`).
pub fn validate_peer_addr(addr: &str) -> Result<(), PeerAddrError> {
    if addr.is_empty() {
        return Err(PeerAddrError::Empty);
    }

    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| PeerAddrError::Malformed(addr.to_string()))?;

    let host_ok = !host.is_empty()
        && !host
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@'))
        && (!host.contains(':') || (host.starts_with('[') && host.ends_with(']')));
    if !host_ok {
        return Err(PeerAddrError::Malformed(addr.to_string()));
    }

    match port.parse::<u16>() {
        Ok(p) if p != 0 => Ok(()),
        _ => Err(PeerAddrError::InvalidPort(addr.to_string())),
    }
}
