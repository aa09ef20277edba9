//! Peer Registry Module
//!
//! Keeps the addresses of the nodes we gossip to. Peers arrive from the
//! `/peers` endpoint or the `--peer` startup flag; there is no discovery,
//! health checking or eviction.

pub mod handlers;
pub mod registry;
pub mod types;
