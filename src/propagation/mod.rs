//! Gossip Propagation Module
//!
//! Best-effort dissemination of accepted links to known peers.
//!
//! ## Policy
//! - **Fan-out**: one independent delivery per peer per accepted link.
//! - **Isolation**: a failed delivery affects neither other peers nor the local commit.
//! - **Loops**: none are detected; a link echoed back is dropped by the origin's dedup check.

pub mod propagator;
pub mod protocol;
pub mod types;

#[cfg(test)]
mod tests;
