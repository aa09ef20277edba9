//! Peer-to-peer Link Sharing Node
//!
//! This library crate holds the node's subsystems; `main.rs` only parses flags,
//! sets up logging and runs a `Node`.
//!
//! ## Architecture Modules
//! - **`links`**: the insertion-ordered, deduplicated store of accepted links and its listings.
//! - **`peers`**: the registry of peer addresses links are gossiped to.
//! - **`enrichment`**: fetches untitled links and extracts the page title, HTML only.
//! - **`ingestion`**: the submission pipeline (validate, dedup, enrich, commit, propagate).
//! - **`propagation`**: best-effort fan-out of accepted links to every known peer.
//! - **`executor`**: the bounded, tracked pool running all background work.
//! - **`node`**: wiring of the above and the HTTP routes.
//! - **`config`**: node settings and command-line flags.

pub mod config;
pub mod enrichment;
pub mod executor;
pub mod ingestion;
pub mod links;
pub mod node;
pub mod peers;
pub mod propagation;

#[cfg(test)]
mod test_support;
