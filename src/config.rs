//! Node configuration and command-line parsing.

use crate::executor::pool::{DEFAULT_MAX_IN_FLIGHT, DEFAULT_MAX_QUEUED};
use crate::peers::registry::DEFAULT_MAX_PEERS;

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Address the HTTP service listens on.
    pub http_addr: SocketAddr,
    /// Peers registered at startup.
    pub seed_peers: Vec<String>,
    pub fetch_timeout: Duration,
    pub delivery_timeout: Duration,
    pub max_in_flight: usize,
    /// Background units allowed to wait for a slot before new work is refused.
    pub max_queued: usize,
    pub max_peers: usize,
    pub max_body_bytes: usize,
    pub shutdown_timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 7000)),
            seed_peers: Vec::new(),
            fetch_timeout: Duration::from_secs(5),
            delivery_timeout: Duration::from_secs(2),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            max_queued: DEFAULT_MAX_QUEUED,
            max_peers: DEFAULT_MAX_PEERS,
            max_body_bytes: 1024 * 1024,
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "link-gossip", version, about = "Peer-to-peer link sharing node")]
pub struct Cli {
    /// HTTP service address (`host:port` or `:port`)
    #[arg(long = "http", default_value = ":7000", value_parser = parse_listen_addr)]
    pub http_addr: SocketAddr,

    /// Peer to gossip to, as host:port (repeatable)
    #[arg(long = "peer")]
    pub peers: Vec<String>,

    /// Timeout for fetching a link target, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub fetch_timeout_ms: u64,

    /// Timeout for one gossip delivery, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delivery_timeout_ms: u64,

    /// Maximum concurrent background tasks
    #[arg(long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    pub max_in_flight: usize,

    /// Maximum background tasks waiting to run before submissions get 503
    #[arg(long, default_value_t = DEFAULT_MAX_QUEUED)]
    pub max_queued: usize,

    /// Maximum number of registered peers
    #[arg(long, default_value_t = DEFAULT_MAX_PEERS)]
    pub max_peers: usize,

    /// Maximum bytes read from a page while looking for its title
    #[arg(long, default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    /// How long shutdown waits for background tasks, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub shutdown_timeout_ms: u64,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> NodeConfig {
        NodeConfig {
            http_addr: self.http_addr,
            seed_peers: self.peers,
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            delivery_timeout: Duration::from_millis(self.delivery_timeout_ms),
            max_in_flight: self.max_in_flight,
            max_queued: self.max_queued,
            max_peers: self.max_peers,
            max_body_bytes: self.max_body_bytes,
            shutdown_timeout: Duration::from_millis(self.shutdown_timeout_ms),
        }
    }
}

/// Parses a listen address; a bare `:port` binds every interface.
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, String> {
    let value = value.trim();
    let full = if value.starts_with(':') {
        format!("0.0.0.0{}", value)
    } else {
        value.to_string()
    };
    full.parse()
        .map_err(|e| format!("invalid listen address {:?}: {}", value, e))
}
