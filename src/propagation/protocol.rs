//! Gossip Network Protocol
//!
//! Endpoints shared by clients and peers. A gossip delivery is an ordinary
//! submission: the sending node POSTs the single-link JSON object to the
//! receiving node's submission endpoint.

/// Submission endpoint (POST) and JSON listing (GET).
pub const ENDPOINT_LINKS: &str = "/links";
/// Peer-list endpoint (POST) and peer listing (GET).
pub const ENDPOINT_PEERS: &str = "/peers";
/// HTML listing of the link store.
pub const ENDPOINT_HOME: &str = "/";

/// URL of a peer's submission endpoint.
pub fn peer_links_url(peer: &str) -> String {
    format!("http://{}{}", peer, ENDPOINT_LINKS)
}
