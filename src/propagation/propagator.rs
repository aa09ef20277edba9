//! Link Propagator
//!
//! Fans an accepted link out to every known peer. Each delivery is its own
//! pool task with its own timeout, so a slow or dead peer only costs its own
//! slot. Deliveries are at most once: there are no retries and no acks.

use super::protocol::peer_links_url;
use super::types::DeliveryError;
use crate::executor::pool::TaskPool;
use crate::links::types::Link;
use crate::peers::registry::PeerRegistry;

use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;

pub struct Propagator {
    peers: Arc<PeerRegistry>,
    http_client: reqwest::Client,
    tasks: TaskPool,
    timeout: Duration,
}

impl Propagator {
    pub fn new(
        peers: Arc<PeerRegistry>,
        http_client: reqwest::Client,
        tasks: TaskPool,
        timeout: Duration,
    ) -> Self {
        Self {
            peers,
            http_client,
            tasks,
            timeout,
        }
    }

    /// Schedules one delivery of `link` per peer in the current registry snapshot.
    ///
    /// Returns the number of deliveries scheduled; deliveries the pool has no
    /// room for are dropped. Does not wait for them.
    pub async fn broadcast(&self, link: &Link) -> usize {
        let mut payload = match serde_json::to_vec(link) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Cannot serialize link {}: {}", link.url, e);
                return 0;
            }
        };
        payload.push(b'\n');

        let peers = self.peers.snapshot().await;
        let mut scheduled = 0;
        for peer in &peers {
            let client = self.http_client.clone();
            let peer = peer.clone();
            let payload = payload.clone();
            let timeout = self.timeout;
            let url = link.url.clone();

            let spawned = self.tasks.spawn("delivery", async move {
                match deliver(&client, &peer, payload, timeout).await {
                    Ok(()) => tracing::debug!("Shared {} with {}", url, peer),
                    Err(e) => tracing::warn!("Failed to share {}: {}", url, e),
                }
            });
            match spawned {
                Ok(()) => scheduled += 1,
                Err(e) => tracing::warn!("Dropping delivery of {}: {}", link.url, e),
            }
        }

        if !peers.is_empty() {
            tracing::info!(
                "Gossiping {} to {} of {} peers",
                link.url,
                scheduled,
                peers.len()
            );
        }
        scheduled
    }
}

/// POSTs a serialized link to one peer's submission endpoint.
pub async fn deliver(
    client: &reqwest::Client,
    peer: &str,
    payload: Vec<u8>,
    timeout: Duration,
) -> Result<(), DeliveryError> {
    let response = client
        .post(peer_links_url(peer))
        .header(CONTENT_TYPE, "application/json")
        .body(payload)
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| DeliveryError::Request {
            peer: peer.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(DeliveryError::Status {
            peer: peer.to_string(),
            status: response.status(),
        });
    }

    Ok(())
}
