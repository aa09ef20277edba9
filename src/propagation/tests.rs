//! Propagation Tests
//!
//! ## Test Scopes
//! - **Single delivery**: wire payload reaches a peer's `/links`.
//! - **Fan-out isolation**: one dead peer does not stop the others.
//! - **Back-pressure**: deliveries beyond the pool's capacity are dropped.
//! - **Failure reporting**: transport errors and non-2xx answers.

#[cfg(test)]
mod tests {
    use crate::executor::pool::TaskPool;
    use crate::links::types::Link;
    use crate::peers::registry::PeerRegistry;
    use crate::propagation::propagator::{Propagator, deliver};
    use crate::propagation::protocol::peer_links_url;
    use crate::propagation::types::DeliveryError;
    use crate::test_support::{
        spawn_peer_sink, spawn_peer_sink_with_status, unreachable_addr,
    };
    use axum::http::StatusCode;
    use std::sync::Arc;
    use std::time::Duration;

    fn propagator(peers: Arc<PeerRegistry>, tasks: TaskPool) -> Propagator {
        Propagator::new(
            peers,
            reqwest::Client::new(),
            tasks,
            Duration::from_millis(500),
        )
    }

    #[test]
    fn test_peer_links_url() {
        assert_eq!(peer_links_url("peer1:7000"), "http://peer1:7000/links");
    }

    #[tokio::test]
    async fn test_broadcast_without_peers_schedules_nothing() {
        let tasks = TaskPool::new(4);
        let propagator = propagator(Arc::new(PeerRegistry::default()), tasks.clone());

        let scheduled = propagator
            .broadcast(&Link::with_title("http://example.com", "Example"))
            .await;

        assert_eq!(scheduled, 0);
        assert_eq!(tasks.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_broadcast_delivers_link_to_peer() {
        let sink = spawn_peer_sink().await;
        let peers = Arc::new(PeerRegistry::default());
        peers.merge([sink.peer_addr()]).await;
        let tasks = TaskPool::new(4);

        let link = Link::with_title("http://example.com", "Example");
        let scheduled = propagator(peers, tasks.clone()).broadcast(&link).await;
        assert!(tasks.shutdown(Duration::from_secs(5)).await);

        assert_eq!(scheduled, 1);
        assert_eq!(sink.received(), vec![link]);
    }

    #[tokio::test]
    async fn test_broadcast_isolates_unreachable_peer() {
        let sink_a = spawn_peer_sink().await;
        let sink_b = spawn_peer_sink().await;
        let peers = Arc::new(PeerRegistry::default());
        peers
            .merge([sink_a.peer_addr(), unreachable_addr(), sink_b.peer_addr()])
            .await;
        let tasks = TaskPool::new(4);

        let link = Link::with_title("http://example.com/a", "A");
        let scheduled = propagator(peers, tasks.clone()).broadcast(&link).await;
        assert!(tasks.shutdown(Duration::from_secs(5)).await);

        assert_eq!(scheduled, 3);
        assert_eq!(sink_a.received(), vec![link.clone()]);
        assert_eq!(sink_b.received(), vec![link]);
    }

    #[tokio::test]
    async fn test_broadcast_uses_snapshot_at_call_time() {
        let sink_a = spawn_peer_sink().await;
        let sink_b = spawn_peer_sink().await;
        let peers = Arc::new(PeerRegistry::default());
        peers.merge([sink_a.peer_addr()]).await;
        let tasks = TaskPool::new(4);
        let propagator = propagator(peers.clone(), tasks.clone());

        propagator.broadcast(&Link::new("http://first.example")).await;
        peers.merge([sink_b.peer_addr()]).await;
        propagator.broadcast(&Link::new("http://second.example")).await;
        assert!(tasks.shutdown(Duration::from_secs(5)).await);

        assert_eq!(sink_a.received().len(), 2);
        assert_eq!(sink_b.received(), vec![Link::new("http://second.example")]);
    }

    #[tokio::test]
    async fn test_deliver_reports_unreachable_peer() {
        let client = reqwest::Client::new();
        let peer = unreachable_addr();

        let result = deliver(&client, &peer, b"{}".to_vec(), Duration::from_millis(500)).await;

        match result {
            Err(DeliveryError::Request { peer: failed, .. }) => assert_eq!(failed, peer),
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_deliver_reports_non_success_status() {
        let sink = spawn_peer_sink_with_status(StatusCode::SERVICE_UNAVAILABLE).await;
        let client = reqwest::Client::new();
        let payload = serde_json::to_vec(&Link::new("http://example.com")).unwrap();

        let result = deliver(&client, &sink.peer_addr(), payload, Duration::from_millis(500)).await;

        match result {
            Err(DeliveryError::Status { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("expected status error, got {:?}", other),
        }
        // The peer still saw the request exactly once
        assert_eq!(sink.received().len(), 1);
    }

    #[tokio::test]
    async fn test_broadcast_drops_deliveries_beyond_pool_capacity() {
        let sink_a = spawn_peer_sink().await;
        let sink_b = spawn_peer_sink().await;
        let peers = Arc::new(PeerRegistry::default());
        peers.merge([sink_a.peer_addr(), sink_b.peer_addr()]).await;
        let tasks = TaskPool::with_limits(1, 0);

        let link = Link::with_title("http://example.com/full", "Full");
        let scheduled = propagator(peers, tasks.clone()).broadcast(&link).await;
        assert!(tasks.shutdown(Duration::from_secs(5)).await);

        assert_eq!(scheduled, 1);
        assert_eq!(sink_a.received().len() + sink_b.received().len(), 1);
    }
}
