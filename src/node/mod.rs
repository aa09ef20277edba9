//! Node Assembly
//!
//! Builds the link store, peer registry, enricher, propagator and pipeline,
//! wires them together by explicit construction and exposes them over HTTP.
//!
//! ## Routes
//! - `GET /`: HTML listing of accepted links.
//! - `GET|POST /links`: JSON listing / link submission (clients and peers).
//! - `GET|POST /peers`: JSON listing / peer-list merge.

use crate::config::NodeConfig;
use crate::enrichment::enricher::Enricher;
use crate::executor::pool::TaskPool;
use crate::ingestion::handlers::handle_submit_link;
use crate::ingestion::pipeline::IngestionPipeline;
use crate::links::handlers::{handle_home, handle_list_links};
use crate::links::store::LinkStore;
use crate::peers::handlers::{handle_list_peers, handle_merge_peers};
use crate::peers::registry::PeerRegistry;
use crate::propagation::propagator::Propagator;
use crate::propagation::protocol::{ENDPOINT_HOME, ENDPOINT_LINKS, ENDPOINT_PEERS};

use anyhow::Result;
use axum::routing::get;
use axum::{Extension, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A running link-sharing node. Clones share all state.
#[derive(Clone)]
pub struct Node {
    config: Arc<NodeConfig>,
    store: Arc<LinkStore>,
    peers: Arc<PeerRegistry>,
    pipeline: Arc<IngestionPipeline>,
    tasks: TaskPool,
}

impl Node {
    pub async fn new(config: NodeConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("link-gossip/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let tasks = TaskPool::with_limits(config.max_in_flight, config.max_queued);
        let store = Arc::new(LinkStore::new());
        let peers = Arc::new(PeerRegistry::new(config.max_peers));

        let enricher = Arc::new(Enricher::new(
            http_client.clone(),
            config.fetch_timeout,
            config.max_body_bytes,
        ));
        let propagator = Arc::new(Propagator::new(
            peers.clone(),
            http_client,
            tasks.clone(),
            config.delivery_timeout,
        ));
        let pipeline = Arc::new(IngestionPipeline::new(
            store.clone(),
            enricher,
            propagator,
            tasks.clone(),
        ));

        if !config.seed_peers.is_empty() {
            let report = peers.merge(&config.seed_peers).await;
            tracing::info!(
                "Seeded {} peers ({} rejected)",
                report.added,
                report.rejected.len()
            );
        }

        Ok(Self {
            config: Arc::new(config),
            store,
            peers,
            pipeline,
            tasks,
        })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(ENDPOINT_HOME, get(handle_home))
            .route(
                ENDPOINT_LINKS,
                get(handle_list_links).post(handle_submit_link),
            )
            .route(
                ENDPOINT_PEERS,
                get(handle_list_peers).post(handle_merge_peers),
            )
            .layer(Extension(self.config.clone()))
            .layer(Extension(self.store.clone()))
            .layer(Extension(self.peers.clone()))
            .layer(Extension(self.pipeline.clone()))
    }

    /// Serves HTTP on `listener` until `shutdown` resolves, then drains
    /// background work for at most the configured shutdown timeout.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped, draining background tasks");
        self.tasks.shutdown(self.config.shutdown_timeout).await;

        Ok(())
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<LinkStore> {
        &self.store
    }

    pub fn peers(&self) -> &Arc<PeerRegistry> {
        &self.peers
    }

    pub fn pipeline(&self) -> &Arc<IngestionPipeline> {
        &self.pipeline
    }

    pub fn tasks(&self) -> &TaskPool {
        &self.tasks
    }
}
