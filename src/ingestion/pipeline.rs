//! Ingestion Pipeline
//!
//! Drives one submission from receipt to commit:
//!
//! 1. **Validate**: non-empty, absolute URL, else `BadInput`.
//! 2. **Dedup check**: known URL, `Duplicate`.
//! 3. **Enrich**: only when the submission has no title. The store lock is
//!    not held during the fetch.
//! 4. **Commit**: re-check and append in one exclusive section. The re-check
//!    is required: another submission of the same URL may have committed
//!    while this one was fetching.
//! 5. **Propagate**: schedule gossip deliveries without waiting for them.

use super::types::IngestError;
use crate::enrichment::enricher::Enricher;
use crate::executor::pool::TaskPool;
use crate::links::store::LinkStore;
use crate::links::types::Link;
use crate::propagation::propagator::Propagator;

use std::sync::Arc;

pub struct IngestionPipeline {
    store: Arc<LinkStore>,
    enricher: Arc<Enricher>,
    propagator: Arc<Propagator>,
    tasks: TaskPool,
}

impl IngestionPipeline {
    pub fn new(
        store: Arc<LinkStore>,
        enricher: Arc<Enricher>,
        propagator: Arc<Propagator>,
        tasks: TaskPool,
    ) -> Self {
        Self {
            store,
            enricher,
            propagator,
            tasks,
        }
    }

    /// Validates `link` and schedules its ingestion on the task pool.
    ///
    /// Only validation failures and a full pool are returned. Everything
    /// after that is reported through logs.
    pub fn submit(self: &Arc<Self>, link: Link) -> Result<(), IngestError> {
        validate_submission(&link)?;

        let pipeline = self.clone();
        self.tasks.spawn("ingest", async move {
            pipeline.ingest_logged(link).await;
        })?;

        Ok(())
    }

    /// Runs the whole pipeline for one submission and returns the committed link.
    pub async fn ingest(&self, link: Link) -> Result<Link, IngestError> {
        validate_submission(&link)?;

        // Shared lock only: insert_if_absent re-checks under the write lock.
        if self.store.contains(&link.url).await {
            return Err(IngestError::Duplicate(link.url));
        }

        let link = if link.is_enriched() {
            link
        } else {
            let url = link.url.clone();
            self.enricher
                .enrich(link)
                .await
                .map_err(|source| IngestError::EnrichmentFailed { url, source })?
        };

        if !self.store.insert_if_absent(link.clone()).await {
            return Err(IngestError::Duplicate(link.url));
        }
        tracing::info!("Accepted {} ({:?})", link.url, link.title);

        self.propagator.broadcast(&link).await;

        Ok(link)
    }

    async fn ingest_logged(&self, link: Link) {
        match self.ingest(link).await {
            Ok(_) => {}
            Err(e @ IngestError::Duplicate(_)) => tracing::debug!("{}", e),
            Err(e) => tracing::warn!("{}", e),
        }
    }
}

/// Structural checks a submission must pass before anything else happens.
pub fn validate_submission(link: &Link) -> Result<(), IngestError> {
    if link.url.is_empty() {
        return Err(IngestError::BadInput("no url".to_string()));
    }

    reqwest::Url::parse(&link.url)
        .map_err(|e| IngestError::BadInput(format!("bad url {:?}: {}", link.url, e)))?;

    Ok(())
}
