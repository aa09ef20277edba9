use super::pipeline::IngestionPipeline;
use super::types::{IngestError, SubmitResponse};
use crate::links::types::Link;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// Submission endpoint, also the target of peer gossip.
///
/// The body is decoded as JSON whatever `Content-Type` says, so plain
/// `curl -d` submissions work. Acknowledges as soon as the payload is valid;
/// dedup, enrichment and propagation happen afterwards on the task pool.
pub async fn handle_submit_link(
    Extension(pipeline): Extension<Arc<IngestionPipeline>>,
    body: Bytes,
) -> (StatusCode, Json<SubmitResponse>) {
    let link: Link = match serde_json::from_slice(&body) {
        Ok(link) => link,
        Err(e) => {
            tracing::warn!("links - unmarshal json: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmitResponse::bad_input(format!("bad JSON: {}", e))),
            );
        }
    };

    match pipeline.submit(link) {
        Ok(()) => (StatusCode::ACCEPTED, Json(SubmitResponse::queued())),
        Err(e @ IngestError::Busy(_)) => {
            tracing::warn!("links - shedding submission: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(SubmitResponse::busy(e.to_string())),
            )
        }
        Err(e) => {
            tracing::warn!("links - rejected submission: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(SubmitResponse::bad_input(e.to_string())),
            )
        }
    }
}
