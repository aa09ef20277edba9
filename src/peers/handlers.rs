use super::registry::PeerRegistry;
use super::types::MergeReport;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_merge_peers(
    Extension(peers): Extension<Arc<PeerRegistry>>,
    body: Bytes,
) -> (StatusCode, Json<MergeReport>) {
    let list: Vec<String> = match serde_json::from_slice(&body) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("peers - bad peer list: {}", e);
            return (StatusCode::BAD_REQUEST, Json(MergeReport::default()));
        }
    };

    let report = peers.merge(&list).await;
    tracing::debug!(
        "peers - merged {} of {} submitted addresses",
        report.added,
        list.len()
    );

    (StatusCode::OK, Json(report))
}

pub async fn handle_list_peers(Extension(peers): Extension<Arc<PeerRegistry>>) -> Json<Vec<String>> {
    Json(peers.snapshot().await)
}
