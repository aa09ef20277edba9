use super::render::render_listing;
use super::store::LinkStore;
use super::types::Link;
use crate::config::NodeConfig;

use axum::response::Html;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_home(
    Extension(store): Extension<Arc<LinkStore>>,
    Extension(config): Extension<Arc<NodeConfig>>,
) -> Html<String> {
    let links = store.snapshot().await;
    Html(render_listing(&links, &config.http_addr.to_string()))
}

pub async fn handle_list_links(Extension(store): Extension<Arc<LinkStore>>) -> Json<Vec<Link>> {
    Json(store.snapshot().await)
}
