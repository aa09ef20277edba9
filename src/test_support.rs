//! Loopback fixtures shared by the unit tests.
//!
//! Every fixture binds a real listener on `127.0.0.1:0` and serves it with axum,
//! so the code under test talks to them over HTTP exactly as it would in production.

use crate::links::types::Link;

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A fake website serving one fixed page on every path.
pub struct StubSite {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl StubSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct PageState {
    content_type: Option<&'static str>,
    body: &'static str,
    delay: Duration,
    hits: Arc<AtomicUsize>,
}

async fn serve_page(State(state): State<PageState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let mut response = Response::new(Body::from(state.body));
    if let Some(content_type) = state.content_type {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(content_type),
        );
    }
    response
}

/// Starts a site answering every GET with `body`.
///
/// `content_type: None` sends no `Content-Type` header at all.
pub async fn spawn_site(
    content_type: Option<&'static str>,
    body: &'static str,
    delay: Duration,
) -> StubSite {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = PageState {
        content_type,
        body,
        delay,
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/", get(serve_page))
        .route("/*path", get(serve_page))
        .with_state(state);

    StubSite {
        addr: serve(app).await,
        hits,
    }
}

pub async fn spawn_html_site(title: &'static str) -> StubSite {
    let body: &'static str = Box::leak(
        format!(
            "<!doctype html><html><head><title>{}</title></head><body>hi</body></html>",
            title
        )
        .into_boxed_str(),
    );
    spawn_site(Some("text/html; charset=utf-8"), body, Duration::ZERO).await
}

/// A fake peer recording every link POSTed to its `/links` endpoint.
pub struct PeerSink {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Link>>>,
}

impl PeerSink {
    pub fn peer_addr(&self) -> String {
        self.addr.to_string()
    }

    pub fn received(&self) -> Vec<Link> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct SinkState {
    received: Arc<Mutex<Vec<Link>>>,
    status: StatusCode,
}

async fn record_link(State(state): State<SinkState>, Json(link): Json<Link>) -> StatusCode {
    state.received.lock().unwrap().push(link);
    state.status
}

pub async fn spawn_peer_sink() -> PeerSink {
    spawn_peer_sink_with_status(StatusCode::OK).await
}

pub async fn spawn_peer_sink_with_status(status: StatusCode) -> PeerSink {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(crate::propagation::protocol::ENDPOINT_LINKS, post(record_link))
        .with_state(SinkState {
            received: received.clone(),
            status,
        });

    PeerSink {
        addr: serve(app).await,
        received,
    }
}

/// An address nothing listens on.
pub fn unreachable_addr() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

/// Polls `condition` until it holds or two seconds pass.
pub async fn eventually<F>(mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Like `eventually`, for conditions that need to await (e.g. store reads).
pub async fn eventually_async<F, Fut>(mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..200 {
        if condition().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition().await
}
