use thiserror::Error;

/// A single peer did not take a gossiped link.
///
/// Isolated to that peer: never retried and never reported upstream.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery to {peer} failed: {source}")]
    Request {
        peer: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("delivery to {peer} answered {status}")]
    Status {
        peer: String,
        status: reqwest::StatusCode,
    },
}
