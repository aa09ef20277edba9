use thiserror::Error;

/// Failure to derive a title for a link.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The GET request itself failed (connect, timeout, body read).
    #[error("fetch failed: {0}")]
    FetchFailed(#[from] reqwest::Error),

    /// The target did not declare an HTML content type.
    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(String),
}
