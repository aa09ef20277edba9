//! Title Enricher
//!
//! Fetches a link's target and takes the page title from it. Only responses
//! declaring an HTML content type are read; anything else is refused before
//! the body is touched.

use super::title::extract_title;
use super::types::EnrichError;
use crate::links::types::Link;

use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Media type prefix a target must declare to be enriched.
pub const HTML_CONTENT_TYPE: &str = "text/html";

pub struct Enricher {
    http_client: reqwest::Client,
    timeout: Duration,
    max_body_bytes: usize,
}

impl Enricher {
    pub fn new(http_client: reqwest::Client, timeout: Duration, max_body_bytes: usize) -> Self {
        Self {
            http_client,
            timeout,
            max_body_bytes,
        }
    }

    /// Returns `link` with its title filled in from the fetched page.
    ///
    /// The link is consumed; on error it is dropped by the caller.
    pub async fn enrich(&self, mut link: Link) -> Result<Link, EnrichError> {
        link.title = self.fetch_title(&link.url).await?;
        Ok(link)
    }

    /// GETs `url` and extracts the first `<title>`.
    ///
    /// Any status code is accepted; only transport failures are errors.
    pub async fn fetch_title(&self, url: &str) -> Result<String, EnrichError> {
        let mut response = self
            .http_client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !is_html(content_type) {
            return Err(EnrichError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let remaining = self.max_body_bytes - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                tracing::debug!(
                    "Stopped reading {} after {} bytes",
                    url,
                    self.max_body_bytes
                );
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(extract_title(&String::from_utf8_lossy(&body)))
    }
}

/// True when the declared content type starts with `text/html`.
///
/// Headers shorter than the prefix are rejected without slicing past their end.
pub fn is_html(content_type: &str) -> bool {
    content_type.get(..HTML_CONTENT_TYPE.len()) == Some(HTML_CONTENT_TYPE)
}
