//! Link Data Types
//!
//! The `Link` is both the stored record and the wire object exchanged with
//! clients and peers. Field names on the wire are `URL` and `Title`.

use serde::{Deserialize, Serialize};

/// A shared link.
///
/// `url` is the identity key used for deduplication. `title` stays empty until
/// the link is enriched, either locally or by the peer that gossiped it to us.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "URL", alias = "url", default)]
    pub url: String,
    #[serde(rename = "Title", alias = "title", default)]
    pub title: String,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
        }
    }

    pub fn with_title(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// True when the link already carries a title and needs no enrichment.
    pub fn is_enriched(&self) -> bool {
        !self.title.is_empty()
    }
}
