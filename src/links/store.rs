//! In-memory Link Store
//!
//! Holds the canonical, insertion-ordered list of accepted links. A URL index
//! sits next to the list so membership checks do not scan the sequence.

use super::types::Link;

use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
struct LinkIndex {
    links: Vec<Link>,
    urls: HashSet<String>,
}

/// The node's set of accepted links.
///
/// Readers (listing) share the lock; every mutation takes it exclusively and
/// never holds it across an await point other than the lock acquisition.
#[derive(Default)]
pub struct LinkStore {
    inner: RwLock<LinkIndex>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a link with this URL has been committed.
    pub async fn contains(&self, url: &str) -> bool {
        self.inner.read().await.urls.contains(url)
    }

    /// Appends without checking for duplicates.
    ///
    /// Callers must have checked `contains` under their own synchronisation;
    /// use `insert_if_absent` when the check and the append must be atomic.
    pub async fn append(&self, link: Link) {
        let mut index = self.inner.write().await;
        index.urls.insert(link.url.clone());
        index.links.push(link);
    }

    /// Checks for the URL and appends in one exclusive section.
    ///
    /// Returns `false` (and stores nothing) when the URL is already present.
    pub async fn insert_if_absent(&self, link: Link) -> bool {
        let mut index = self.inner.write().await;
        if index.urls.contains(&link.url) {
            return false;
        }
        index.urls.insert(link.url.clone());
        index.links.push(link);
        true
    }

    /// Copy of the links in commit order. Not kept up to date after return.
    pub async fn snapshot(&self) -> Vec<Link> {
        self.inner.read().await.links.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.links.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
