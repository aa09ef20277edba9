//! Ingestion Data Types
//!
//! Error taxonomy of a submission and the acknowledgement returned to the
//! submitter. Only `BadInput` and `Busy` ever reach the submitter; every
//! other outcome happens after the acknowledgement and is only logged.

use crate::enrichment::types::EnrichError;
use crate::executor::types::PoolError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The payload is not a usable submission.
    #[error("bad input: {0}")]
    BadInput(String),

    /// The task pool is full; the submission was not scheduled.
    #[error("node busy: {0}")]
    Busy(#[from] PoolError),

    /// The URL is already in the store. A normal, idempotent outcome.
    #[error("already have the link {0}")]
    Duplicate(String),

    /// The link needed a title and none could be derived. Nothing was stored.
    #[error("enrichment of {url} failed: {source}")]
    EnrichmentFailed {
        url: String,
        #[source]
        source: EnrichError,
    },
}

/// Acknowledgement of the submission endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn queued() -> Self {
        Self {
            status: "queued".to_string(),
            error: None,
        }
    }

    pub fn bad_input(error: impl Into<String>) -> Self {
        Self {
            status: "bad_input".to_string(),
            error: Some(error.into()),
        }
    }

    pub fn busy(error: impl Into<String>) -> Self {
        Self {
            status: "busy".to_string(),
            error: Some(error.into()),
        }
    }
}
