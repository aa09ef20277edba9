//! Ingestion Service Module
//!
//! Accepts link submissions from clients and peers and turns them into
//! committed, enriched, gossiped links.
//!
//! ## Workflow
//! 1. **Receive**: the `/links` handler validates the payload and acknowledges.
//! 2. **Process**: the pipeline deduplicates, enriches and commits on the task pool.
//! 3. **Share**: committed links are handed to the propagator.

pub mod handlers;
pub mod pipeline;
pub mod types;
