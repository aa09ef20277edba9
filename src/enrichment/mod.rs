//! Enrichment Module
//!
//! Derives metadata for links submitted without a title.
//!
//! ## Workflow
//! 1. **Fetch**: GET the link target with a bounded timeout.
//! 2. **Gate**: refuse anything not declared as `text/html`.
//! 3. **Extract**: read a bounded prefix of the body and take the first `<title>`.
//!
//! Enrichment never touches shared state; the pipeline decides what to do with the result.

pub mod enricher;
pub mod title;
pub mod types;
