//! Background Execution Module
//!
//! Every unit of work the node runs off the request path goes through the
//! `TaskPool`: asynchronous ingestion of submissions and one delivery per
//! peer for every accepted link. Units are bounded in number, both running
//! and waiting, and tracked so the process can drain them on shutdown.

pub mod pool;
pub mod types;
