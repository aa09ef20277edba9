//! Link Storage Module
//!
//! Owns the accepted links of this node.
//!
//! ## Guarantees
//! - **Uniqueness**: no two stored links share a URL.
//! - **Ordering**: the listing follows commit order.
//! - **Monotonic**: links are never edited or removed while the process runs.

pub mod handlers;
pub mod render;
pub mod store;
pub mod types;
