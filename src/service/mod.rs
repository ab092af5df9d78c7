//! Service module
//!
//! Orchestrates the ledger, the consolidation engine and the period cache:
//! - `query_service` - cache-or-recompute queries and threshold filtering

pub mod query_service;

pub use query_service::{QueryOutcome, QueryService, QuerySource};
