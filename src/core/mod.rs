//! Core business logic module
//!
//! This module contains the consolidation components:
//! - `traits` - Collaborator abstractions (audit log)
//! - `consolidation` - Ordered per-account summary map
//! - `engine` - Folding ledger records of a period into summaries
//! - `cache_repository` - Period cache files under a storage root

pub mod cache_repository;
pub mod consolidation;
pub mod engine;
pub mod traits;

pub use cache_repository::CacheRepository;
pub use consolidation::Consolidation;
pub use engine::{consolidate, ConsolidationEngine};
pub use traits::AuditLog;
