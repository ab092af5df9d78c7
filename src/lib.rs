//! Ledger Consolidator Library
//! # Overview
//!
//! This library consolidates a ledger of bank transactions per origin account
//! for one month, splitting each account's movements into cash and electronic
//! subtotals, and caches every consolidation in a fixed-record binary file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, Period, AccountSummary, etc.)
//! - [`io`] - Ledger parsing, binary cache records, audit logs and rendering
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Folding a period's records into account summaries
//!   - [`core::consolidation`] - Ordered per-account summary map
//!   - [`core::cache_repository`] - Period cache files under a storage root
//! - [`service`] - Cache-or-recompute queries and threshold filtering
//! - [`cli`] - Arguments, prompts and the interactive session
//!
//! # Classification
//!
//! - **Cash**: the transaction has neither a destination branch nor a destination account
//! - **Electronic**: any destination value is present
//!
//! Only the origin account of a transaction is consolidated.
//!
//! # Cache
//!
//! One file per period, `consolidated_<MM>_<YYYY>.bin`, holding 28-byte
//! records with no header. A query reuses an existing file; otherwise it
//! consolidates the ledger and writes the file. Filters only read it.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod service;
pub mod types;

pub use core::{consolidate, AuditLog, CacheRepository, Consolidation, ConsolidationEngine};
pub use io::{load_transactions, FileAuditLog, LoadPolicy, MemoryAuditLog};
pub use service::{QueryOutcome, QueryService, QuerySource};
pub use types::{
    AccountKey, AccountSummary, ConsolidationError, FilterCriteria, FilterMode, Period,
    TransactionRecord, TransferKind,
};
