//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Parsed ledger records and identifiers
//! - `period`: The (month, year) reporting period
//! - `summary`: Consolidated account totals and their key
//! - `filter`: Threshold criteria and filter mode
//! - `error`: Error types for the consolidator

pub mod error;
pub mod filter;
pub mod period;
pub mod summary;
pub mod transaction;

pub use error::ConsolidationError;
pub use filter::{FilterCriteria, FilterMode};
pub use period::Period;
pub use summary::{AccountKey, AccountSummary};
pub use transaction::{AccountId, BranchId, TransactionRecord, TransferKind, NO_DESTINATION};
