//! Transaction-related types for the ledger consolidator
//!
//! This module defines the identifiers and the parsed transaction record
//! produced by the loader and consumed by the consolidation engine.

use crate::types::period::Period;

/// Branch identifier
///
/// Stored as a 4-byte signed integer in the cache record.
pub type BranchId = i32;

/// Account identifier
///
/// Stored as a 4-byte signed integer in the cache record.
pub type AccountId = i32;

/// Sentinel used for an absent destination branch or account
///
/// Zero is never a valid real branch or account identifier.
pub const NO_DESTINATION: i32 = 0;

/// How a transaction moved money out of its origin account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Species (cash) movement: no destination branch and no destination account
    Cash,

    /// Electronic transfer: any destination value is present
    Electronic,
}

/// Input transaction record from the ledger file
///
/// Represents one parsed line of the ledger. Records are immutable once
/// created and are kept in input order for the lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Day of month the transaction happened
    pub day: u32,

    /// Month of the transaction (1-12 for valid input)
    pub month: u32,

    /// Year of the transaction
    pub year: i32,

    /// Branch the money left from
    pub origin_branch: BranchId,

    /// Account the money left from
    pub origin_account: AccountId,

    /// Transaction amount
    pub amount: f64,

    /// Destination branch, or [`NO_DESTINATION`] for cash
    pub destination_branch: BranchId,

    /// Destination account, or [`NO_DESTINATION`] for cash
    pub destination_account: AccountId,
}

impl TransactionRecord {
    /// Classify the record as cash or electronic
    ///
    /// A record is cash only when both destination fields carry the
    /// [`NO_DESTINATION`] sentinel.
    pub fn kind(&self) -> TransferKind {
        if self.destination_branch == NO_DESTINATION && self.destination_account == NO_DESTINATION
        {
            TransferKind::Cash
        } else {
            TransferKind::Electronic
        }
    }

    /// Whether this record belongs to the given period
    pub fn period_matches(&self, period: Period) -> bool {
        self.month == period.month() && self.year == period.year()
    }
}
