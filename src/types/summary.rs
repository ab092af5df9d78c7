//! Consolidated account summary types
//!
//! This module defines the per-account totals produced by consolidation
//! and the composite key that identifies them.

use super::transaction::{AccountId, BranchId};

/// Multiplier used by the legacy scalar key
///
/// Larger than any plausible account identifier, so scalar keys of
/// different branches cannot collide.
pub const BRANCH_KEY_MULTIPLIER: i64 = 1_000_000;

/// Composite key of a consolidated account
///
/// Ordered by branch first, then account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountKey {
    pub branch: BranchId,
    pub account: AccountId,
}

impl AccountKey {
    pub fn new(branch: BranchId, account: AccountId) -> Self {
        AccountKey { branch, account }
    }

    /// Single scalar form of the key: `branch * 1_000_000 + account`
    ///
    /// Computed in `i64` so it never overflows for 4-byte identifiers.
    /// Agrees with the compound ordering while accounts stay below the
    /// multiplier.
    pub fn as_scalar(&self) -> i64 {
        i64::from(self.branch) * BRANCH_KEY_MULTIPLIER + i64::from(self.account)
    }
}

/// Consolidated movements of one origin account within a period
///
/// Represents the running totals accumulated for one (branch, account)
/// pair. Each summary maps one-to-one onto a fixed-size cache record.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    /// Branch of the origin account
    pub branch: BranchId,

    /// Origin account identifier
    pub account: AccountId,

    /// Sum of cash (no destination) amounts
    pub cash_subtotal: f64,

    /// Sum of electronic transfer amounts
    pub electronic_subtotal: f64,

    /// Number of transactions counted for this account
    pub transaction_count: i32,
}

impl AccountSummary {
    /// Create a zero-initialized summary for the given account
    pub fn new(branch: BranchId, account: AccountId) -> Self {
        AccountSummary {
            branch,
            account,
            cash_subtotal: 0.0,
            electronic_subtotal: 0.0,
            transaction_count: 0,
        }
    }

    pub fn key(&self) -> AccountKey {
        AccountKey::new(self.branch, self.account)
    }

    /// Cash plus electronic subtotal
    pub fn total(&self) -> f64 {
        self.cash_subtotal + self.electronic_subtotal
    }
}
