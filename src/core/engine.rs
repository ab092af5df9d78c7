//! Consolidation engine
//!
//! This module provides the ConsolidationEngine that folds ledger records
//! of one period into per-account summaries.
//!
//! The engine enforces these rules:
//! - Records outside the target period are skipped
//! - Only the origin account is credited; destinations are never tracked
//! - Each counted record adds to exactly one of the cash or electronic subtotals

use crate::core::consolidation::Consolidation;
use crate::types::{AccountKey, Period, TransactionRecord, TransferKind};
use tracing::debug;

/// Consolidation engine for a single period
pub struct ConsolidationEngine {
    period: Period,
    consolidation: Consolidation,
    counted: usize,
    skipped: usize,
}

impl ConsolidationEngine {
    /// Create an engine for the given period with no summaries
    pub fn new(period: Period) -> Self {
        ConsolidationEngine {
            period,
            consolidation: Consolidation::new(),
            counted: 0,
            skipped: 0,
        }
    }

    /// Process a single transaction record
    ///
    /// # Returns
    ///
    /// `true` if the record belonged to the period and was counted,
    /// `false` if it was skipped
    pub fn process(&mut self, record: &TransactionRecord) -> bool {
        if !record.period_matches(self.period) {
            self.skipped += 1;
            return false;
        }

        let key = AccountKey::new(record.origin_branch, record.origin_account);
        let summary = self.consolidation.get_or_create(key);
        match record.kind() {
            TransferKind::Cash => summary.cash_subtotal += record.amount,
            TransferKind::Electronic => summary.electronic_subtotal += record.amount,
        }
        summary.transaction_count += 1;

        self.counted += 1;
        true
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Finish processing and take the consolidation
    pub fn into_consolidation(self) -> Consolidation {
        debug!(
            period = %self.period,
            counted = self.counted,
            skipped = self.skipped,
            accounts = self.consolidation.len(),
            "Consolidation finished"
        );
        self.consolidation
    }
}

/// Consolidate every record of `records` that falls within `period`
pub fn consolidate(records: &[TransactionRecord], period: Period) -> Consolidation {
    let mut engine = ConsolidationEngine::new(period);
    for record in records {
        engine.process(record);
    }
    engine.into_consolidation()
}
