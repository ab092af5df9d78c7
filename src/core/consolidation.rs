//! Consolidation map
//!
//! This module provides the `Consolidation` struct which holds one
//! [`AccountSummary`] per origin account observed in a period.
//!
//! The Consolidation is responsible for:
//! - Creating zero-initialized summaries on first observation of a key
//! - Providing summaries in ascending key order for display and persistence

use crate::types::{AccountKey, AccountSummary};
use std::collections::BTreeMap;

/// Ordered collection of account summaries for one period
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consolidation {
    /// Summaries keyed by (branch, account), iterated in ascending order
    summaries: BTreeMap<AccountKey, AccountSummary>,
}

impl Consolidation {
    /// Create an empty consolidation
    pub fn new() -> Self {
        Consolidation {
            summaries: BTreeMap::new(),
        }
    }

    /// Get or create the summary for the specified key
    ///
    /// If no summary exists yet, a zero-initialized one is inserted first.
    ///
    /// # Returns
    ///
    /// A mutable reference to the summary for the key
    pub fn get_or_create(&mut self, key: AccountKey) -> &mut AccountSummary {
        self.summaries
            .entry(key)
            .or_insert_with(|| AccountSummary::new(key.branch, key.account))
    }

    /// Insert a complete summary, replacing any summary with the same key
    pub fn insert(&mut self, summary: AccountSummary) {
        self.summaries.insert(summary.key(), summary);
    }

    pub fn get(&self, key: AccountKey) -> Option<&AccountSummary> {
        self.summaries.get(&key)
    }

    /// Summaries in ascending key order
    pub fn summaries(&self) -> impl Iterator<Item = &AccountSummary> {
        self.summaries.values()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl FromIterator<AccountSummary> for Consolidation {
    fn from_iter<I: IntoIterator<Item = AccountSummary>>(iter: I) -> Self {
        let mut consolidation = Consolidation::new();
        for summary in iter {
            consolidation.insert(summary);
        }
        consolidation
    }
}
