//! Query and filter service
//!
//! This module orchestrates the cache-or-recompute decision for a period
//! and the threshold filter over cached summaries.
//!
//! # Query
//!
//! ```text
//! START -> cache hit  -> LOADED -+
//!       -> cache miss -> BUILT  -+-> DISPLAY
//! ```
//!
//! On a miss the engine consolidates every loaded transaction and the
//! repository persists the result before it is returned.
//!
//! # Filter
//!
//! Filtering only reads the cache. A period that was never consolidated
//! yields no matches and no cache file is created.

use crate::core::{consolidate, AuditLog, CacheRepository, Consolidation};
use crate::types::{AccountSummary, ConsolidationError, FilterCriteria, Period, TransactionRecord};
use tracing::info;

/// Where the consolidation returned by a query came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    /// Read back from an existing cache file
    Loaded,

    /// Computed from the ledger and written to the cache
    Built,
}

/// Result of querying a period
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub source: QuerySource,
    pub consolidation: Consolidation,
}

/// Query/filter service over one ledger and one cache repository
pub struct QueryService<A: AuditLog> {
    repository: CacheRepository,
    transactions: Vec<TransactionRecord>,
    audit: A,
}

impl<A: AuditLog> QueryService<A> {
    /// Create a service over already loaded transactions
    pub fn new(repository: CacheRepository, transactions: Vec<TransactionRecord>, audit: A) -> Self {
        QueryService {
            repository,
            transactions,
            audit,
        }
    }

    pub fn repository(&self) -> &CacheRepository {
        &self.repository
    }

    pub fn audit_log(&self) -> &A {
        &self.audit
    }

    /// Consolidation of a period, from cache when available
    ///
    /// # Errors
    ///
    /// Returns `ConsolidationError::CacheWrite` if a freshly built
    /// consolidation cannot be persisted.
    pub fn query(&mut self, period: Period) -> Result<QueryOutcome, ConsolidationError> {
        if let Some(consolidation) = self.repository.load(period) {
            info!(period = %period, accounts = consolidation.len(), "Loaded consolidation from cache");
            self.audit.record(&format!("cache loaded for {}", period));
            return Ok(QueryOutcome {
                source: QuerySource::Loaded,
                consolidation,
            });
        }

        let consolidation = consolidate(&self.transactions, period);
        let path = self.repository.store(period, &consolidation)?;
        info!(
            period = %period,
            accounts = consolidation.len(),
            path = %path.display(),
            "Computed and cached consolidation"
        );
        self.audit
            .record(&format!("consolidation computed for {}", period));

        Ok(QueryOutcome {
            source: QuerySource::Built,
            consolidation,
        })
    }

    /// Cached summaries of a period that satisfy the criteria
    ///
    /// Returns matches in ascending key order. A period without a cache
    /// file yields an empty result.
    pub fn filter(&mut self, period: Period, criteria: &FilterCriteria) -> Vec<AccountSummary> {
        let Some(consolidation) = self.repository.load(period) else {
            info!(period = %period, "No consolidation to filter");
            self.audit
                .record(&format!("consolidation not found for {}", period));
            return Vec::new();
        };

        let matches: Vec<AccountSummary> = consolidation
            .summaries()
            .filter(|summary| criteria.matches(summary))
            .cloned()
            .collect();

        info!(period = %period, matches = matches.len(), mode = %criteria.mode, "Filter applied");
        self.audit.record(&format!(
            "filter applied for {}: X={}, Y={}, mode={}, matches={}",
            period,
            criteria.cash_threshold,
            criteria.electronic_threshold,
            criteria.mode,
            matches.len()
        ));
        matches
    }
}
