//! Ledger loading
//!
//! Collects the rows of a ledger file into an ordered `Vec` of
//! [`TransactionRecord`]s. A ledger that cannot be opened yields an empty
//! sequence and a warning.

use crate::io::sync_reader::SyncReader;
use crate::types::{ConsolidationError, TransactionRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// What to do with a malformed ledger row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the row error and keep loading
    #[default]
    Skip,

    /// Stop at the first row error and return it
    Abort,
}

/// Load every transaction of a ledger file, preserving input order
///
/// # Returns
///
/// * `Ok(records)` - Parsed records (empty if the file cannot be opened)
/// * `Err(ConsolidationError)` - First row error, only under [`LoadPolicy::Abort`]
pub fn load_transactions(
    path: &Path,
    policy: LoadPolicy,
) -> Result<Vec<TransactionRecord>, ConsolidationError> {
    let reader = match SyncReader::new(path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ledger unavailable, continuing with no transactions");
            return Ok(Vec::new());
        }
    };

    let records = collect_records(reader, policy)?;
    debug!(path = %path.display(), count = records.len(), "Loaded ledger");
    Ok(records)
}

/// Load transactions from any reader under the given policy
pub fn load_from_reader<R: Read>(
    input: R,
    policy: LoadPolicy,
) -> Result<Vec<TransactionRecord>, ConsolidationError> {
    collect_records(SyncReader::from_reader(input), policy)
}

fn collect_records<R: Read>(
    reader: SyncReader<R>,
    policy: LoadPolicy,
) -> Result<Vec<TransactionRecord>, ConsolidationError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in reader {
        match result {
            Ok(record) => records.push(record),
            Err(e) if policy == LoadPolicy::Skip => {
                warn!(error = %e, "Skipping malformed ledger row");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        warn!(skipped, loaded = records.len(), "Ledger loaded with skipped rows");
    }
    Ok(records)
}
