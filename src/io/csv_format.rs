//! CSV format handling for ledger rows
//!
//! This module centralizes the ledger row format, providing:
//! - CsvRecord structure for positional deserialization
//! - Conversion from CSV records to domain types
//!
//! Rows carry eight fields, without a header, in this order:
//! day, month, year, origin branch, origin account, amount,
//! destination branch, destination account.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{
    AccountId, BranchId, ConsolidationError, TransactionRecord, NO_DESTINATION,
};
use serde::Deserialize;
use std::str::FromStr;

/// Number of fields in a ledger row
pub const FIELD_COUNT: usize = 8;

/// Fields every row must carry; the two destination fields may be omitted
pub const REQUIRED_FIELD_COUNT: usize = 6;

/// CSV record structure for deserialization
///
/// Fields are matched by position. Destination fields are optional: an
/// empty or missing field means the transaction had no destination.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub origin_branch: BranchId,
    pub origin_account: AccountId,
    pub amount: String,
    pub destination_branch: Option<BranchId>,
    pub destination_account: Option<AccountId>,
}

/// Convert a CsvRecord to a TransactionRecord
///
/// This function:
/// - Parses the amount string into a finite `f64`
/// - Maps absent destination fields to the [`NO_DESTINATION`] sentinel
///
/// # Returns
///
/// * `Ok(TransactionRecord)` - Successfully converted record
/// * `Err(ConsolidationError::InvalidAmount)` - Amount is not a finite number
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TransactionRecord, ConsolidationError> {
    let amount_str = csv_record.amount.trim();
    let amount = match f64::from_str(amount_str) {
        Ok(value) if value.is_finite() => value,
        _ => return Err(ConsolidationError::invalid_amount(&csv_record.amount, None)),
    };

    Ok(TransactionRecord {
        day: csv_record.day,
        month: csv_record.month,
        year: csv_record.year,
        origin_branch: csv_record.origin_branch,
        origin_account: csv_record.origin_account,
        amount,
        destination_branch: csv_record.destination_branch.unwrap_or(NO_DESTINATION),
        destination_account: csv_record.destination_account.unwrap_or(NO_DESTINATION),
    })
}
