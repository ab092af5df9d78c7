//! Binary cache record format
//!
//! A period cache file is a bare sequence of fixed-size records. There is
//! no header, no record count, no checksum and no version field. Each record
//! is 28 bytes, little-endian, without padding:
//!
//! | offset | width | field               |
//! |-------:|------:|---------------------|
//! | 0      | 4     | branch (`i32`)      |
//! | 4      | 4     | account (`i32`)     |
//! | 8      | 8     | cash subtotal (`f64`) |
//! | 16     | 8     | electronic subtotal (`f64`) |
//! | 24     | 4     | transaction count (`i32`) |
//!
//! Readers stop at end of input and silently drop a trailing partial record.
//!
//! Files holding raw dumps of a padded 32-byte in-memory struct are not
//! readable with this layout, and their unpadded `consolidated_<M><Y>.bin`
//! names are never looked up.

use crate::core::consolidation::Consolidation;
use crate::types::{AccountSummary, ConsolidationError};
use std::io::{ErrorKind, Read, Write};

/// Size in bytes of one encoded summary
pub const RECORD_SIZE: usize = 28;

/// Encode one summary into its fixed-size record
pub fn encode_record(summary: &AccountSummary) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[0..4].copy_from_slice(&summary.branch.to_le_bytes());
    buf[4..8].copy_from_slice(&summary.account.to_le_bytes());
    buf[8..16].copy_from_slice(&summary.cash_subtotal.to_le_bytes());
    buf[16..24].copy_from_slice(&summary.electronic_subtotal.to_le_bytes());
    buf[24..28].copy_from_slice(&summary.transaction_count.to_le_bytes());
    buf
}

/// Decode one fixed-size record
pub fn decode_record(buf: &[u8; RECORD_SIZE]) -> AccountSummary {
    let mut b4 = [0u8; 4];
    let mut b8 = [0u8; 8];

    b4.copy_from_slice(&buf[0..4]);
    let branch = i32::from_le_bytes(b4);
    b4.copy_from_slice(&buf[4..8]);
    let account = i32::from_le_bytes(b4);
    b8.copy_from_slice(&buf[8..16]);
    let cash_subtotal = f64::from_le_bytes(b8);
    b8.copy_from_slice(&buf[16..24]);
    let electronic_subtotal = f64::from_le_bytes(b8);
    b4.copy_from_slice(&buf[24..28]);
    let transaction_count = i32::from_le_bytes(b4);

    AccountSummary {
        branch,
        account,
        cash_subtotal,
        electronic_subtotal,
        transaction_count,
    }
}

/// Write every summary of a consolidation, in key order
pub fn write_consolidation<W: Write>(
    w: &mut W,
    consolidation: &Consolidation,
) -> Result<(), ConsolidationError> {
    for summary in consolidation.summaries() {
        w.write_all(&encode_record(summary))?;
    }
    Ok(())
}

/// Read records until end of input
///
/// Keys are recomputed from each record's branch and account. When two
/// records share a key the later one wins.
pub fn read_consolidation<R: Read>(r: &mut R) -> Result<Consolidation, ConsolidationError> {
    let mut consolidation = Consolidation::new();
    let mut buf = [0u8; RECORD_SIZE];

    loop {
        match r.read_exact(&mut buf) {
            Ok(()) => consolidation.insert(decode_record(&buf)),
            // Also covers a trailing record shorter than RECORD_SIZE
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(ConsolidationError::from(e)),
        }
    }

    Ok(consolidation)
}
