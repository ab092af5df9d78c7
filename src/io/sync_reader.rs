//! Synchronous ledger reader with iterator interface
//!
//! Provides a streaming iterator over transaction records from a ledger file.
//! Delegates row format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader reads one `csv::StringRecord` at a time, deserializes it
//! into a [`CsvRecord`] and converts it into a [`TransactionRecord`]. Rows have
//! no header, are trimmed, and may omit the trailing destination fields.
//!
//! ```no_run
//! use ledger_consolidator::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Parsed transaction: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Errors carry the 1-based line number of the offending row

use crate::io::csv_format::{convert_csv_record, CsvRecord, FIELD_COUNT, REQUIRED_FIELD_COUNT};
use crate::types::{ConsolidationError, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous ledger reader
///
/// Yields one `Result` per non-empty row, in input order.
#[derive(Debug)]
pub struct SyncReader<R: Read = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl SyncReader<File> {
    /// Open a ledger file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(ConsolidationError::IoError)` if it could not be opened
    pub fn new(path: &Path) -> Result<Self, ConsolidationError> {
        let file = File::open(path).map_err(|e| ConsolidationError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SyncReader<R> {
    /// Wrap any reader producing ledger rows
    pub fn from_reader(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }

    fn parse_current(&mut self, line: u64) -> Result<TransactionRecord, ConsolidationError> {
        let fields = self.record.len();
        if !(REQUIRED_FIELD_COUNT..=FIELD_COUNT).contains(&fields) {
            return Err(ConsolidationError::parse_error(
                Some(line),
                format!(
                    "expected {} to {} fields, found {}",
                    REQUIRED_FIELD_COUNT, FIELD_COUNT, fields
                ),
            ));
        }

        // Omitted trailing destination fields read as empty
        for _ in fields..FIELD_COUNT {
            self.record.push_field("");
        }

        let csv_record: CsvRecord = self
            .record
            .deserialize(None)
            .map_err(|e| ConsolidationError::from(e).at_line(line))?;

        convert_csv_record(csv_record).map_err(|e| e.at_line(line))
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<TransactionRecord, ConsolidationError>;

    /// Get the next transaction record
    ///
    /// # Returns
    ///
    /// * `Some(Ok(TransactionRecord))` - Successfully parsed row
    /// * `Some(Err(ConsolidationError))` - Row error with line number
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let line = self.record.position().map(|p| p.line()).unwrap_or(0);
                Some(self.parse_current(line))
            }
            Ok(false) => None,
            Err(e) => Some(Err(ConsolidationError::from(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary ledger file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<TransactionRecord, ConsolidationError>> {
        SyncReader::from_reader(Cursor::new(content.to_string())).collect()
    }

    #[test]
    fn test_sync_reader_new_opens_file() {
        let file = create_temp_csv("1,3,2024,10,500,150.0,0,0\n");
        let reader = SyncReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 1);
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        let error = result.unwrap_err();
        assert!(error.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_sync_reader_parses_cash_and_electronic_rows() {
        let records = read_all("1,3,2024,10,500,150.0,0,0\n2,3,2024,10,500,75.5,20,999\n");

        assert_eq!(records.len(), 2);
        let cash = records[0].as_ref().unwrap();
        assert_eq!(cash.day, 1);
        assert_eq!(cash.month, 3);
        assert_eq!(cash.year, 2024);
        assert_eq!(cash.destination_branch, 0);
        assert_eq!(cash.destination_account, 0);

        let electronic = records[1].as_ref().unwrap();
        assert_eq!(electronic.destination_branch, 20);
        assert_eq!(electronic.destination_account, 999);
        assert!((electronic.amount - 75.5).abs() < 1e-9);
    }

    #[test]
    fn test_sync_reader_treats_empty_destination_as_cash() {
        let records = read_all("5,3,2024,10,500,40.0,,\n");
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.destination_branch, 0);
        assert_eq!(record.destination_account, 0);
    }

    #[test]
    fn test_sync_reader_treats_missing_destination_as_cash() {
        let records = read_all("5,3,2024,10,500,40.0\n");
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.destination_branch, 0);
        assert_eq!(record.destination_account, 0);
    }

    #[test]
    fn test_sync_reader_treats_missing_destination_account_as_zero() {
        let records = read_all("5,3,2024,10,500,40.0,20\n");
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.destination_branch, 20);
        assert_eq!(record.destination_account, 0);
        assert!((record.amount - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_sync_reader_rejects_rows_without_amount() {
        let records = read_all("1,3,2024,10,500\n5,3,2024,10,500,40.0\n");
        assert_eq!(records.len(), 2);
        assert!(matches!(
            records[0],
            Err(ConsolidationError::ParseError { line: Some(1), .. })
        ));
        assert!(records[1].is_ok());
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let records = read_all(" 1 , 3 , 2024 , 10 , 500 , 150.0 , 20 , 999 \n");
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.origin_branch, 10);
        assert_eq!(record.destination_account, 999);
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let records = read_all(
            "1,3,2024,10,500,150.0,0,0\n\
             x,3,2024,10,500,150.0,0,0\n\
             1,3,2024,10,500,abc,0,0\n",
        );

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(ConsolidationError::ParseError { line: Some(2), .. })
        ));
        assert_eq!(
            records[2],
            Err(ConsolidationError::InvalidAmount {
                amount: "abc".to_string(),
                line: Some(3)
            })
        );
    }

    #[test]
    fn test_sync_reader_rejects_extra_fields() {
        let records = read_all("1,3,2024,10,500,150.0,0,0,9\n");
        assert!(matches!(
            records[0],
            Err(ConsolidationError::ParseError { line: Some(1), .. })
        ));
    }

    #[test]
    fn test_sync_reader_rejects_non_numeric_destination() {
        let records = read_all("1,3,2024,10,500,150.0,abc,0\n");
        assert!(records[0].is_err());
    }

    #[test]
    fn test_sync_reader_skips_blank_lines() {
        let records = read_all("1,3,2024,10,500,150.0,0,0\n\n2,3,2024,10,500,75.5,20,999\n");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn test_sync_reader_empty_input() {
        assert!(read_all("").is_empty());
    }
}
