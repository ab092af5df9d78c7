//! I/O module
//!
//! Handles ledger parsing, the binary cache format, audit trails and
//! summary rendering.
//!
//! # Components
//!
//! - `csv_format` - Ledger row format (record conversion)
//! - `sync_reader` - Streaming ledger reader with iterator interface
//! - `loader` - Collects a ledger into an ordered sequence of records
//! - `bin_format` - Fixed-size binary cache records
//! - `audit_log` - File and in-memory audit sinks
//! - `report` - Text rendering of account summaries

pub mod audit_log;
pub mod bin_format;
pub mod csv_format;
pub mod loader;
pub mod report;
pub mod sync_reader;

pub use audit_log::{FileAuditLog, MemoryAuditLog};
pub use csv_format::{convert_csv_record, CsvRecord};
pub use loader::{load_transactions, LoadPolicy};
pub use report::write_summaries;
pub use sync_reader::SyncReader;
