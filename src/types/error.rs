//! Error types for the ledger consolidator
//!
//! This module defines all error types that can occur while loading the
//! ledger, consolidating it and persisting the period cache.
//!
//! # Error Categories
//!
//! - **Parsing Errors**: malformed rows, non-numeric fields, invalid amounts
//! - **Cache Errors**: failures writing a period cache file
//! - **Input Errors**: invalid periods or prompt values
//!
//! A missing cache file is not an error. The repository reports it as `None`.

use thiserror::Error;

/// Main error type for the ledger consolidator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsolidationError {
    /// Malformed ledger row or non-numeric field
    ///
    /// Skipped with a warning under the default load policy, fatal under
    /// the strict one.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Amount field that does not parse as a number
    #[error("Invalid amount '{amount}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidAmount {
        /// The raw amount text
        amount: String,
        /// Line number where the amount appeared (if available)
        line: Option<u64>,
    },

    /// Month or year outside the accepted range
    #[error("Invalid period {month}/{year}: month must be 1-12 and year 0-9999")]
    InvalidPeriod { month: u32, year: i32 },

    /// Writing a period cache file failed
    ///
    /// Always surfaced to the caller.
    #[error("Failed to write cache file {path}: {message}")]
    CacheWrite {
        /// Path of the cache file being written
        path: String,
        /// Description of the I/O failure
        message: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Prompt value that does not parse
    #[error("Invalid value '{value}' for {field}")]
    InvalidInput { field: String, value: String },

    /// Input ended before a required value was supplied
    #[error("Missing value for {field}")]
    MissingInput { field: String },
}

// Conversion from io::Error to ConsolidationError
impl From<std::io::Error> for ConsolidationError {
    fn from(error: std::io::Error) -> Self {
        ConsolidationError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ConsolidationError
impl From<csv::Error> for ConsolidationError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ConsolidationError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl ConsolidationError {
    /// Create a ParseError
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        ConsolidationError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, line: Option<u64>) -> Self {
        ConsolidationError::InvalidAmount {
            amount: amount.to_string(),
            line,
        }
    }

    /// Create an InvalidPeriod error
    pub fn invalid_period(month: u32, year: i32) -> Self {
        ConsolidationError::InvalidPeriod { month, year }
    }

    /// Create a CacheWrite error
    pub fn cache_write(path: &std::path::Path, error: &std::io::Error) -> Self {
        ConsolidationError::CacheWrite {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, value: &str) -> Self {
        ConsolidationError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a MissingInput error
    pub fn missing_input(field: &str) -> Self {
        ConsolidationError::MissingInput {
            field: field.to_string(),
        }
    }

    /// Attach a line number to parse-related errors that lack one
    pub fn at_line(self, line: u64) -> Self {
        match self {
            ConsolidationError::ParseError { line: None, message } => {
                ConsolidationError::ParseError {
                    line: Some(line),
                    message,
                }
            }
            ConsolidationError::InvalidAmount { amount, line: None } => {
                ConsolidationError::InvalidAmount {
                    amount,
                    line: Some(line),
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::parse_error_with_line(
        ConsolidationError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "Parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        ConsolidationError::ParseError { line: None, message: "Invalid field".to_string() },
        "Parse error: Invalid field"
    )]
    #[case::invalid_amount(
        ConsolidationError::InvalidAmount { amount: "abc".to_string(), line: Some(3) },
        "Invalid amount 'abc' at line 3"
    )]
    #[case::invalid_period(
        ConsolidationError::InvalidPeriod { month: 13, year: 2024 },
        "Invalid period 13/2024: month must be 1-12 and year 0-9999"
    )]
    #[case::cache_write(
        ConsolidationError::CacheWrite { path: "cache/x.bin".to_string(), message: "disk full".to_string() },
        "Failed to write cache file cache/x.bin: disk full"
    )]
    #[case::io_error(
        ConsolidationError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::invalid_input(
        ConsolidationError::InvalidInput { field: "month".to_string(), value: "march".to_string() },
        "Invalid value 'march' for month"
    )]
    #[case::missing_input(
        ConsolidationError::MissingInput { field: "year".to_string() },
        "Missing value for year"
    )]
    fn test_error_display(#[case] error: ConsolidationError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::parse_error(
        ConsolidationError::parse_error(None, "bad"),
        ConsolidationError::ParseError { line: Some(7), message: "bad".to_string() }
    )]
    #[case::invalid_amount(
        ConsolidationError::invalid_amount("x", None),
        ConsolidationError::InvalidAmount { amount: "x".to_string(), line: Some(7) }
    )]
    #[case::keeps_existing_line(
        ConsolidationError::parse_error(Some(2), "bad"),
        ConsolidationError::ParseError { line: Some(2), message: "bad".to_string() }
    )]
    #[case::unrelated_variant(
        ConsolidationError::invalid_period(0, 1),
        ConsolidationError::InvalidPeriod { month: 0, year: 1 }
    )]
    fn test_at_line(#[case] error: ConsolidationError, #[case] expected: ConsolidationError) {
        assert_eq!(error.at_line(7), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ConsolidationError = io_error.into();
        assert!(matches!(error, ConsolidationError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_cache_write_helper() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let error = ConsolidationError::cache_write(Path::new("x.bin"), &io_error);
        assert_eq!(
            error,
            ConsolidationError::CacheWrite {
                path: "x.bin".to_string(),
                message: "disk full".to_string()
            }
        );
    }
}
