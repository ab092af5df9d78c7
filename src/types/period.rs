//! Reporting period (month and year)

use crate::types::error::ConsolidationError;
use std::fmt;

/// Highest year representable in the fixed-width cache file name
pub const MAX_YEAR: i32 = 9999;

/// A validated (month, year) pair
///
/// Periods key both the consolidation and the cache file it is persisted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside 1-12 and years outside 0-9999
    pub fn new(month: u32, year: i32) -> Result<Self, ConsolidationError> {
        if !(1..=12).contains(&month) || !(0..=MAX_YEAR).contains(&year) {
            return Err(ConsolidationError::invalid_period(month, year));
        }
        Ok(Period { year, month })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Cache file name for this period
    ///
    /// Month and year are zero-padded to a fixed width so that distinct
    /// periods never share a name.
    pub fn cache_file_name(&self) -> String {
        format!("consolidated_{:02}_{:04}.bin", self.month, self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
