//! Threshold filter types
//!
//! Filter modes are resolved once, at the input boundary, into a
//! two-variant enum. Any token that is not recognized falls back to
//! [`FilterMode::Or`].

use super::summary::AccountSummary;
use std::fmt;
use tracing::warn;

/// How the two thresholds combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Both cash and electronic subtotals must reach their thresholds
    And,

    /// Either subtotal reaching its threshold is enough
    Or,
}

impl FilterMode {
    /// Recognize a filter mode token
    ///
    /// Accepts `E`/`AND` and `OU`/`OR`, trimmed and case-insensitive.
    /// Returns `None` for anything else.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "E" | "AND" => Some(FilterMode::And),
            "OU" | "OR" => Some(FilterMode::Or),
            _ => None,
        }
    }

    /// Resolve a token, defaulting unknown values to [`FilterMode::Or`]
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or_else(|| {
            warn!(mode = %token, "Unknown filter mode, using OR");
            FilterMode::Or
        })
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::And => write!(f, "AND"),
            FilterMode::Or => write!(f, "OR"),
        }
    }
}

/// Thresholds and mode applied to cached summaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    /// Minimum cash subtotal (X)
    pub cash_threshold: f64,

    /// Minimum electronic subtotal (Y)
    pub electronic_threshold: f64,

    pub mode: FilterMode,
}

impl FilterCriteria {
    pub fn new(cash_threshold: f64, electronic_threshold: f64, mode: FilterMode) -> Self {
        FilterCriteria {
            cash_threshold,
            electronic_threshold,
            mode,
        }
    }

    /// Whether a summary satisfies the thresholds under this mode
    pub fn matches(&self, summary: &AccountSummary) -> bool {
        let cash_ok = summary.cash_subtotal >= self.cash_threshold;
        let electronic_ok = summary.electronic_subtotal >= self.electronic_threshold;

        match self.mode {
            FilterMode::And => cash_ok && electronic_ok,
            FilterMode::Or => cash_ok || electronic_ok,
        }
    }
}
