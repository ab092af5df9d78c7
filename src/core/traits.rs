//! Core traits for the collaborators of the query service
//!
//! The service records every cache decision through an [`AuditLog`], so
//! callers can plug in a file-backed trail or an in-memory one.

/// Append-only sink for audit messages
///
/// Implementations own the line format beyond the message text. Recording
/// never fails from the caller's point of view.
pub trait AuditLog {
    /// Append one message
    fn record(&mut self, message: &str);
}

