//! Audit log sinks
//!
//! - [`FileAuditLog`] appends `<timestamp> - <message>` lines to a text file
//! - [`MemoryAuditLog`] keeps messages in memory for inspection

use crate::core::traits::AuditLog;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Timestamp format of audit lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only audit log backed by a text file
///
/// The file is opened in append mode for every message. Failures are logged
/// and otherwise ignored.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAuditLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl AuditLog for FileAuditLog {
    fn record(&mut self, message: &str) {
        let line = format!("{} - {}", Local::now().format(TIMESTAMP_FORMAT), message);
        if let Err(e) = self.append(&line) {
            warn!(path = %self.path.display(), error = %e, "Failed to append to audit log");
        }
    }
}

/// Audit log that keeps every message in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryAuditLog {
    entries: Vec<String>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were recorded
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl AuditLog for MemoryAuditLog {
    fn record(&mut self, message: &str) {
        self.entries.push(message.to_string());
    }
}
