//! Period cache repository
//!
//! This module provides the `CacheRepository` which owns the storage root
//! for period cache files and moves consolidations in and out of them
//! through the binary record format.
//!
//! The repository is responsible for:
//! - Deriving the cache file path of a period
//! - Reporting a missing or unreadable cache as "not found" (`None`)
//! - Surfacing every failure while writing a cache file

use crate::core::consolidation::Consolidation;
use crate::io::bin_format::{read_consolidation, write_consolidation};
use crate::types::{ConsolidationError, Period};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads and writes period cache files under a storage root
#[derive(Debug, Clone)]
pub struct CacheRepository {
    root: PathBuf,
}

impl CacheRepository {
    /// Create a repository rooted at the given directory
    ///
    /// The directory is created on the first write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CacheRepository { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the cache file for a period
    pub fn path_for(&self, period: Period) -> PathBuf {
        self.root.join(period.cache_file_name())
    }

    /// Whether a cache file exists for the period
    pub fn exists(&self, period: Period) -> bool {
        self.path_for(period).is_file()
    }

    /// Load the cached consolidation of a period
    ///
    /// # Returns
    ///
    /// * `Some(Consolidation)` - The cache file was read
    /// * `None` - The cache file is absent or unreadable
    pub fn load(&self, period: Period) -> Option<Consolidation> {
        let path = self.path_for(period);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Cache file not available");
                return None;
            }
        };

        match read_consolidation(&mut BufReader::new(file)) {
            Ok(consolidation) => {
                debug!(path = %path.display(), accounts = consolidation.len(), "Read cache file");
                Some(consolidation)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cache file unreadable");
                None
            }
        }
    }

    /// Persist the consolidation of a period, replacing any previous cache
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written cache file
    /// * `Err(ConsolidationError::CacheWrite)` - Any failure creating, writing or flushing the file
    pub fn store(
        &self,
        period: Period,
        consolidation: &Consolidation,
    ) -> Result<PathBuf, ConsolidationError> {
        let path = self.path_for(period);

        fs::create_dir_all(&self.root).map_err(|e| ConsolidationError::cache_write(&path, &e))?;
        let file = File::create(&path).map_err(|e| ConsolidationError::cache_write(&path, &e))?;

        let mut writer = BufWriter::new(file);
        write_consolidation(&mut writer, consolidation).map_err(|e| match e {
            ConsolidationError::IoError { message } => ConsolidationError::CacheWrite {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        writer
            .flush()
            .map_err(|e| ConsolidationError::cache_write(&path, &e))?;

        debug!(path = %path.display(), accounts = consolidation.len(), "Wrote cache file");
        Ok(path)
    }
}
