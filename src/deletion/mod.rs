//! Deletion service - removes segments the listener has already heard
//!
//! The search core treats a deletion as all-or-nothing: if [`DeletionService::delete`]
//! fails, the session assumes nothing was removed and keeps its sequence.

use crate::playlist::Segment;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while deleting segments
#[derive(Debug, Error)]
pub enum DeletionError {
    /// A segment to delete is no longer on disk
    #[error("Segment not found: {}", .0.display())]
    Missing(PathBuf),

    /// Path exists but is not a regular file
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Removing a file failed
    #[error("Failed to delete {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Physically removes a set of segments
pub trait DeletionService {
    /// Delete every segment in `segments`
    ///
    /// # Errors
    /// Returns `DeletionError` if any segment could not be removed.
    fn delete(&self, segments: &[Segment]) -> Result<(), DeletionError>;
}

/// Deletes segment files from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDeletion {
    dry_run: bool,
}

impl FsDeletion {
    #[must_use]
    pub const fn new() -> Self {
        Self { dry_run: false }
    }

    /// Log what would be removed instead of removing it
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl DeletionService for FsDeletion {
    fn delete(&self, segments: &[Segment]) -> Result<(), DeletionError> {
        // Check everything up front so a stale listing fails before any removal
        for segment in segments {
            if !segment.path.exists() {
                return Err(DeletionError::Missing(segment.path.clone()));
            }
            if !segment.path.is_file() {
                return Err(DeletionError::NotAFile(segment.path.clone()));
            }
        }

        for segment in segments {
            if self.dry_run {
                tracing::info!(path = %segment.path.display(), "dry run: would delete");
                continue;
            }
            fs::remove_file(&segment.path).map_err(|source| DeletionError::Io {
                path: segment.path.clone(),
                source,
            })?;
            tracing::debug!(path = %segment.path.display(), "deleted");
        }

        tracing::info!(count = segments.len(), dry_run = self.dry_run, "deletion finished");
        Ok(())
    }
}
