//! Error types for playlist listing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while listing a directory of segments
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Directory does not exist
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Ignore pattern failed to parse
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// I/O error while walking the directory
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PlaylistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
