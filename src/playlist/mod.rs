//! Playlist source - the ordered sequence of segments a search runs over
//!
//! The order returned by a [`PlaylistSource`] defines the index space of a
//! search. Callers must not reorder it; the session only ever refers to
//! segments by their position in this sequence.

mod directory;
mod error;

pub use directory::{DEFAULT_AUDIO_EXTENSIONS, DirectoryPlaylist};
pub use error::PlaylistError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One playable unit in the canonical playback order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// File name
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// Parent directory relative to the listed root (empty at the top level)
    pub relative_path: String,
}

impl Segment {
    /// Create a new segment
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        relative_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Stable identifier of the segment
    #[must_use]
    pub fn id(&self) -> &Path {
        &self.path
    }

    /// Name shown in listings: `relative/dir/name`, or just the name at the top level
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.relative_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.relative_path, self.name)
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Source of the ordered segment sequence for a directory
pub trait PlaylistSource {
    /// List the segments under `dir` in the order the device plays them
    ///
    /// # Errors
    /// Returns `PlaylistError` if the directory cannot be read.
    fn list(&self, dir: &Path) -> Result<Vec<Segment>, PlaylistError>;
}
