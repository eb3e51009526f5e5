//! Testing utilities for findplace
//!
//! This module provides fixtures for writing tests: fake segment sequences,
//! an in-memory playlist source, and a deletion service that records what it
//! was asked to remove.
//!
//! Only available when compiled with `cfg(test)`.

use crate::deletion::{DeletionError, DeletionService};
use crate::playlist::{PlaylistError, PlaylistSource, Segment};
use std::cell::{Cell, RefCell};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Create each `relative` path under `root` (with parent directories) holding dummy bytes
///
/// # Panics
/// Panics if a file cannot be created.
pub fn write_files(root: &Path, relative: &[&str]) {
    for rel in relative {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        let mut file = fs::File::create(&path).expect("Failed to create fixture file");
        file.write_all(b"test content").expect("Failed to write fixture file");
    }
}

/// `count` top-level segments named `00.mp3`, `01.mp3`, ...
#[must_use]
pub fn segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let name = format!("{i:02}.mp3");
            Segment::new(name.clone(), PathBuf::from("/audio").join(name), "")
        })
        .collect()
}

/// Playlist source returning a fixed listing, or failing
pub struct StaticPlaylist {
    segments: Option<Vec<Segment>>,
}

impl StaticPlaylist {
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: Some(segments),
        }
    }

    /// A source whose listing always fails with `NotFound`
    #[must_use]
    pub const fn failing() -> Self {
        Self { segments: None }
    }
}

impl PlaylistSource for StaticPlaylist {
    fn list(&self, dir: &Path) -> Result<Vec<Segment>, PlaylistError> {
        self.segments
            .clone()
            .ok_or_else(|| PlaylistError::NotFound(dir.to_path_buf()))
    }
}

/// Deletion service that records requests instead of touching the disk
#[derive(Default)]
pub struct RecordingDeletion {
    requests: RefCell<Vec<Vec<Segment>>>,
    fail: Cell<bool>,
}

impl RecordingDeletion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose deletions fail until [`RecordingDeletion::set_failing`] clears it
    #[must_use]
    pub fn failing() -> Self {
        let service = Self::default();
        service.fail.set(true);
        service
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    /// Every request received, including failed ones
    #[must_use]
    pub fn requests(&self) -> Vec<Vec<Segment>> {
        self.requests.borrow().clone()
    }
}

impl DeletionService for RecordingDeletion {
    fn delete(&self, segments: &[Segment]) -> Result<(), DeletionError> {
        self.requests.borrow_mut().push(segments.to_vec());
        if self.fail.get() {
            let path = segments
                .first()
                .map(|s| s.path.clone())
                .unwrap_or_default();
            return Err(DeletionError::Io {
                path,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only device"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_files_creates_parents() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a/b/c.mp3"]);
        assert!(dir.path().join("a/b/c.mp3").is_file());
    }

    #[test]
    fn test_segments_fixture() {
        let list = segments(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].name, "02.mp3");
    }

    #[test]
    fn test_recording_deletion() {
        let service = RecordingDeletion::failing();
        assert!(service.delete(&segments(1)).is_err());
        service.set_failing(false);
        assert!(service.delete(&segments(2)).is_ok());
        assert_eq!(service.requests().len(), 2);
    }
}
