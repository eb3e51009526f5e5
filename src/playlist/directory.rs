//! File-system playlist: every audio file under a directory, in device order

use super::{PlaylistError, PlaylistSource, Segment};
use glob::Pattern as GlobPattern;
use std::fs;
use std::path::{Component, Path};

/// Extensions recognised as audio when no configuration overrides them
pub const DEFAULT_AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "m4a", "m4b", "aac", "ogg", "opus", "flac", "wav", "wma",
];

/// Lists audio files recursively, ordered by directory then by file name
///
/// Devices that play files in copy order see them in exactly this order when
/// a directory is transferred file by file in sequence.
#[derive(Debug, Clone)]
pub struct DirectoryPlaylist {
    extensions: Vec<String>,
    ignore: Vec<GlobPattern>,
}

impl DirectoryPlaylist {
    /// Create a playlist source accepting the given extensions (case-insensitive)
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            ignore: Vec::new(),
        }
    }

    /// Skip files whose `relative/dir/name` matches any of these globs
    ///
    /// # Errors
    /// Returns `PlaylistError::InvalidPattern` if a pattern does not parse.
    pub fn with_ignore_patterns<I, S>(mut self, patterns: I) -> Result<Self, PlaylistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let compiled =
                GlobPattern::new(pattern).map_err(|e| PlaylistError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
            self.ignore.push(compiled);
        }
        Ok(self)
    }

    fn is_audio(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            })
    }

    fn is_ignored(&self, segment: &Segment) -> bool {
        let display = segment.display_name();
        self.ignore.iter().any(|pattern| pattern.matches(&display))
    }

    fn visit(&self, dir: &Path, base: &Path, out: &mut Vec<Segment>) -> Result<(), PlaylistError> {
        let entries = fs::read_dir(dir).map_err(|e| PlaylistError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| PlaylistError::io(dir, e))?;
            let path = entry.path();

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            // Directory symlinks are not followed
            let file_type = entry.file_type().map_err(|e| PlaylistError::io(&path, e))?;
            if file_type.is_dir() {
                self.visit(&path, base, out)?;
            } else if (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
                && self.is_audio(&path)
            {
                let segment = Segment::new(name, path.clone(), relative_dir(&path, base));
                if self.is_ignored(&segment) {
                    tracing::debug!(segment = %segment, "ignored by pattern");
                    continue;
                }
                out.push(segment);
            }
        }

        Ok(())
    }
}

impl Default for DirectoryPlaylist {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_EXTENSIONS)
    }
}

impl PlaylistSource for DirectoryPlaylist {
    fn list(&self, dir: &Path) -> Result<Vec<Segment>, PlaylistError> {
        if !dir.exists() {
            return Err(PlaylistError::NotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(PlaylistError::NotADirectory(dir.to_path_buf()));
        }

        let mut segments = Vec::new();
        self.visit(dir, dir, &mut segments)?;

        segments.sort_by(|a, b| {
            a.relative_path
                .cmp(&b.relative_path)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::info!(dir = %dir.display(), count = segments.len(), "listed playlist");
        Ok(segments)
    }
}

/// Parent directory of `path` relative to `base`, joined with `/`
fn relative_dir(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .ok()
        .and_then(Path::parent)
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => part.to_str(),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_files;
    use tempfile::TempDir;

    fn names(segments: &[Segment]) -> Vec<String> {
        segments.iter().map(Segment::display_name).collect()
    }

    #[test]
    fn test_lists_in_directory_then_name_order() {
        let dir = TempDir::new().unwrap();
        write_files(
            dir.path(),
            &["b.mp3", "a.mp3", "part2/01.mp3", "part1/02.mp3", "part1/01.mp3"],
        );

        let segments = DirectoryPlaylist::default().list(dir.path()).unwrap();
        assert_eq!(
            names(&segments),
            vec!["a.mp3", "b.mp3", "part1/01.mp3", "part1/02.mp3", "part2/01.mp3"]
        );
        assert_eq!(segments[2].relative_path, "part1");
        assert_eq!(segments[0].relative_path, "");
        assert_eq!(segments[0].path, dir.path().join("a.mp3"));
    }

    #[test]
    fn test_filters_non_audio_and_hidden_files() {
        let dir = TempDir::new().unwrap();
        write_files(
            dir.path(),
            &["cover.jpg", "notes.txt", ".hidden.mp3", "track.MP3", "book.m4b"],
        );

        let segments = DirectoryPlaylist::default().list(dir.path()).unwrap();
        assert_eq!(names(&segments), vec!["book.m4b", "track.MP3"]);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a.mp3", "b.ogg"]);

        let segments = DirectoryPlaylist::new([".OGG"]).list(dir.path()).unwrap();
        assert_eq!(names(&segments), vec!["b.ogg"]);
    }

    #[test]
    fn test_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["01.mp3", "extras/bonus.mp3", "02.mp3"]);

        let source = DirectoryPlaylist::default()
            .with_ignore_patterns(["extras/*"])
            .unwrap();
        let segments = source.list(dir.path()).unwrap();
        assert_eq!(names(&segments), vec!["01.mp3", "02.mp3"]);
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let result = DirectoryPlaylist::default().with_ignore_patterns(["[unclosed"]);
        assert!(matches!(result, Err(PlaylistError::InvalidPattern { .. })));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = DirectoryPlaylist::default().list(&missing);
        assert!(matches!(result, Err(PlaylistError::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a.mp3"]);

        let result = DirectoryPlaylist::default().list(&dir.path().join("a.mp3"));
        assert!(matches!(result, Err(PlaylistError::NotADirectory(_))));
    }

    #[test]
    fn test_empty_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let segments = DirectoryPlaylist::default().list(dir.path()).unwrap();
        assert!(segments.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlinks_are_not_followed() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["book/01.mp3", "book/02.mp3"]);
        symlink(dir.path(), dir.path().join("book/loop")).unwrap();
        symlink(dir.path().join("book/02.mp3"), dir.path().join("book/03.mp3")).unwrap();

        let segments = DirectoryPlaylist::default().list(dir.path()).unwrap();
        assert_eq!(
            names(&segments),
            vec!["book/01.mp3", "book/02.mp3", "book/03.mp3"]
        );
    }

    #[test]
    fn test_relative_dir_nested() {
        let base = Path::new("/root/books");
        assert_eq!(relative_dir(Path::new("/root/books/a/b/c.mp3"), base), "a/b");
        assert_eq!(relative_dir(Path::new("/root/books/c.mp3"), base), "");
    }
}
