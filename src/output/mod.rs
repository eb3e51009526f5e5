//! Output formatting for CLI display
//!
//! This module provides utilities for formatting segments and search
//! progress in the CLI.

use crate::playlist::Segment;
use crate::search::{SearchState, SegmentStatus};
use colored::Colorize;

/// Format a segment as a numbered line (numbers start at 1)
#[must_use]
pub fn segment_line(index: usize, segment: &Segment, quiet: bool) -> String {
    if quiet {
        segment.path.display().to_string()
    } else {
        format!("{:>5}  {}", index + 1, segment.display_name())
    }
}

/// Format a segment line marked and colored by its search status
#[must_use]
pub fn status_line(index: usize, segment: &Segment, status: SegmentStatus) -> String {
    let line = format!("{:>5}  {}", index + 1, segment.display_name());
    match status {
        SegmentStatus::Current => format!("▶ {}", line.bold().cyan()),
        SegmentStatus::Active => format!("  {line}"),
        SegmentStatus::Inactive => format!("  {}", line.dimmed()),
    }
}

/// One-line description of search progress
#[must_use]
pub fn progress(state: &SearchState) -> String {
    match state {
        SearchState::Step {
            range,
            remaining_steps,
            ..
        } => format!(
            "Somewhere in segments {}-{} ({} left), about {} more question(s)",
            range.start + 1,
            range.end + 1,
            range.len(),
            remaining_steps
        ),
        SearchState::Success { index, .. } => format!("Located at segment {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Range;

    #[test]
    fn test_segment_line_numbering() {
        let segment = Segment::new("01.mp3", "/a/part/01.mp3", "part");
        assert_eq!(segment_line(0, &segment, false), "    1  part/01.mp3");
        assert_eq!(segment_line(0, &segment, true), "/a/part/01.mp3");
    }

    #[test]
    fn test_status_line_marks_current() {
        let segment = Segment::new("01.mp3", "/a/01.mp3", "");
        assert!(status_line(2, &segment, SegmentStatus::Current).starts_with("▶"));
        assert!(status_line(2, &segment, SegmentStatus::Active).contains("3  01.mp3"));
    }

    #[test]
    fn test_progress_messages() {
        let step = SearchState::Step {
            range: Range { start: 1, end: 10 },
            index: 6,
            remaining_steps: 4,
        };
        assert_eq!(
            progress(&step),
            "Somewhere in segments 2-11 (10 left), about 4 more question(s)"
        );

        let done = SearchState::Success {
            range: Range { start: 7, end: 7 },
            index: 7,
        };
        assert_eq!(progress(&done), "Located at segment 8");
    }
}
