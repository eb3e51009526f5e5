//! Projection of a search state onto the segment list
//!
//! Every segment is shown as excluded, still plausible, or under probe.
//! Nothing here holds state of its own.

use super::step::SearchState;
use serde::Serialize;
use std::ops::Range as IndexRange;

/// How a segment is shown in the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentStatus {
    /// Outside the current range, already ruled out
    Inactive,
    /// Inside the current range, still plausible
    Active,
    /// The segment being probed (or the located one)
    Current,
}

impl SegmentStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
            Self::Current => "current",
        }
    }
}

/// Status of the segment at `index`
#[must_use]
pub const fn status_of(state: &SearchState, index: usize) -> SegmentStatus {
    if index == state.index() {
        SegmentStatus::Current
    } else if state.range().contains(index) {
        SegmentStatus::Active
    } else {
        SegmentStatus::Inactive
    }
}

/// Status of every segment in a sequence of `len`
#[must_use]
pub fn statuses(state: &SearchState, len: usize) -> Vec<SegmentStatus> {
    (0..len).map(|index| status_of(state, index)).collect()
}

/// Indices to show around `center`, at most `context` on each side
#[must_use]
pub fn window(center: usize, len: usize, context: usize) -> IndexRange<usize> {
    if len == 0 {
        return 0..0;
    }
    let center = center.min(len - 1);
    center.saturating_sub(context)..(center + context + 1).min(len)
}
