//! Bisection over segment indices
//!
//! [`step`] is the whole search algorithm: given the closed interval of
//! indices that may still hold the listener's last position, the index that
//! was just probed and the listener's answer, it produces the next probe or
//! the located position. It is pure; the session layer owns all state.
//!
//! # Answer semantics
//!
//! - [`Feedback::Remembers`] rules out the probe and everything before it.
//! - [`Feedback::DoesNotRemember`] rules out the probe and everything after it.
//!
//! When a choice has to be made the next probe is the *ceiling* of the
//! midpoint. Remembering the start of a segment says nothing about having
//! heard the end of it, so the search leans toward offering later content.
//!
//! Once the narrowed bounds meet or cross, the search ends on the upper
//! bound of the range it was given.

use super::error::SearchError;
use std::fmt;

/// Closed interval of segment indices, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a range, rejecting inverted bounds
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidRange` if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, SearchError> {
        if start > end {
            return Err(SearchError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Degenerate range holding a single index
    #[must_use]
    pub const fn point(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Number of indices covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A range always covers at least one index
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Listener's answer to a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The listener has heard this segment before
    Remembers,
    /// The listener has not heard this segment
    DoesNotRemember,
}

/// State of a search after any number of steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Search in progress
    Step {
        range: Range,
        /// Index of the segment being probed
        index: usize,
        /// Rough estimate of the probes still needed
        remaining_steps: u32,
    },
    /// Position located; `range` is always degenerate
    Success { range: Range, index: usize },
}

impl SearchState {
    fn success(index: usize) -> Self {
        Self::Success {
            range: Range::point(index),
            index,
        }
    }

    /// Current probe index, or the located index once finished
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Step { index, .. } | Self::Success { index, .. } => *index,
        }
    }

    #[must_use]
    pub const fn range(&self) -> Range {
        match self {
            Self::Step { range, .. } | Self::Success { range, .. } => *range,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Estimated probes left; zero once finished
    #[must_use]
    pub const fn remaining_steps(&self) -> u32 {
        match self {
            Self::Step {
                remaining_steps, ..
            } => *remaining_steps,
            Self::Success { .. } => 0,
        }
    }
}

/// `ceil(log2(width))` for a width of at least one
#[must_use]
pub const fn estimate_remaining_steps(width: usize) -> u32 {
    if width <= 1 {
        return 0;
    }
    width.next_power_of_two().trailing_zeros()
}

/// Apply one answer to the search
///
/// `index` does not have to lie inside `range`. Narrowing never moves a bound
/// outward, so a probe outside the range leaves the bound on its side as it
/// was.
///
/// # Errors
///
/// Returns `SearchError::InvalidRange` if `range.start > range.end`.
///
/// # Examples
///
/// ```
/// use findplace::search::{step, Feedback, Range, SearchState};
///
/// let next = step(Range { start: 0, end: 10 }, 5, Feedback::Remembers).unwrap();
/// assert_eq!(
///     next,
///     SearchState::Step {
///         range: Range { start: 6, end: 10 },
///         index: 8,
///         remaining_steps: 2,
///     }
/// );
/// ```
pub fn step(range: Range, index: usize, sense: Feedback) -> Result<SearchState, SearchError> {
    let Range { start, end } = Range::new(range.start, range.end)?;

    if end - start <= 1 {
        let located = match sense {
            Feedback::Remembers => end,
            Feedback::DoesNotRemember => start,
        };
        return Ok(SearchState::success(located));
    }

    let (new_start, new_end) = match sense {
        Feedback::Remembers => (start.max(index.saturating_add(1)), Some(end)),
        Feedback::DoesNotRemember => (start, index.checked_sub(1).map(|i| i.min(end))),
    };

    let new_end = match new_end {
        Some(new_end) if new_start < new_end => new_end,
        // Bounds met or crossed: trust the upper bound of the range we were given
        _ => return Ok(SearchState::success(end)),
    };

    let width = new_end - new_start;
    Ok(SearchState::Step {
        range: Range {
            start: new_start,
            end: new_end,
        },
        index: new_start + width.div_ceil(2),
        remaining_steps: estimate_remaining_steps(width),
    })
}
