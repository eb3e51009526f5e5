//! Search session state machine
//!
//! A [`SearchSession`] owns the segment sequence and the current
//! [`SearchState`], and is the only thing that changes it. Each event
//! replaces the state wholesale; there is no history.
//!
//! # Workflow
//!
//! ```text
//! NotStarted
//!     ↓ start / start_from
//! ┌─→ Step ──feedback──→ Step ... ──feedback──→ Success
//! │    ├─ rewind (not sure)                       ├─ begin_delete_earlier
//! │    └─ select (manual override)                │      ↓
//! │                                               │  complete_delete_earlier
//! └──────────────── restart ──────────────────────┘
//! ```
//!
//! Deletion is split in two so that a host running the deletion service off
//! the interaction thread cannot submit it twice: while a ticket is
//! outstanding every other event is refused with
//! [`SearchError::DeletionPending`].

use super::display::{self, SegmentStatus};
use super::error::SearchError;
use super::step::{Feedback, Range, SearchState, step};
use crate::deletion::{DeletionError, DeletionService};
use crate::playlist::{PlaylistSource, Segment};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Search session result type
pub type Result<T> = std::result::Result<T, SearchError>;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Searching(SearchState),
}

/// Claim on a pending delete-earlier request
///
/// Obtained from [`SearchSession::begin_delete_earlier`] and handed back to
/// [`SearchSession::complete_delete_earlier`] with the deletion result.
#[derive(Debug)]
#[must_use = "a pending deletion blocks the session until it is completed"]
pub struct DeletionTicket {
    generation: u64,
    located: usize,
    segments: Vec<Segment>,
}

impl DeletionTicket {
    /// Segments to pass to the deletion service
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Result of a completed delete-earlier request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionOutcome {
    /// Number of segments removed
    pub deleted: usize,
}

/// Adaptive positional search over an ordered segment sequence
#[derive(Debug, Default)]
pub struct SearchSession {
    segments: Vec<Segment>,
    phase: SessionPhase,
    generation: u64,
    pending_deletion: Option<u64>,
}

impl SearchSession {
    /// Create a session that has not been started
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and start it over `segments`
    ///
    /// # Errors
    /// Returns `SearchError::EmptyPlaylist` if `segments` is empty.
    pub fn with_segments(segments: Vec<Segment>) -> Result<Self> {
        let mut session = Self::new();
        session.start(segments)?;
        Ok(session)
    }

    /// Start (or start over) a search across `segments`
    ///
    /// The first segment is assumed known, so the initial range begins at 1.
    /// On error the session keeps whatever it held before.
    ///
    /// # Errors
    /// - `SearchError::DeletionPending` if a deletion is outstanding
    /// - `SearchError::EmptyPlaylist` if `segments` is empty
    pub fn start(&mut self, segments: Vec<Segment>) -> Result<SearchState> {
        self.ensure_not_pending()?;
        let state = bootstrap(segments.len())?;

        tracing::debug!(segments = segments.len(), state = ?state, "search started");
        self.segments = segments;
        self.generation = next_generation();
        self.phase = SessionPhase::Searching(state);
        Ok(state)
    }

    /// List `dir` with `source` and start a search over the result
    ///
    /// # Errors
    /// Returns `SearchError::Playlist` if listing fails, or any error from
    /// [`SearchSession::start`]. No partial state is kept on failure.
    pub fn start_from(&mut self, source: &dyn PlaylistSource, dir: &Path) -> Result<SearchState> {
        self.ensure_not_pending()?;
        let segments = source.list(dir)?;
        self.start(segments)
    }

    /// Start over across the current sequence
    ///
    /// # Errors
    /// - `SearchError::NotStarted` if there is no sequence yet
    /// - `SearchError::DeletionPending` if a deletion is outstanding
    pub fn restart(&mut self) -> Result<SearchState> {
        self.ensure_not_pending()?;
        self.current()?;

        let state = bootstrap(self.segments.len())?;
        tracing::debug!(state = ?state, "search restarted");
        self.generation = next_generation();
        self.phase = SessionPhase::Searching(state);
        Ok(state)
    }

    /// Apply the listener's answer to the current probe
    ///
    /// # Errors
    /// Returns `SearchError::InvalidTransition` unless a search step is in progress.
    pub fn feedback(&mut self, sense: Feedback) -> Result<SearchState> {
        let SearchState::Step { range, index, .. } = self.stepping("answer")? else {
            return Err(self.invalid("answer"));
        };

        let next = step(range, index, sense)?;
        tracing::debug!(?sense, from = %range, probe = index, next = ?next, "feedback applied");
        self.phase = SessionPhase::Searching(next);
        Ok(next)
    }

    /// "Not sure": move the probe back one segment
    ///
    /// The probe never moves below the start of the current range; rewinding
    /// at the start leaves the state as it is.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidTransition` unless a search step is in progress.
    pub fn rewind(&mut self) -> Result<SearchState> {
        let SearchState::Step {
            range,
            index,
            remaining_steps,
        } = self.stepping("go back")?
        else {
            return Err(self.invalid("go back"));
        };

        let rewound = index.saturating_sub(1).max(range.start);
        if rewound == index {
            tracing::debug!(probe = index, "rewind at start of range ignored");
        }

        let next = SearchState::Step {
            range,
            index: rewound,
            remaining_steps,
        };
        self.phase = SessionPhase::Searching(next);
        Ok(next)
    }

    /// Manual override: probe `clicked` directly
    ///
    /// The range widens to include `clicked`; the step estimate is kept.
    ///
    /// # Errors
    /// - `SearchError::IndexOutOfBounds` if `clicked` is past the end
    /// - `SearchError::InvalidTransition` unless a search step is in progress
    pub fn select(&mut self, clicked: usize) -> Result<SearchState> {
        let SearchState::Step {
            range,
            remaining_steps,
            ..
        } = self.stepping("select a segment")?
        else {
            return Err(self.invalid("select a segment"));
        };

        if clicked >= self.segments.len() {
            return Err(SearchError::IndexOutOfBounds {
                index: clicked,
                len: self.segments.len(),
            });
        }

        let next = SearchState::Step {
            range: Range {
                start: range.start.min(clicked),
                end: range.end.max(clicked),
            },
            index: clicked,
            remaining_steps,
        };
        tracing::debug!(clicked, next = ?next, "manual override");
        self.phase = SessionPhase::Searching(next);
        Ok(next)
    }

    /// Claim the segments before the located position for deletion
    ///
    /// # Errors
    /// - `SearchError::DeletionPending` if a deletion is already outstanding
    /// - `SearchError::InvalidTransition` unless the search has finished
    /// - `SearchError::NothingToDelete` if the located segment is the first
    pub fn begin_delete_earlier(&mut self) -> Result<DeletionTicket> {
        self.ensure_not_pending()?;
        let SearchState::Success { index, .. } = self.current()? else {
            return Err(self.invalid("delete earlier segments"));
        };
        if index == 0 {
            return Err(SearchError::NothingToDelete);
        }

        self.pending_deletion = Some(self.generation);
        tracing::debug!(count = index, "deletion submitted");
        Ok(DeletionTicket {
            generation: self.generation,
            located: index,
            segments: self.segments[..index].to_vec(),
        })
    }

    /// Resolve a pending deletion with the deletion service's result
    ///
    /// On success the deleted segments are dropped from the sequence and the
    /// session rests on the located segment, now at index 0. On failure
    /// nothing changes and the deletion can be retried.
    ///
    /// # Errors
    /// - `SearchError::StaleTicket` if `ticket` is not the pending one
    /// - `SearchError::Deletion` carrying the service's failure
    pub fn complete_delete_earlier(
        &mut self,
        ticket: DeletionTicket,
        result: std::result::Result<(), DeletionError>,
    ) -> Result<DeletionOutcome> {
        if self.pending_deletion != Some(ticket.generation) {
            return Err(SearchError::StaleTicket);
        }
        self.pending_deletion = None;

        if let Err(e) = result {
            tracing::warn!(error = %e, "deletion failed, keeping sequence");
            return Err(e.into());
        }

        self.segments.drain(..ticket.located);
        self.generation = next_generation();
        self.phase = SessionPhase::Searching(SearchState::Success {
            range: Range::point(0),
            index: 0,
        });
        tracing::info!(deleted = ticket.located, remaining = self.segments.len(), "deleted earlier segments");
        Ok(DeletionOutcome {
            deleted: ticket.located,
        })
    }

    /// Give up a pending deletion, leaving sequence and state as they were
    ///
    /// # Errors
    /// Returns `SearchError::StaleTicket` if `ticket` is not the pending one.
    pub fn cancel_delete_earlier(&mut self, ticket: DeletionTicket) -> Result<()> {
        if self.pending_deletion != Some(ticket.generation) {
            return Err(SearchError::StaleTicket);
        }
        self.pending_deletion = None;
        tracing::debug!(count = ticket.located, "deletion cancelled");
        Ok(())
    }

    /// Delete everything before the located position with `service`
    ///
    /// # Errors
    /// Any error from [`SearchSession::begin_delete_earlier`] or
    /// [`SearchSession::complete_delete_earlier`].
    pub fn delete_earlier(&mut self, service: &dyn DeletionService) -> Result<DeletionOutcome> {
        let ticket = self.begin_delete_earlier()?;
        let result = service.delete(ticket.segments());
        self.complete_delete_earlier(ticket, result)
    }

    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Current state, if started
    #[must_use]
    pub const fn state(&self) -> Option<&SearchState> {
        match &self.phase {
            SessionPhase::NotStarted => None,
            SessionPhase::Searching(state) => Some(state),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self.phase, SessionPhase::Searching(_))
    }

    #[must_use]
    pub const fn is_deletion_pending(&self) -> bool {
        self.pending_deletion.is_some()
    }

    /// Segment under probe while searching, or the located one when finished
    #[must_use]
    pub fn probe(&self) -> Option<&Segment> {
        self.state().and_then(|state| self.segments.get(state.index()))
    }

    /// Located segment, once the search has finished
    #[must_use]
    pub fn located(&self) -> Option<&Segment> {
        match self.state() {
            Some(SearchState::Success { index, .. }) => self.segments.get(*index),
            _ => None,
        }
    }

    /// Display status of every segment; empty before the session starts
    #[must_use]
    pub fn statuses(&self) -> Vec<SegmentStatus> {
        self.state()
            .map(|state| display::statuses(state, self.segments.len()))
            .unwrap_or_default()
    }

    fn ensure_not_pending(&self) -> Result<()> {
        if self.pending_deletion.is_some() {
            return Err(SearchError::DeletionPending);
        }
        Ok(())
    }

    fn current(&self) -> Result<SearchState> {
        self.state().copied().ok_or(SearchError::NotStarted)
    }

    /// Current state, refusing while a deletion is pending
    fn stepping(&self, action: &'static str) -> Result<SearchState> {
        self.ensure_not_pending()?;
        let state = self.current()?;
        if state.is_success() {
            return Err(self.invalid(action));
        }
        Ok(state)
    }

    fn invalid(&self, action: &'static str) -> SearchError {
        let state = match self.phase {
            SessionPhase::NotStarted => "not started",
            SessionPhase::Searching(SearchState::Step { .. }) => "in progress",
            SessionPhase::Searching(SearchState::Success { .. }) => "finished",
        };
        SearchError::InvalidTransition { action, state }
    }
}

/// Initial state for a sequence of `len` segments
///
/// Index space is `[0, len - 1]`. The listener is taken to remember segment 0.
fn bootstrap(len: usize) -> Result<SearchState> {
    let last = len.checked_sub(1).ok_or(SearchError::EmptyPlaylist)?;
    step(Range::new(0, last)?, 0, Feedback::Remembers)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
