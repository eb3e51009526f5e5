//! Adaptive positional search
//!
//! Locates a listener's last-remembered position in an ordered sequence of
//! segments from yes/no answers to short probes:
//! 1. [`step`] narrows the candidate range from one answer (pure)
//! 2. [`SearchSession`] owns the state and applies answers, "not sure"
//!    rewinds, manual overrides and restarts
//! 3. Once located, the session can hand everything before the position to a
//!    deletion service

pub mod display;
pub mod error;
pub mod session;
pub mod step;

pub use display::{SegmentStatus, status_of, statuses};
pub use error::SearchError;
pub use session::{DeletionOutcome, DeletionTicket, SearchSession, SessionPhase};
pub use step::{Feedback, Range, SearchState, estimate_remaining_steps, step};
