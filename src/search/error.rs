//! Search-specific error types
//!
//! This module defines the errors raised by the bisection step and by the
//! search session state machine. Most of them describe a transition that is
//! not valid in the session's current state; those leave the session
//! untouched, so callers can report them and carry on.
//!
//! # Error Types
//!
//! - **`InvalidRange`**: `step` was handed a range with `start > end`
//! - **`InvalidTransition`**: an event arrived in a state that does not accept it
//! - **`DeletionPending`**: a deletion is in flight and must resolve first
//! - **`Playlist`** / **`Deletion`**: failures from the external collaborators

use crate::deletion::DeletionError;
use crate::playlist::PlaylistError;
use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Range bounds are inverted
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    /// There is nothing to search
    #[error("Playlist is empty, nothing to search")]
    EmptyPlaylist,

    /// The session has not been started yet
    #[error("Search has not been started")]
    NotStarted,

    /// Event not accepted in the current state
    #[error("Cannot {action} while the search is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Selected index is past the end of the playlist
    #[error("Segment {index} does not exist (playlist has {len} segments)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The located segment is the first one
    #[error("No segments precede the located position")]
    NothingToDelete,

    /// A deletion has been submitted and not yet resolved
    #[error("A deletion is already in progress")]
    DeletionPending,

    /// Ticket does not belong to the pending deletion
    #[error("Deletion ticket does not match the pending deletion")]
    StaleTicket,

    /// Listing the playlist failed
    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    /// Deleting segments failed
    #[error("Deletion error: {0}")]
    Deletion(#[from] DeletionError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
