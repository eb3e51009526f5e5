//! Playback transport - makes the probe segment audible
//!
//! The search never looks at what playback does; a failure to play is
//! reported and the search carries on.

use crate::playlist::Segment;
use std::io;

/// Presents a segment to the listener
pub trait PlaybackTransport {
    /// Start playing `segment`
    ///
    /// # Errors
    /// Returns an `io::Error` if the segment could not be handed to a player.
    fn present(&self, segment: &Segment) -> io::Result<()>;
}

/// Opens segments with the system's default audio player
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlayer;

impl PlaybackTransport for SystemPlayer {
    fn present(&self, segment: &Segment) -> io::Result<()> {
        tracing::debug!(path = %segment.path.display(), "opening probe");
        open::that_detached(&segment.path)
    }
}

/// Leaves playback to the listener
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlayback;

impl PlaybackTransport for NoPlayback {
    fn present(&self, _segment: &Segment) -> io::Result<()> {
        Ok(())
    }
}
