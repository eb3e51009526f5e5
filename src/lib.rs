//! findplace - find where you left off in a long, multi-file recording
//!
//! This library locates a listener's last-remembered position in an ordered
//! sequence of audio segments (audiobook chapters, podcast chunks) by asking
//! yes/no questions about short probes, then optionally deletes everything
//! before that position.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod deletion;
pub mod logging;
pub mod output;
pub mod playlist;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FindPlaceError {
    /// Search error
    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),
    /// Playlist error
    #[error("Playlist error: {0}")]
    Playlist(#[from] playlist::PlaylistError),
    /// Deletion error
    #[error("Deletion error: {0}")]
    Deletion(#[from] deletion::DeletionError),
    /// User input error
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
